use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "assets.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fonts: FontsConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

/// Project-relative locations of inputs and outputs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PathsConfig {
    #[serde(default = "default_source_icon")]
    pub source_icon: PathBuf,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Android master candidates, first existing one wins
    #[serde(default = "default_android_sources")]
    pub android_sources: Vec<PathBuf>,
    #[serde(default = "default_android_res_dir")]
    pub android_res_dir: PathBuf,
}

fn default_source_icon() -> PathBuf {
    PathBuf::from("assets/icon.png")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_android_sources() -> Vec<PathBuf> {
    vec![
        PathBuf::from("public/icon-1024x1024.png"),
        PathBuf::from("public/icon-512.png"),
    ]
}

fn default_android_res_dir() -> PathBuf {
    PathBuf::from("Android/app/src/main/res")
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            source_icon: default_source_icon(),
            public_dir: default_public_dir(),
            android_sources: default_android_sources(),
            android_res_dir: default_android_res_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FontsConfig {
    /// Tried in order before the bundled font. Relative entries resolve
    /// against the project root, then the user font directory.
    #[serde(default = "default_preferred_fonts")]
    pub preferred: Vec<PathBuf>,
}

fn default_preferred_fonts() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
        PathBuf::from("Helvetica.ttc"),
    ]
}

impl Default for FontsConfig {
    fn default() -> Self {
        FontsConfig {
            preferred: default_preferred_fonts(),
        }
    }
}

/// Copy shown on the install-dialog mockups
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BrandingConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_install_label")]
    pub install_label: String,
    #[serde(default = "default_features")]
    pub features: Vec<String>,
}

fn default_app_name() -> String {
    "1x1 Trainer".to_string()
}

fn default_tagline() -> String {
    "Lerne das Einmaleins".to_string()
}

fn default_description() -> String {
    "Übe mit verschiedenen\nSpielmodi".to_string()
}

fn default_install_label() -> String {
    "Installieren".to_string()
}

fn default_features() -> Vec<String> {
    vec![
        "✓ 4 Spielmodi".to_string(),
        "✓ Offline verfügbar".to_string(),
        "✓ Installierbar".to_string(),
        "✓ Responsive Design".to_string(),
    ]
}

impl Default for BrandingConfig {
    fn default() -> Self {
        BrandingConfig {
            app_name: default_app_name(),
            tagline: default_tagline(),
            description: default_description(),
            install_label: default_install_label(),
            features: default_features(),
        }
    }
}

impl Config {
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Read `path` if it exists, otherwise fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Like `load`, but a missing file is an error. Used for paths the user named.
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        Self::load(path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.paths.source_icon.as_os_str().is_empty() {
            bail!("paths.source_icon cannot be empty");
        }
        if self.paths.public_dir.as_os_str().is_empty() {
            bail!("paths.public_dir cannot be empty");
        }
        if self.paths.android_res_dir.as_os_str().is_empty() {
            bail!("paths.android_res_dir cannot be empty");
        }
        if self.paths.android_sources.is_empty() {
            bail!("paths.android_sources needs at least one candidate");
        }
        if self.paths.android_sources.iter().any(|p| p.as_os_str().is_empty()) {
            bail!("paths.android_sources cannot contain empty entries");
        }

        // An empty list is fine (bundled font only), empty entries are not
        if self.fonts.preferred.iter().any(|p| p.as_os_str().is_empty()) {
            bail!("fonts.preferred cannot contain empty entries");
        }

        if self.branding.app_name.trim().is_empty() {
            bail!("branding.app_name cannot be empty");
        }

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;

        fs::write(path, yaml).context("Failed to write config file")?;

        Ok(())
    }
}
