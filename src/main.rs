use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use pwa_assets::config::Config;
use pwa_assets::fonts::{FontSource, LabelFont};
use pwa_assets::{android, declarations, pwa, screenshots};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pwa-assets")]
#[command(
    about = "Generate PWA icons, Android launcher icons and install screenshots",
    long_about = None
)]
struct Cli {
    /// Project root that all configured paths are relative to
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to <root>/assets.yaml, optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Web manifest icons from assets/icon.png into public/
    Icons,
    /// Android mipmaps, adaptive-icon foreground and resource XML
    Android,
    /// Portrait and landscape install-dialog mockups into public/
    Screenshots,
    /// Icons, then Android resources, then screenshots
    All,
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Config plus the project root its paths resolve against
struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// An explicitly named config must exist; the implicit one may be absent
    fn open(root: PathBuf, config_path: &Path, explicit: bool) -> Result<Self> {
        let config = if explicit {
            Config::load_required(config_path)?
        } else {
            Config::load(config_path)?
        };
        Ok(Project { root, config })
    }

    fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    fn public_dir(&self) -> PathBuf {
        self.path(&self.config.paths.public_dir)
    }

    fn source_icon(&self) -> PathBuf {
        self.path(&self.config.paths.source_icon)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let explicit_config = cli.config.is_some();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path(&cli.root));

    let command = cli.command.unwrap_or(Commands::All);
    if let Commands::InitConfig { force } = command {
        return init_config_command(&config_path, force);
    }

    let project = Project::open(cli.root, &config_path, explicit_config)?;
    match command {
        Commands::Icons => icons_command(&project),
        Commands::Android => android_command(&project),
        Commands::Screenshots => screenshots_command(&project),
        Commands::All => all_command(&project),
        Commands::InitConfig { .. } => Ok(()),
    }
}

fn icons_command(project: &Project) -> Result<()> {
    log::info!("🎨 Generating web icons");
    pwa::generate_icons(&project.source_icon(), &project.public_dir())?;

    let manifest =
        declarations::manifest_icons_json().context("Failed to build manifest snippet")?;
    println!("\n📋 Use these in manifest.json:\n{}", manifest);

    Ok(())
}

fn android_command(project: &Project) -> Result<()> {
    log::info!("🤖 Generating Android launcher icons");
    let candidates: Vec<PathBuf> = project
        .config
        .paths
        .android_sources
        .iter()
        .map(|p| project.path(p))
        .collect();
    let res_dir = project.path(&project.config.paths.android_res_dir);

    let written = android::generate(&candidates, &res_dir)?;
    log::info!("✅ {} Android resources written to {}", written.len(), res_dir.display());

    Ok(())
}

fn screenshots_command(project: &Project) -> Result<()> {
    log::info!("🖼️  Generating PWA screenshots");
    let font = LabelFont::resolve(&project.root, &project.config.fonts.preferred)?;
    match font.source() {
        FontSource::Preferred(path) => log::debug!("Labels use {}", path.display()),
        FontSource::Bundled => log::debug!("Labels use the bundled font"),
    }
    screenshots::generate(
        &project.source_icon(),
        &project.public_dir(),
        &font,
        &project.config.branding,
    )?;

    Ok(())
}

fn all_command(project: &Project) -> Result<()> {
    // The Android pass reads the web icons, so order matters here
    icons_command(project)?;
    android_command(project)?;
    screenshots_command(project)?;
    log::info!("✅ All assets generated");
    Ok(())
}

fn init_config_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default().save(path)?;
    println!("Created default config at: {}", path.display());
    Ok(())
}
