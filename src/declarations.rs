//! Fixed-content resource files for the adaptive launcher icon, and the web
//! manifest icon list that goes with the PWA icon table.

use crate::constants::android::BACKGROUND_COLOR;
use crate::constants::pwa::{ICON_SIZES, PURPOSE_ANY_SIZES};
use crate::error::{AssetError, Result};
use crate::raster::ensure_dir;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 108dp vector drawable filled with the launcher background color
pub fn background_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">
    <!-- Light gray background matching PWA icon -->
    <path
        android:fillColor="{}"
        android:pathData="M0,0h108v108h-108z" />
</vector>
"#,
        BACKGROUND_COLOR
    )
}

pub const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@drawable/ic_launcher_background" />
    <foreground android:drawable="@drawable/ic_launcher_foreground" />
</adaptive-icon>
"#;

fn write_text(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// `drawable/ic_launcher_background.xml`
pub fn write_background(res_dir: &Path) -> Result<PathBuf> {
    write_text(
        &res_dir.join("drawable").join("ic_launcher_background.xml"),
        &background_xml(),
    )
}

/// `mipmap-anydpi-v26/ic_launcher.xml` and `ic_launcher_round.xml`, same content
pub fn write_adaptive_wrappers(res_dir: &Path) -> Result<Vec<PathBuf>> {
    let anydpi = res_dir.join("mipmap-anydpi-v26");
    ["ic_launcher.xml", "ic_launcher_round.xml"]
        .iter()
        .map(|name| write_text(&anydpi.join(name), ADAPTIVE_ICON_XML))
        .collect()
}

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ManifestIcons {
    icons: Vec<ManifestIcon>,
}

/// `icons` block for manifest.json covering the web icon table
pub fn manifest_icons_json() -> serde_json::Result<String> {
    let icons = ICON_SIZES
        .iter()
        .map(|&(edge, file)| ManifestIcon {
            src: format!("/{}", file),
            sizes: format!("{}x{}", edge, edge),
            mime: "image/png",
            purpose: PURPOSE_ANY_SIZES.contains(&edge).then_some("any"),
        })
        .collect();

    serde_json::to_string_pretty(&ManifestIcons { icons })
}
