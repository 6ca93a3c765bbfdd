//! Web manifest icons (PWA/TWA) from the master icon

use crate::constants::pwa::ICON_SIZES;
use crate::error::Result;
use crate::raster::{ensure_dir, load_source, resize_square, save_png};
use std::path::{Path, PathBuf};

/// Resize the master to every web icon size and write them into `public_dir`.
///
/// The source is decoded before anything is created on disk, so a missing or
/// broken master leaves the output directory untouched.
pub fn generate_icons(source_path: &Path, public_dir: &Path) -> Result<Vec<PathBuf>> {
    log::info!("📂 Loading source icon: {}", source_path.display());
    let source = load_source(source_path)?;
    log::info!("✅ Source icon: {}x{}px", source.width(), source.height());

    ensure_dir(public_dir)?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for &(edge, file) in ICON_SIZES.iter() {
        let path = public_dir.join(file);
        let bytes = save_png(resize_square(&source, edge), &path)?;
        log::info!(
            "✅ {:3}px → {:15} ({:6.1} KB)",
            edge,
            file,
            bytes as f64 / 1024.0
        );
        written.push(path);
    }

    log::info!("✅ All icons generated in: {}", public_dir.display());
    Ok(written)
}
