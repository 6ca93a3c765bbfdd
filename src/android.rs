//! Android launcher icons: per-density mipmaps (square and round), the
//! adaptive-icon foreground layer, and the static XML that wires them up.

use crate::constants::android::{
    FOREGROUND_CANVAS, FOREGROUND_ICON, LAUNCHER_ICON, LAUNCHER_ICON_ROUND, MIPMAP_SIZES,
};
use crate::declarations;
use crate::error::{AssetError, Result};
use crate::raster::{adaptive_foreground, load_source, resize_square, round_icon, save_png};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// First candidate that exists on disk.
///
/// When none does, the error names the last candidate, the final fallback.
pub fn resolve_source(candidates: &[PathBuf]) -> Result<PathBuf> {
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| AssetError::MissingSource(candidates.last().cloned().unwrap_or_default()))
}

/// `mipmap-<density>/ic_launcher.png` and `ic_launcher_round.png` for every density
pub fn generate_mipmaps(source: &RgbaImage, res_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(MIPMAP_SIZES.len() * 2);

    for &(density, edge) in MIPMAP_SIZES.iter() {
        let mipmap_dir = res_dir.join(format!("mipmap-{}", density));

        let square = resize_square(source, edge);
        let round = round_icon(&square);

        let square_path = mipmap_dir.join(LAUNCHER_ICON);
        save_png(square, &square_path)?;
        log::info!("✓ Created {}", square_path.display());

        let round_path = mipmap_dir.join(LAUNCHER_ICON_ROUND);
        save_png(round, &round_path)?;
        log::info!("✓ Created {}", round_path.display());

        written.push(square_path);
        written.push(round_path);
    }

    Ok(written)
}

/// `drawable-v24/ic_launcher_foreground.png`
pub fn generate_foreground(source: &RgbaImage, res_dir: &Path) -> Result<PathBuf> {
    let path = res_dir.join("drawable-v24").join(FOREGROUND_ICON);
    save_png(adaptive_foreground(source, FOREGROUND_CANVAS), &path)?;
    log::info!("✓ Created {}", path.display());
    Ok(path)
}

/// Full Android pass: mipmaps, background, foreground, adaptive wrappers
pub fn generate(candidates: &[PathBuf], res_dir: &Path) -> Result<Vec<PathBuf>> {
    let source_path = resolve_source(candidates)?;
    log::info!("Loading source icon: {}", source_path.display());
    let source = load_source(&source_path)?;

    let mut written = generate_mipmaps(&source, res_dir)?;

    let background = declarations::write_background(res_dir)?;
    log::info!("✓ Created {}", background.display());
    written.push(background);

    written.push(generate_foreground(&source, res_dir)?);

    for wrapper in declarations::write_adaptive_wrappers(res_dir)? {
        log::info!("✓ Created {}", wrapper.display());
        written.push(wrapper);
    }

    Ok(written)
}
