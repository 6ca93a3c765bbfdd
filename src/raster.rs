//! Pixel-level derivations shared by every generator.
//!
//! All functions are pure over in-memory buffers except `load_source`,
//! `ensure_dir` and `save_png`, which are the only places touching disk.

use crate::constants::android::FOREGROUND_ICON_RATIO;
use crate::error::{AssetError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

/// Open a master image and normalize it to RGBA8
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(AssetError::MissingSource(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(img.to_rgba8())
}

/// Resize to exactly `edge`×`edge` with Lanczos3. Non-square sources are stretched.
pub fn resize_square(source: &RgbaImage, edge: u32) -> RgbaImage {
    imageops::resize(source, edge, edge, FilterType::Lanczos3)
}

/// 8-bit mask with a filled ellipse inscribed in `[0, 0, width, height]`.
///
/// A pixel is inside when its center lies within the ellipse; edges are hard.
pub fn circle_mask(width: u32, height: u32) -> GrayImage {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;

    GrayImage::from_fn(width, height, |x, y| {
        let nx = (x as f32 + 0.5 - rx) / rx;
        let ny = (y as f32 + 0.5 - ry) / ry;
        if nx * nx + ny * ny <= 1.0 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Copy of `square` with everything outside the inscribed circle made transparent
pub fn round_icon(square: &RgbaImage) -> RgbaImage {
    let mask = circle_mask(square.width(), square.height());
    let mut round = square.clone();

    for (pixel, coverage) in round.pixels_mut().zip(mask.pixels()) {
        pixel[3] = pixel[3].min(coverage[0]);
    }

    round
}

/// Edge of the icon placed on an adaptive foreground canvas
pub fn foreground_icon_edge(canvas_edge: u32) -> u32 {
    (canvas_edge as f64 * FOREGROUND_ICON_RATIO).round() as u32
}

/// Offset that centers `inner` inside `outer` on one axis
pub fn centered_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Shrink the master onto a transparent `canvas_edge`² canvas, centered.
///
/// The paste blends with the icon's own alpha, so transparent source pixels
/// leave the canvas transparent.
pub fn adaptive_foreground(source: &RgbaImage, canvas_edge: u32) -> RgbaImage {
    let icon_edge = foreground_icon_edge(canvas_edge);
    let icon = resize_square(source, icon_edge);

    let mut canvas = RgbaImage::from_pixel(canvas_edge, canvas_edge, Rgba([0, 0, 0, 0]));
    let offset = i64::from(centered_offset(canvas_edge, icon_edge));
    imageops::overlay(&mut canvas, &icon, offset, offset);

    canvas
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `img` as PNG, creating the parent directory. Returns the file size in bytes.
pub fn save_png(img: impl Into<DynamicImage>, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let img: DynamicImage = img.into();
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| AssetError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    let written = fs::metadata(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(written.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{android, pwa};

    fn opaque(edge: u32) -> RgbaImage {
        RgbaImage::from_pixel(edge, edge, Rgba([200, 40, 40, 255]))
    }

    #[test]
    fn test_resize_hits_every_table_size() {
        let source = opaque(512);
        let edges = pwa::ICON_SIZES
            .iter()
            .map(|(edge, _)| *edge)
            .chain(android::MIPMAP_SIZES.iter().map(|(_, edge)| *edge));

        for edge in edges {
            let out = resize_square(&source, edge);
            assert_eq!(out.dimensions(), (edge, edge));
            assert_eq!(out.as_raw().len(), (edge * edge * 4) as usize);
        }
    }

    #[test]
    fn test_resize_forces_square() {
        let wide = RgbaImage::from_pixel(300, 100, Rgba([0, 0, 255, 255]));
        assert_eq!(resize_square(&wide, 64).dimensions(), (64, 64));
    }

    #[test]
    fn test_round_icon_keeps_inside_and_clears_corners() {
        for edge in [48u32, 72, 96, 144, 192] {
            let round = round_icon(&opaque(edge));
            let r = edge as f32 / 2.0;

            for (x, y, pixel) in round.enumerate_pixels() {
                let dx = x as f32 + 0.5 - r;
                let dy = y as f32 + 0.5 - r;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= r - 0.5 {
                    assert_eq!(pixel[3], 255, "({}, {}) inside at edge {}", x, y, edge);
                    assert_eq!(pixel[0], 200);
                } else if dist > r + 0.5 {
                    assert_eq!(pixel[3], 0, "({}, {}) outside at edge {}", x, y, edge);
                }
            }

            for (x, y) in [(0, 0), (edge - 1, 0), (0, edge - 1), (edge - 1, edge - 1)] {
                assert_eq!(round.get_pixel(x, y)[3], 0);
            }
        }
    }

    #[test]
    fn test_round_icon_is_idempotent_on_alpha() {
        let mut source = opaque(96);
        // Partially transparent band to make sure existing alpha is respected
        for x in 0..96 {
            source.put_pixel(x, 48, Rgba([10, 10, 10, 90]));
        }

        let once = round_icon(&source);
        let twice = round_icon(&once);

        let alpha = |img: &RgbaImage| img.pixels().map(|p| p[3]).collect::<Vec<_>>();
        assert_eq!(alpha(&once), alpha(&twice));
        assert_eq!(once.get_pixel(48, 48)[3], 90);
    }

    #[test]
    fn test_mask_is_binary() {
        let mask = circle_mask(144, 144);
        assert!(mask.pixels().all(|p| p[0] == 0 || p[0] == 255));
        assert_eq!(mask.get_pixel(72, 72)[0], 255);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_foreground_geometry_for_1024_canvas() {
        assert_eq!(foreground_icon_edge(1024), 563);
        assert_eq!(centered_offset(1024, 563), 230);
    }

    #[test]
    fn test_adaptive_foreground_places_icon_centered() {
        let canvas = adaptive_foreground(&opaque(512), 1024);
        assert_eq!(canvas.dimensions(), (1024, 1024));

        // Pasted region spans 230..793 on both axes
        assert_eq!(canvas.get_pixel(230, 230)[3], 255);
        assert_eq!(canvas.get_pixel(792, 792)[3], 255);
        assert_eq!(canvas.get_pixel(511, 511)[3], 255);
        assert_eq!(canvas.get_pixel(229, 511)[3], 0);
        assert_eq!(canvas.get_pixel(511, 229)[3], 0);
        assert_eq!(canvas.get_pixel(793, 511)[3], 0);
        assert_eq!(canvas.get_pixel(511, 793)[3], 0);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);

        let covered = canvas.pixels().filter(|p| p[3] != 0).count();
        assert_eq!(covered, 563 * 563);
    }

    #[test]
    fn test_save_into_file_parent_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("public");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = save_png(opaque(16), &blocker.join("icon-16.png")).unwrap_err();
        match err {
            AssetError::Io { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_adaptive_foreground_keeps_transparent_source_transparent() {
        let clear = RgbaImage::from_pixel(256, 256, Rgba([255, 0, 0, 0]));
        let canvas = adaptive_foreground(&clear, 1024);
        assert!(canvas.pixels().all(|p| p[3] == 0));
    }
}
