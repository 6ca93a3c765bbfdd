//! Install-dialog mockups for the web manifest `screenshots` entry.
//!
//! Both layouts are fixed; every coordinate below belongs to one of the two
//! canvas sizes. Boxes are `[x0, y0, x1, y1]`, inclusive on both ends.

use crate::config::BrandingConfig;
use crate::constants::screenshots::{
    FEATURE_STEP, FEATURE_TEXT, LANDSCAPE_FILE, LANDSCAPE_SIZE, PANEL, PORTRAIT_FILE,
    PORTRAIT_ICON_EDGE, PORTRAIT_ICON_POS, PORTRAIT_SIZE, STATUS_BAR, THEME, WHITE,
};
use crate::fonts::{Anchor, LabelFont};
use crate::raster::{load_source, resize_square, save_png};
use anyhow::Result;
use image::imageops;
use image::{DynamicImage, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

fn fill_box(canvas: &mut RgbaImage, [x0, y0, x1, y1]: [i32; 4], color: Rgba<u8>) {
    let width = (x1 - x0 + 1) as u32;
    let height = (y1 - y0 + 1) as u32;
    draw_filled_rect_mut(canvas, Rect::at(x0, y0).of_size(width, height), color);
}

fn flatten(canvas: RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// 540×720 phone-style preview: header, icon, title block and install button
pub fn render_portrait(
    icon: Option<&RgbaImage>,
    font: &LabelFont,
    branding: &BrandingConfig,
) -> RgbImage {
    let (width, height) = PORTRAIT_SIZE;
    let mut canvas = RgbaImage::from_pixel(width, height, THEME);

    fill_box(&mut canvas, [0, 0, 540, 30], STATUS_BAR);
    fill_box(&mut canvas, [0, 30, 540, 120], THEME);

    if let Some(icon) = icon {
        let icon = resize_square(icon, PORTRAIT_ICON_EDGE);
        let (x, y) = PORTRAIT_ICON_POS;
        imageops::overlay(&mut canvas, &icon, x, y);
    }

    font.draw(&mut canvas, &branding.app_name, 48.0, (270, 380), Anchor::Center, WHITE);
    font.draw(&mut canvas, &branding.tagline, 24.0, (270, 430), Anchor::Center, WHITE);
    font.draw(&mut canvas, &branding.description, 14.0, (270, 500), Anchor::Center, WHITE);

    fill_box(&mut canvas, [40, 620, 500, 680], WHITE);
    font.draw(&mut canvas, &branding.install_label, 24.0, (270, 650), Anchor::Center, THEME);

    flatten(canvas)
}

/// 1280×720 tablet-style preview: title on the left, feature list on the right
pub fn render_landscape(font: &LabelFont, branding: &BrandingConfig) -> RgbImage {
    let (width, height) = LANDSCAPE_SIZE;
    let mut canvas = RgbaImage::from_pixel(width, height, THEME);

    fill_box(&mut canvas, [0, 0, 640, 720], THEME);
    fill_box(&mut canvas, [640, 0, 1280, 720], PANEL);

    font.draw(&mut canvas, &branding.app_name, 48.0, (320, 200), Anchor::Center, WHITE);
    font.draw(&mut canvas, &branding.tagline, 20.0, (320, 300), Anchor::Center, WHITE);

    let mut y = 150;
    for feature in &branding.features {
        font.draw(&mut canvas, feature, 18.0, (680, y), Anchor::TopLeft, FEATURE_TEXT);
        y += FEATURE_STEP;
    }

    flatten(canvas)
}

/// Render both mockups into `public_dir`. A missing or broken icon only drops
/// the icon from the portrait layout.
pub fn generate(
    icon_path: &Path,
    public_dir: &Path,
    font: &LabelFont,
    branding: &BrandingConfig,
) -> Result<Vec<PathBuf>> {
    let icon = match load_source(icon_path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("⚠️  Rendering portrait without icon: {}", e);
            None
        }
    };

    let portrait_path = public_dir.join(PORTRAIT_FILE);
    save_png(render_portrait(icon.as_ref(), font, branding), &portrait_path)?;
    log::info!("✅ Portrait screenshot created: {}", portrait_path.display());

    let landscape_path = public_dir.join(LANDSCAPE_FILE);
    save_png(render_landscape(font, branding), &landscape_path)?;
    log::info!("✅ Landscape screenshot created: {}", landscape_path.display());

    Ok(vec![portrait_path, landscape_path])
}
