//! Font lookup and text placement for the mockup screenshots.
//!
//! Preferred fonts are host files and may be missing; DejaVu Sans is compiled
//! into the binary so labels always render.

use crate::constants::fonts::LINE_SPACING;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fs;
use std::path::{Path, PathBuf};

static BUNDLED_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    Preferred(PathBuf),
    Bundled,
}

/// Where a label is pinned relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Anchor is the top-left corner of the first line
    TopLeft,
    /// Anchor is the middle of the text block, both axes
    Center,
}

pub struct LabelFont {
    font: FontVec,
    source: FontSource,
}

impl LabelFont {
    /// First loadable preferred font, otherwise the bundled one.
    ///
    /// Relative entries are tried against `root` and then the user font directory.
    pub fn resolve(root: &Path, preferred: &[PathBuf]) -> Result<Self> {
        for entry in preferred {
            for path in candidate_paths(root, entry) {
                if let Some(font) = load_font_file(&path) {
                    log::info!("🔤 Using font {}", path.display());
                    return Ok(LabelFont {
                        font,
                        source: FontSource::Preferred(path),
                    });
                }
            }
        }

        log::warn!("⚠️  No preferred font available, falling back to bundled DejaVu Sans");
        Self::bundled()
    }

    pub fn bundled() -> Result<Self> {
        let font = FontVec::try_from_vec(BUNDLED_FONT.to_vec())
            .context("Bundled DejaVu Sans could not be parsed")?;
        Ok(LabelFont {
            font,
            source: FontSource::Bundled,
        })
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Pixel scale for a point size, 1pt = 1px
    pub fn scale(&self, size: f32) -> PxScale {
        self.font
            .pt_to_px_scale(size)
            .unwrap_or_else(|| PxScale::from(size))
    }

    /// Height of one line box (ascent to descent) at `size`
    pub fn line_height(&self, size: f32) -> f32 {
        self.font.as_scaled(self.scale(size)).height()
    }

    pub fn text_width(&self, text: &str, size: f32) -> u32 {
        text_size(self.scale(size), &self.font, text).0
    }

    /// Draw `text` at `at`; `\n` starts a new line
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size: f32,
        at: (i32, i32),
        anchor: Anchor,
        color: Rgba<u8>,
    ) {
        let scale = self.scale(size);
        let line_height = self.line_height(size);
        let step = line_height + LINE_SPACING;
        let lines: Vec<&str> = text.lines().collect();

        let top = match anchor {
            Anchor::TopLeft => at.1 as f32,
            Anchor::Center => {
                let block = step * lines.len() as f32 - LINE_SPACING;
                at.1 as f32 - block / 2.0
            }
        };

        for (i, line) in lines.iter().enumerate() {
            let x = match anchor {
                Anchor::TopLeft => at.0,
                Anchor::Center => at.0 - (self.text_width(line, size) / 2) as i32,
            };
            let y = (top + step * i as f32).round() as i32;
            draw_text_mut(canvas, color, x, y, scale, &self.font, line);
        }
    }
}

fn candidate_paths(root: &Path, entry: &Path) -> Vec<PathBuf> {
    if entry.is_absolute() {
        return vec![entry.to_path_buf()];
    }

    let mut paths = vec![root.join(entry)];
    if let Some(font_dir) = dirs::font_dir() {
        paths.push(font_dir.join(entry));
    }
    paths
}

fn load_font_file(path: &Path) -> Option<FontVec> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("Font {} unavailable: {}", path.display(), e);
            return None;
        }
    };

    // Index 0 also picks the first face of a .ttc collection
    match FontVec::try_from_vec_and_index(data, 0) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("⚠️  Ignoring font {}: {}", path.display(), e);
            None
        }
    }
}
