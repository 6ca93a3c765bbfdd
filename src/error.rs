//! Failures of the raster and declaration layers.
//!
//! Everything here aborts the run. Optional resources (preferred fonts, the
//! mockup icon) never surface as an `AssetError`; they are logged and skipped.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Mandatory source image is not at the expected path
    #[error("source image not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// Source exists but is not a raster we can decode
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output directory or file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding of an output failed
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
