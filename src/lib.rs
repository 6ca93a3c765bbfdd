// Library exports for the CLI and tests
pub mod android;
pub mod config;
pub mod constants;
pub mod declarations;
pub mod error;
pub mod fonts;
pub mod pwa;
pub mod raster;
pub mod screenshots;
