pub mod color;
pub mod config;
pub mod palette;

pub use color::{Rgb, WHITE};
pub use config::AppConfig;
pub use palette::Palette;
