pub mod colormind;
pub mod curator;

pub use colormind::{ColormindClient, PaletteProvider};
pub use curator::{PaletteCurator, MAX_ATTEMPTS};
