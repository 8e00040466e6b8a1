pub mod colors;

pub use colors::handle_colors;
