//! Palettier - curated color palette API.
//!
//! Post-processes random palettes from the Colormind generator into a
//! small UI theming palette (one background color plus up to three
//! light accents). This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
