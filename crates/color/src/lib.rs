//! Color model for the colorwell tools
//!
//! This crate provides the data layer the picker components share:
//! - RGB and HSV with normalized `[0, 1]` channels, converted both ways
//! - Six-digit hex parsing and formatting
//! - Identity-tagged swatches collected into a pageable palette

pub mod hex;
pub mod hsv;
pub mod item;
pub mod palette;
pub mod rgb;

pub use hex::ParseHexError;
pub use hsv::{Hsv, Hsva};
pub use item::ColorItem;
pub use palette::{Palette, PAGE_SIZE};
pub use rgb::{Rgb, Rgba};
