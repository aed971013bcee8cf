//! CLI command implementations

pub mod convert;
pub mod drag;
pub mod swatch;
