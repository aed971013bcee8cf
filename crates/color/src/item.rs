//! A swatch entry: a color tagged with a stable identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hsv::Hsva;

/// A palette entry. The id keeps the entry distinct through reorders
/// and lets two visually identical swatches coexist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorItem {
    pub id: Uuid,
    pub color: Hsva,
}

impl ColorItem {
    /// Tag a color with a fresh id.
    pub fn new(color: Hsva) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
        }
    }
}
