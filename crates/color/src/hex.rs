//! Six-digit hex codec for colors.
//!
//! Accepts `rrggbb` with or without a leading `#`, surrounded by any
//! amount of whitespace. Output is always six lowercase digits with no
//! `#`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::hsv::Hsva;
use crate::rgb::Rgb;

/// Rejection reasons from [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("empty color string")]
    Empty,
    #[error("expected 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit {0:?}")]
    BadDigit(char),
}

/// Parse a hex string into an opaque color.
pub fn parse(input: &str) -> Result<Hsva, ParseHexError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseHexError::Empty);
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    // Counted in characters so the error matches what the user typed.
    let length = digits.chars().count();
    if length != 6 {
        return Err(ParseHexError::BadLength(length));
    }

    let mut value = 0u32;
    for c in digits.chars() {
        value = (value << 4) | nibble(c)?;
    }

    let rgb = Rgb::new(
        ((value & 0xFF0000) >> 16) as f64 / 255.0,
        ((value & 0x00FF00) >> 8) as f64 / 255.0,
        (value & 0x0000FF) as f64 / 255.0,
    );
    Ok(Hsva::opaque(rgb.to_hsv()))
}

/// Format a color as six lowercase hex digits.
///
/// The alpha channel does not take part; two colors differing only in
/// alpha format identically.
pub fn format(color: Hsva) -> String {
    let (r, g, b) = color.hsv.to_rgb().to_bytes();
    let value = (r as u32) << 16 | (g as u32) << 8 | b as u32;
    format!("{value:06x}")
}

fn nibble(c: char) -> Result<u32, ParseHexError> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'a'..='f' => Ok(c as u32 - 'a' as u32 + 10),
        'A'..='F' => Ok(c as u32 - 'A' as u32 + 10),
        _ => Err(ParseHexError::BadDigit(c)),
    }
}

impl FromStr for Hsva {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Hsva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self))
    }
}
