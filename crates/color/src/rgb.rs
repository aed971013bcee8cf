//! RGB representation and conversion into HSV.

use serde::{Deserialize, Serialize};

use crate::hsv::Hsv;

/// An RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Quantize to 8-bit channels, rounding to the nearest step.
    pub fn to_bytes(self) -> (u8, u8, u8) {
        let quantize = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Convert to HSV.
    ///
    /// Near-achromatic colors come back with `h = 0` and `s = 0`; an
    /// input with chroma but no positive channel (out of range) gets
    /// the undefined-hue marker `h = -1`.
    pub fn to_hsv(self) -> Hsv {
        let Self { r, g, b } = self;
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);

        let v = max;
        let delta = max - min;

        // Below this chroma the hue is numerically meaningless.
        if delta <= 0.00001 {
            return Hsv { h: 0.0, s: 0.0, v: max };
        }
        if max <= 0.0 {
            return Hsv { h: -1.0, s: 0.0, v };
        }
        let s = delta / max;

        let hue = if r == max {
            (g - b) / delta // between yellow and magenta
        } else if g == max {
            2.0 + (b - r) / delta // between cyan and yellow
        } else {
            4.0 + (r - g) / delta // between magenta and cyan
        };

        let h = hue * 60.0; // degrees
        Hsv {
            h: (if h < 0.0 { h + 360.0 } else { h }) / 360.0,
            s,
            v,
        }
    }

    /// Linear interpolation toward `other`, `t` clamped to `[0, 1]`.
    /// Exact at both endpoints.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// An RGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            a,
        }
    }
}
