//! HSV representation and conversion back to RGB.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

/// An HSV color. Hue is a turn fraction in `[0, 1]`, with `-1` as the
/// undefined-hue marker of an achromatic color; saturation and value
/// are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert to RGB by hue-sector decomposition. A hue of `1` wraps
    /// around to red.
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, v } = self;
        if s == 0.0 {
            // Achromatic grey, hue does not matter.
            return Rgb::new(v, v, v);
        }

        let angle = if h >= 1.0 { 0.0 } else { h };
        let sector = angle * 360.0 / 60.0;
        let i = sector.floor();
        let f = sector - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - (s * f));
        let t = v * (1.0 - (s * (1.0 - f)));

        match i as i32 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

/// An HSV color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub hsv: Hsv,
    pub a: f64,
}

impl Hsva {
    pub const fn new(hsv: Hsv, a: f64) -> Self {
        Self { hsv, a }
    }

    /// Wrap an HSV color with full opacity.
    pub const fn opaque(hsv: Hsv) -> Self {
        Self { hsv, a: 1.0 }
    }

    /// Fully opaque white.
    pub const fn white() -> Self {
        Self::opaque(Hsv::new(0.0, 0.0, 1.0))
    }
}
