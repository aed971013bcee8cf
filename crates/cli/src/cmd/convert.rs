//! Convert a hex color into RGB and HSV readings

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use color::hex;

/// Machine-readable shape for --json output.
#[derive(Serialize)]
struct Readings {
    hex: String,
    r: u8,
    g: u8,
    b: u8,
    h: f64,
    s: f64,
    v: f64,
}

pub async fn run(input: &str, json: bool) -> Result<()> {
    let color = hex::parse(input).context("Failed to parse color")?;
    let rgb = color.hsv.to_rgb();
    let (r, g, b) = rgb.to_bytes();

    if json {
        let readings = Readings {
            hex: hex::format(color),
            r,
            g,
            b,
            h: color.hsv.h,
            s: color.hsv.s,
            v: color.hsv.v,
        };
        println!("{}", serde_json::to_string_pretty(&readings)?);
        return Ok(());
    }

    println!("{} {}", "    ".on_truecolor(r, g, b), hex::format(color).bold());
    println!();
    println!(
        "RGB:  {} {} {}  ({:.3} {:.3} {:.3})",
        r.red(),
        g.green(),
        b.blue(),
        rgb.r,
        rgb.g,
        rgb.b
    );
    println!(
        "HSV:  {:.1}° {:.1}% {:.1}%",
        color.hsv.h * 360.0,
        color.hsv.s * 100.0,
        color.hsv.v * 100.0
    );

    Ok(())
}
