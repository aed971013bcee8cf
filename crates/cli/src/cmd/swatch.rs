//! Lay colors out as swatch pages

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use color::{hex, Palette};

pub async fn run(colors: &[String], select: Option<usize>) -> Result<()> {
    // 1. Parse every swatch up front
    let mut parsed = Vec::with_capacity(colors.len());
    for raw in colors {
        let color =
            hex::parse(raw).with_context(|| format!("Failed to parse color {raw:?}"))?;
        parsed.push(color);
    }
    let mut palette = Palette::from_colors(parsed);

    // 2. Apply the selection
    if let Some(index) = select {
        let chosen = palette
            .items()
            .get(index)
            .with_context(|| format!("--select {index} is out of range"))?
            .color;
        palette.select(chosen);
    }

    // 3. Print the pages
    let selected = palette.selected();
    let page_count = palette.page_count();
    let mut index = 0;
    for (page_number, page) in palette.pages().enumerate() {
        println!(
            "{}",
            format!("Page {}/{}", page_number + 1, page_count).bold()
        );
        for item in page {
            let (r, g, b) = item.color.hsv.to_rgb().to_bytes();
            let marker = if select.is_some() && item.color == selected {
                " selected".green().to_string()
            } else {
                String::new()
            };
            println!(
                "  [{index:>2}] {} {}{marker}",
                "  ".on_truecolor(r, g, b),
                hex::format(item.color)
            );
            index += 1;
        }
    }

    println!(
        "{}",
        format!("{} colors across {} pages", palette.len(), page_count).dimmed()
    );

    Ok(())
}
