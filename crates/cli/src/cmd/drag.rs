//! Simulate a picker drag through the debouncer

use std::time::Duration;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};
use tracing::debug;

use color::{hex, Hsva};
use debounce::Debouncer;

pub async fn run(
    from: &str,
    to: &str,
    steps: usize,
    interval_ms: u64,
    window_ms: u64,
) -> Result<()> {
    // 1. Parse the endpoints
    let from = hex::parse(from).context("Failed to parse --from color")?;
    let to = hex::parse(to).context("Failed to parse --to color")?;
    let steps = steps.max(2);

    // 2. Route deliveries into a channel the demo can await
    let window = Duration::from_millis(window_ms);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let debouncer = Debouncer::new(window, move |color: Hsva| {
        let _ = tx.send(color);
    });

    // 3. Drag: one interpolated sample per interval, all fed to emit
    println!(
        "{}",
        format!("Dragging over {steps} samples, {interval_ms}ms apart").bold()
    );
    let from_rgb = from.hsv.to_rgb();
    let to_rgb = to.hsv.to_rgb();
    for step in 0..steps {
        let t = step as f64 / (steps - 1) as f64;
        let sample = Hsva::opaque(from_rgb.lerp(to_rgb, t).to_hsv());
        debug!(step, "emitting drag sample");
        debouncer.emit(sample);
        println!(
            "  {} {}",
            swatch_block(sample),
            hex::format(sample).dimmed()
        );
        sleep(Duration::from_millis(interval_ms)).await;
    }

    // 4. Deliveries stop one quiet window after the last sample; the
    //    drag settles on whichever arrives last
    let settled = last_delivery(&mut rx, window)
        .await
        .context("Debouncer dropped without delivering")?;
    println!();
    println!(
        "{}  {} {}",
        "Settled:".bold(),
        swatch_block(settled),
        hex::format(settled)
    );
    if hex::format(settled) == hex::format(to) {
        println!("  {}", "Last sample won, as it should".green());
    }

    Ok(())
}

/// Keep receiving until the deliveries dry up and return the last one.
///
/// A burst settles one quiet window after its final sample, so a full
/// window of silence means nothing more is coming. With an interval at
/// or above the window every sample settles as its own burst; the
/// drag's result is still the last delivery, not the first.
async fn last_delivery(
    rx: &mut mpsc::UnboundedReceiver<Hsva>,
    window: Duration,
) -> Option<Hsva> {
    let mut settled = rx.recv().await?;
    // Strictly longer than the window so a delivery due right at the
    // boundary is not cut off.
    let quiet = window + Duration::from_millis(50);
    while let Ok(Some(color)) = timeout(quiet, rx.recv()).await {
        settled = color;
    }
    Some(settled)
}

fn swatch_block(color: Hsva) -> String {
    let (r, g, b) = color.hsv.to_rgb().to_bytes();
    "  ".on_truecolor(r, g, b).to_string()
}
