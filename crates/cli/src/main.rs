//! Colorwell CLI - cw command

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;

/// Colorwell - color picking tools with a debounced core
#[derive(Parser)]
#[command(name = "cw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a picker drag and show the debounced result
    Drag {
        /// Color the drag starts from
        #[arg(long, default_value = "#ff0000")]
        from: String,

        /// Color the drag ends on
        #[arg(long, default_value = "#0000ff")]
        to: String,

        /// Number of samples along the drag
        #[arg(long, default_value = "12")]
        steps: usize,

        /// Milliseconds between samples
        #[arg(long, default_value = "50")]
        interval_ms: u64,

        /// Quiet window in milliseconds before the value settles
        #[arg(long, default_value = "160")]
        window_ms: u64,
    },
    /// Convert a hex color into its RGB and HSV readings
    Convert {
        /// Hex color, with or without '#'
        color: String,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Lay hex colors out as swatch pages
    Swatch {
        /// Hex colors, one per swatch
        #[arg(required = true)]
        colors: Vec<String>,

        /// Index of the swatch to select
        #[arg(long)]
        select: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Drag {
            from,
            to,
            steps,
            interval_ms,
            window_ms,
        } => cmd::drag::run(&from, &to, steps, interval_ms, window_ms).await,
        Commands::Convert { color, json } => cmd::convert::run(&color, json).await,
        Commands::Swatch { colors, select } => cmd::swatch::run(&colors, select).await,
    }
}
