//! Veil TUI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use veil_tui::{Runtime, TerminalDriver};

/// Veil terminal chat client
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(about = "Terminal chat client with emoji, code-template, and cloak transforms")]
#[command(version)]
struct Args {
    /// Seed for template selection
    ///
    /// If not provided, a random seed is drawn at startup. Fixing the
    /// seed makes template picks reproducible across runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent unless RUST_LOG asks otherwise; stderr output would tear
    // the alternate screen
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);

    let driver = TerminalDriver::new()?;
    Ok(Runtime::new(driver, seed).run().await?)
}
