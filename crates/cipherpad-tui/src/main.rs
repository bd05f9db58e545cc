//! Cipherpad TUI entry point.

use std::{fs::File, path::PathBuf};

use clap::Parser;
use cipherpad_tui::runtime::Runtime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Cipherpad terminal UI client
#[derive(Parser, Debug)]
#[command(name = "cipherpad")]
#[command(about = "Terminal UI for a remote AES/RSA/SHA-256 service")]
#[command(version)]
struct Args {
    /// Base URL of the encryption service
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: String,

    /// Write logs to this file (default level: info, override with RUST_LOG)
    ///
    /// Logging is disabled when not provided; the terminal is in raw mode
    /// and cannot host log output.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(file).with_ansi(false))
            .with(filter)
            .init();
    }

    let runtime = Runtime::new(&args.server)?;
    Ok(runtime.run().await?)
}
