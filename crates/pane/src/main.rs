//! pane - host-side tooling for configurable web parts
//!
//! Resolves the running-environment message for a host, loads list options
//! through the configured source, and activates the hello web part to print
//! its property pane or view model.

use clap::Parser;

mod commands;
mod util;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
