//! Webchurn CLI: turn a web page into title, date, and markdown.
//!
//! Fetches the page at the given URL, runs the extraction engine over it,
//! and prints the result as JSON.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
