//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts (city input, API key configuration)
//! - Rendering readings onto the terminal

use clap::Parser;

mod cli;
mod logger;
mod surface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logger::init(cmd.debug)?;
    cmd.run().await
}
