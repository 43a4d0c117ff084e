mod auth;
mod cli;
mod config;
mod error;
mod export;
mod github;
mod graph;
mod output;
mod report;
mod resolve;
mod timing;
mod workflow;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = Cli::parse();
    info!("Starting runmap - Workflow Run Summary Tool");
    cli.execute().await?;

    Ok(())
}
