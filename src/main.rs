mod apply;
mod cli;
mod color;
mod commands;
mod config;
mod docx_html;
mod docx_reader;
mod edit;
mod error;
mod extract;
mod import;
mod markdown;
mod presets;
mod profile;
mod reader;
mod skill;
mod store;
mod summary;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = config::load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    commands::run(&cli, &config)
}
