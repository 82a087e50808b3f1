mod config;
mod prompt;
mod session;
mod writer;

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use crate::config::Config;
use crate::prompt::TermPrompter;

#[derive(Parser)]
#[command(name = "makegen", version, about = "Generate a GNU Makefile for a C project")]
struct Cli {
    /// Answers file (TOML); skips the questions
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output file, takes precedence over the answered or configured one
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            session::run_config(config, cli.output.as_deref())?;
        }
        None => {
            session::run_interactive(&mut TermPrompter, cli.output.as_deref())?;
        }
    }

    Ok(())
}
