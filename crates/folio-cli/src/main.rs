//! Folio CLI
//!
//! Lists and edits articles in a dataset as a given caller.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use folio_cli::{execute, logging, Cli};
use folio_core::FolioConfig;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = FolioConfig::load(cli.config.as_deref())?;

    logging::init(&config.logging.level);
    tracing::debug!(?config, "Configuration loaded");

    let mut stdout = std::io::stdout().lock();
    if execute(cli, &config, &mut stdout).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
