//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio - permission-aware article store
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Dataset file, overriding `[dataset] path` from the config
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Credential identifying the caller; anonymous when omitted
    #[arg(long, global = true, env = "FOLIO_CREDENTIAL")]
    pub credential: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the articles the caller may read
    List,

    /// Edit an article
    Edit {
        /// Article id
        #[arg(long)]
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,
    },

    /// Run a JSON array of requests inside one request scope
    Run {
        /// File holding the requests
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,
}
