//! # folio-cli
//!
//! Library half of the `folio` binary: argument parsing, logging bootstrap,
//! and command execution against an in-memory store.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::{execute, open_store};
