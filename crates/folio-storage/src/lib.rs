//! # folio-storage
//!
//! Dataset storage for Folio.
//!
//! This crate provides:
//! - The [`ContentStore`] abstraction loaders and repositories fetch from
//! - [`MemoryStore`], an in-memory backend shared across request scopes
//! - [`Dataset`] files (TOML) with id and credential validation
//! - A built-in demo dataset ([`seed::demo`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod memory;
pub mod seed;
pub mod traits;

pub use dataset::Dataset;
pub use memory::MemoryStore;
pub use traits::ContentStore;
