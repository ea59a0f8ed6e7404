//! Folio Core: shared types, access policies, errors, and configuration.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error type, stable error codes, and Result alias
//! - [`policy`]: Access policies (subject → permission set)
//! - [`types`]: Users, callers, articles, patches, wire shapes
//! - [`config`]: TOML configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod policy;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::FolioConfig;
pub use error::{Error, Result};
pub use policy::{AccessPolicy, Operation, Permissions, Subject};
pub use types::{Article, ArticleId, ArticlePatch, ArticleView, Caller, User, UserId};
