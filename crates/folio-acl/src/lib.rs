//! # folio-acl
//!
//! Access control for Folio content.
//!
//! This crate implements the ACL system for Folio:
//! - Item-level read/write checks against an [`AccessPolicy`](folio_core::AccessPolicy)
//! - Wildcard (`Everyone`) and role-scoped grants, additive only
//! - Coarse role gates for operations such as editing
//!
//! Everything here is a pure decision over immutable inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod engine;
mod proptests;
pub mod traits;

pub use engine::AclEngine;
pub use traits::{Principal, Protected};
