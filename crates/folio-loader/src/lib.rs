//! # folio-loader
//!
//! Request-scoped batch loading for Folio.
//!
//! - [`BatchLoader`]: coalesces point lookups issued together into one
//!   fetch, caches results, and supports explicit clear/prime after a write
//! - [`BatchFn`]: the fetch seam a loader calls once per batch

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod fetch;
mod loader;
mod proptests;

pub use fetch::BatchFn;
pub use loader::{BatchLoader, LoadKey, LoadValue};
