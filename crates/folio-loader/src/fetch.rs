//! The fetch seam behind a [`BatchLoader`](crate::BatchLoader).

use async_trait::async_trait;
use folio_core::Result;

/// Resolves many keys with one call.
///
/// Implementations receive the deduplicated keys of one batch, in
/// first-request order, and return one entry per key at the same position.
/// `None` (or a missing trailing entry) means "no value for this key" and
/// surfaces as `NotFound` to that key's callers only. Returning `Err` fails
/// the whole batch.
#[async_trait]
pub trait BatchFn<K, V>: Send + Sync {
    /// Fetch values for `keys`.
    async fn fetch(&self, keys: &[K]) -> Result<Vec<Option<V>>>;
}
