//! Coalescing, caching batch loader.
//!
//! A [`BatchLoader`] turns many point lookups issued together into one
//! [`BatchFn::fetch`] call, and caches what it fetched for the rest of its
//! lifetime (normally one request scope).
//!
//! # Batching window
//!
//! A `load` that misses the cache registers its key in the open batch and
//! yields once before the batch is dispatched. Every other `load` polled
//! before it resumes (siblings in a `join!`/`join_all`, or other tasks on the
//! same runtime) joins the same batch. The first waiter to resume takes the
//! batch, fetches it, and fans the outcome out to all waiters.
//!
//! # Key states
//!
//! ```text
//! Uncached --load--> Pending --batch resolves--> Cached
//! Cached   --clear-->  Uncached
//! any      --prime-->  Cached
//! ```
//!
//! A batch that resolves for a key which was cleared or primed while it was
//! in flight still answers its own waiters, but does not write the cache.
//! Failed batches cache nothing.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use folio_loader::{BatchFn, BatchLoader};
//!
//! struct Squares;
//!
//! #[async_trait]
//! impl BatchFn<u32, u64> for Squares {
//!     async fn fetch(&self, keys: &[u32]) -> folio_core::Result<Vec<Option<u64>>> {
//!         Ok(keys.iter().map(|k| Some(u64::from(*k) * u64::from(*k))).collect())
//!     }
//! }
//!
//! # tokio_test_block_on(async {
//! let loader = BatchLoader::new("squares", Squares);
//! let (a, b) = tokio::join!(loader.load(3), loader.load(4));
//! assert_eq!((a.unwrap(), b.unwrap()), (9, 16));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_core::{Error, Result};
use tokio::sync::OnceCell;

use crate::fetch::BatchFn;

/// Bounds required of a loader key.
pub trait LoadKey: Eq + Hash + Clone + fmt::Display + Send + Sync + 'static {}

impl<T> LoadKey for T where T: Eq + Hash + Clone + fmt::Display + Send + Sync + 'static {}

/// Bounds required of a loaded value.
pub trait LoadValue: Clone + Send + Sync + 'static {}

impl<T> LoadValue for T where T: Clone + Send + Sync + 'static {}

/// What a batch resolved to: values by key, or the fetch failure message.
type Outcome<K, V> = std::result::Result<HashMap<K, V>, String>;

// ============================================================================
// Batch
// ============================================================================

/// One set of keys fetched together, plus its single completion.
struct Batch<K, V> {
    keys: Mutex<BatchKeys<K>>,
    outcome: OnceCell<Outcome<K, V>>,
}

/// Deduplicated keys in first-request order.
struct BatchKeys<K> {
    order: Vec<K>,
    seen: HashSet<K>,
}

impl<K: LoadKey, V> Batch<K, V> {
    fn new() -> Self {
        Self {
            keys: Mutex::new(BatchKeys {
                order: Vec::new(),
                seen: HashSet::new(),
            }),
            outcome: OnceCell::new(),
        }
    }

    fn push(&self, key: K) {
        let mut keys = lock(&self.keys);
        if keys.seen.insert(key.clone()) {
            keys.order.push(key);
        }
    }

    fn keys(&self) -> Vec<K> {
        lock(&self.keys).order.clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// BatchLoader
// ============================================================================

struct State<K, V> {
    cache: HashMap<K, V>,
    /// Batch still accepting keys.
    open: Option<Arc<Batch<K, V>>>,
    /// Unresolved batch each uncached key is waiting on.
    pending: HashMap<K, Arc<Batch<K, V>>>,
}

/// Request-scoped coalescing loader over a [`BatchFn`].
///
/// The loader never shares its cache; build one per scope that should see a
/// consistent view of the data.
pub struct BatchLoader<K, V> {
    name: String,
    fetcher: Box<dyn BatchFn<K, V>>,
    state: Mutex<State<K, V>>,
}

impl<K: LoadKey, V: LoadValue> BatchLoader<K, V> {
    /// Create a loader. `name` identifies it in errors and log lines.
    pub fn new<F>(name: impl Into<String>, fetcher: F) -> Self
    where
        F: BatchFn<K, V> + 'static,
    {
        Self {
            name: name.into(),
            fetcher: Box::new(fetcher),
            state: Mutex::new(State {
                cache: HashMap::new(),
                open: None,
                pending: HashMap::new(),
            }),
        }
    }

    /// The loader's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Load the value for `key`.
    ///
    /// Returns immediately on a cache hit. Otherwise joins the current batch
    /// and waits for it; fails with `NotFound` if the fetch had no value for
    /// `key`, or with `Fetch` if the whole batch failed.
    pub async fn load(&self, key: K) -> Result<V> {
        let batch = {
            let mut state = self.state();
            if let Some(value) = state.cache.get(&key) {
                return Ok(value.clone());
            }
            match state.pending.get(&key) {
                Some(batch) => Arc::clone(batch),
                None => {
                    let batch = Arc::clone(state.open.get_or_insert_with(|| Arc::new(Batch::new())));
                    batch.push(key.clone());
                    state.pending.insert(key.clone(), Arc::clone(&batch));
                    batch
                }
            }
        };

        if !batch.outcome.initialized() {
            tokio::task::yield_now().await;
        }

        let outcome = batch.outcome.get_or_init(|| self.dispatch(&batch)).await;

        // A prime during the fetch outranks the batch, whatever it returned.
        if let Some(value) = self.state().cache.get(&key) {
            return Ok(value.clone());
        }
        match outcome {
            Ok(values) => values
                .get(&key)
                .cloned()
                .ok_or_else(|| Error::not_found(self.name.as_str(), &key)),
            Err(message) => Err(Error::fetch(self.name.as_str(), message.as_str())),
        }
    }

    /// Load several keys as one batch. Results are in input order.
    pub async fn load_many<I>(&self, keys: I) -> Vec<Result<V>>
    where
        I: IntoIterator<Item = K>,
    {
        futures::future::join_all(keys.into_iter().map(|key| self.load(key))).await
    }

    /// Drop the cached value for `key`; the next `load` fetches again.
    ///
    /// Batches already in flight still answer their own waiters.
    pub fn clear(&self, key: &K) {
        let mut state = self.state();
        state.cache.remove(key);
        state.pending.remove(key);
    }

    /// Drop every cached value.
    pub fn clear_all(&self) {
        let mut state = self.state();
        state.cache.clear();
        state.pending.clear();
    }

    /// Cache `value` for `key` without fetching.
    pub fn prime(&self, key: K, value: V) {
        let mut state = self.state();
        state.pending.remove(&key);
        state.cache.insert(key, value);
    }

    /// Clear then prime `key` in one critical section.
    ///
    /// No `load` of `key` can run between the two steps, so readers see
    /// either the old entry or `value`, never a refetch in between.
    pub fn clear_and_prime(&self, key: K, value: V) {
        let mut state = self.state();
        state.cache.remove(&key);
        state.pending.remove(&key);
        state.cache.insert(key, value);
        log::debug!("Loader '{}' primed a fresh entry", self.name);
    }

    /// Returns `true` if `key` is served from cache.
    pub fn is_cached(&self, key: &K) -> bool {
        self.state().cache.contains_key(key)
    }

    fn state(&self) -> MutexGuard<'_, State<K, V>> {
        lock(&self.state)
    }

    /// Close `batch`, fetch its keys, and settle the cache.
    async fn dispatch(&self, batch: &Arc<Batch<K, V>>) -> Outcome<K, V> {
        {
            let mut state = self.state();
            if state.open.as_ref().is_some_and(|open| Arc::ptr_eq(open, batch)) {
                state.open = None;
            }
        }

        let keys = batch.keys();
        log::debug!(
            "Loader '{}' dispatching batch of {} key(s)",
            self.name,
            keys.len()
        );
        let fetched = self.fetcher.fetch(&keys).await;

        let mut state = self.state();
        match fetched {
            Ok(values) => {
                if values.len() != keys.len() {
                    log::warn!(
                        "Loader '{}' fetched {} value(s) for {} key(s)",
                        self.name,
                        values.len(),
                        keys.len()
                    );
                }
                let mut values = values.into_iter();
                let mut resolved = HashMap::with_capacity(keys.len());
                for key in keys {
                    let value = values.next().flatten();
                    let owned = state
                        .pending
                        .get(&key)
                        .is_some_and(|waiting_on| Arc::ptr_eq(waiting_on, batch));
                    if owned {
                        state.pending.remove(&key);
                        if let Some(value) = &value {
                            state.cache.insert(key.clone(), value.clone());
                        }
                    }
                    if let Some(value) = value {
                        resolved.insert(key, value);
                    }
                }
                Ok(resolved)
            }
            Err(err) => {
                log::warn!(
                    "Loader '{}' batch of {} key(s) failed: {err}",
                    self.name,
                    keys.len()
                );
                state
                    .pending
                    .retain(|_, waiting_on| !Arc::ptr_eq(waiting_on, batch));
                Err(err.to_string())
            }
        }
    }
}

impl<K, V> fmt::Debug for BatchLoader<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("BatchLoader")
            .field("name", &self.name)
            .field("cached", &state.cache.len())
            .field("pending", &state.pending.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
