//! Memoization of sort results.
//!
//! A cache is an optional dependency of [`PropertySorter`](crate::PropertySorter),
//! injected through the [`ResultCache`] trait. [`LruCache`] is the bundled
//! bounded implementation.
//!
//! Caches are shared between threads, so every method takes `&self` and
//! implementations serialize writers internally. Losing a racing insert only
//! costs a recompute.

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::options::SortingOptions;

/// Canonical identity of a sort call.
///
/// Blank tokens are removed from the properties and option fields that
/// cannot affect the result are cleared, so equivalent calls share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    properties: Vec<String>,
    options: SortingOptions,
}

impl CacheKey {
    /// Builds a key from already blank-stripped properties.
    pub fn new(properties: Vec<String>, options: &SortingOptions) -> Self {
        Self {
            properties,
            options: options.normalized(),
        }
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    pub fn options(&self) -> &SortingOptions {
        &self.options
    }
}

/// Storage for successful sort results.
pub trait ResultCache: Send + Sync {
    /// Returns the cached ordering for `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<Vec<String>>;

    /// Stores an ordering. Implementations may evict other entries.
    fn insert(&self, key: CacheKey, sorted: Vec<String>);

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    fn clear(&self);
}

/// Bounded least-recently-used cache.
///
/// Entries are kept in recency order; a hit moves its entry to the back and
/// an insert past capacity evicts from the front. A capacity of zero stores
/// nothing.
///
/// # Example
///
/// ```rust
/// use propsort::{LruCache, PropertySorter, ResultCache, SortingOptions};
///
/// let sorter = PropertySorter::with_cache(LruCache::new(128));
/// let options = SortingOptions::default();
///
/// sorter.sort(&["width", "color"], &options).unwrap();
/// sorter.sort(&["width", "color"], &options).unwrap();
/// assert_eq!(sorter.cache().map(|cache| cache.len()), Some(1));
/// ```
#[derive(Debug)]
pub struct LruCache {
    capacity: usize,
    entries: Mutex<IndexMap<CacheKey, Vec<String>>>,
}

impl LruCache {
    /// Default number of entries kept by [`LruCache::default`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(IndexMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LruCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ResultCache for LruCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<String>> {
        let mut entries = self.entries.lock();
        let sorted = entries.shift_remove(key)?;
        entries.insert(key.clone(), sorted.clone());
        Some(sorted)
    }

    fn insert(&self, key: CacheKey, sorted: Vec<String>) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.lock();
        entries.shift_remove(&key);
        entries.insert(key, sorted);

        while entries.len() > self.capacity {
            if entries.shift_remove_index(0).is_some() {
                tracing::trace!(capacity = self.capacity, "evicted least recently used entry");
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }
}
