//! ChainedHashMap - string-keyed hash table with separate chaining
//!
//! Features:
//! - Prime bucket counts, coerced on construction and on every resize
//! - One [`LinkedList`] chain per bucket; colliding keys share a chain
//! - Growth to double the bucket count once the load factor reaches 1.0
//! - Full rehash on resize through the regular insertion path
//! - Pluggable string hash function via [`StringHasher`]
//!
//! # Examples
//!
//! ```rust
//! use chaintable::hash_map::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.put("a", 1);
//! map.put("b", 2);
//! map.put("a", 3);
//!
//! assert_eq!(map.size(), 2);
//! assert_eq!(map.capacity(), 11);
//! assert_eq!(map.get("a"), Some(&3));
//! assert!(!map.contains_key("c"));
//! ```

use crate::config::{ChainedHashMapConfig, Config};
use crate::containers::linked_list;
use crate::containers::{DynamicArray, LinkedList};
use crate::error::Result;
use crate::hash_map::hash_functions::{HashFunctionKind, StringHasher};
use crate::hash_map::primes::{is_prime, next_prime};
use std::fmt;
use std::slice;

/// Bucket count requested by [`ChainedHashMap::new`]
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor at which `put` grows the table before inserting
pub const RESIZE_LOAD_FACTOR: f64 = 1.0;

/// Bucket count multiplier applied when growing
pub const GROWTH_FACTOR: usize = 2;

/// Snapshot of bucket occupancy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of stored entries
    pub size: usize,
    /// Buckets whose chain is empty
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `size / capacity`
    pub load_factor: f64,
}

/// Hash table with separate chaining and string keys
///
/// `H` is the hash function; it is fixed at construction and kept across
/// resizes. The bucket of a key is `hasher.hash_str(key) % capacity`.
pub struct ChainedHashMap<V, H = HashFunctionKind> {
    /// Exactly `capacity` chains
    buckets: DynamicArray<LinkedList<V>>,
    /// Current bucket count, always prime
    capacity: usize,
    /// Number of distinct keys stored
    size: usize,
    hasher: H,
}

impl<V> ChainedHashMap<V, HashFunctionKind> {
    /// Create a map with 11 buckets and the additive hash function
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a map with at least `capacity` buckets and the additive hash function
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, HashFunctionKind::Additive)
    }

    /// Create a map from a validated configuration
    pub fn with_config(config: &ChainedHashMapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity_and_hasher(
            config.initial_capacity,
            config.hash_function,
        ))
    }
}

impl<V, H> ChainedHashMap<V, H>
where
    H: StringHasher,
{
    /// Create a map with a custom hash function
    ///
    /// The requested bucket count is rounded up to a prime; even requests are
    /// bumped to odd first, so a request of 2 yields 3 buckets.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        let capacity = next_prime(capacity);
        log::debug!("Creating chained hash map with {} buckets", capacity);

        Self {
            buckets: Self::allocate_buckets(capacity),
            capacity,
            size: 0,
            hasher,
        }
    }

    fn allocate_buckets(capacity: usize) -> DynamicArray<LinkedList<V>> {
        DynamicArray::from_fn(capacity, LinkedList::new)
    }

    #[inline]
    fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_str(key) % self.capacity as u64) as usize
    }

    /// Number of distinct keys stored
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the map holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets (always prime)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The hash function in use
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Insert or update the value for `key`
    ///
    /// When the load factor has reached 1.0 the table is first resized to
    /// double its bucket count. An existing key keeps its node and only the
    /// value is replaced, so the size does not change.
    pub fn put<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str> + Into<String>,
    {
        if self.table_load() >= RESIZE_LOAD_FACTOR {
            self.resize_table(self.capacity * GROWTH_FACTOR);
        }

        let index = self.bucket_index(key.as_ref());
        let bucket = &mut self.buckets[index];

        if let Some(node) = bucket.contains_mut(key.as_ref()) {
            node.value = value;
            return;
        }

        bucket.insert(key, value);
        self.size += 1;
    }

    /// Rebuild the table with `new_capacity` buckets
    ///
    /// A request of 0 is ignored. A non-prime request is rounded up to the
    /// next prime; a prime request is used as is. Every entry is re-inserted
    /// through [`put`](Self::put), so a request far below the current size
    /// grows again while the rehash is still running.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }

        let new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };

        log::debug!(
            "Resizing chained hash map from {} to {} buckets ({} entries)",
            self.capacity,
            new_capacity,
            self.size
        );

        let old_buckets =
            std::mem::replace(&mut self.buckets, Self::allocate_buckets(new_capacity));
        self.capacity = new_capacity;
        self.size = 0;

        for bucket in old_buckets {
            for (key, value) in bucket {
                self.put(key, value);
            }
        }
    }

    /// Current load factor, `size / capacity`
    #[inline]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Number of buckets with an empty chain
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Value stored for `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index].contains(key).map(|node| node.value())
    }

    /// Mutable value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .contains_mut(key)
            .map(|node| node.value_mut())
    }

    /// Check if `key` is stored, whatever its value
    pub fn contains_key(&self, key: &str) -> bool {
        let index = self.bucket_index(key);
        self.buckets[index].contains(key).is_some()
    }

    /// Remove `key`, returning its value if it was present
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let removed = self.buckets[index].remove(key);
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// All entries as owned pairs, in bucket order then chain order
    pub fn get_keys_and_values(&self) -> DynamicArray<(String, V)>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Drop every entry, keeping the bucket count
    pub fn clear(&mut self) {
        log::trace!("Clearing chained hash map with {} entries", self.size);
        self.buckets = Self::allocate_buckets(self.capacity);
        self.size = 0;
    }

    /// Iterate over entries in bucket order then chain order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.size,
        }
    }

    /// Occupancy statistics over all buckets
    pub fn bucket_stats(&self) -> BucketStats {
        let mut empty_buckets = 0;
        let mut longest_chain = 0;
        for bucket in self.buckets.iter() {
            if bucket.is_empty() {
                empty_buckets += 1;
            }
            longest_chain = longest_chain.max(bucket.len());
        }

        BucketStats {
            capacity: self.capacity,
            size: self.size,
            empty_buckets,
            longest_chain,
            load_factor: self.table_load(),
        }
    }
}

impl<V> Default for ChainedHashMap<V, HashFunctionKind> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H, K> Extend<(K, V)> for ChainedHashMap<V, H>
where
    H: StringHasher,
    K: AsRef<str> + Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Iterator over the entries of a [`ChainedHashMap`]
pub struct Iter<'a, V> {
    buckets: slice::Iter<'a, LinkedList<V>>,
    chain: Option<linked_list::Iter<'a, V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.chain.as_mut() {
                if let Some(node) = chain.next() {
                    self.remaining -= 1;
                    return Some((node.key(), node.value()));
                }
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V, H> IntoIterator for &'a ChainedHashMap<V, H>
where
    H: StringHasher,
{
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per bucket: `index: chain`
impl<V, H> fmt::Display for ChainedHashMap<V, H>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{}: {}", index, bucket)?;
        }
        Ok(())
    }
}

impl<V, H> fmt::Debug for ChainedHashMap<V, H>
where
    V: fmt::Debug,
    H: StringHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
