//! # chaintable: String-Keyed Hash Table with Separate Chaining
//!
//! This crate provides a hash table for string keys that resolves collisions
//! by chaining, keeps a prime number of buckets, and grows by full rehash.
//!
//! ## Key Features
//!
//! - **Separate Chaining**: each bucket holds a singly linked chain of entries
//! - **Prime Bucket Counts**: requested capacities are rounded up to a prime
//! - **Automatic Growth**: the bucket count doubles once the load factor reaches 1.0
//! - **Pluggable Hashing**: built-in additive/positional hashes, closures, or any `BuildHasher`
//! - **Mode Finding**: frequency counting on top of the table
//! - **Configuration**: validated presets, environment variables and JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use chaintable::{find_mode, ChainedHashMap};
//!
//! let mut map = ChainedHashMap::new();
//! map.put("key1", 10);
//! map.put("key2", 20);
//! map.put("key1", 30);
//! assert_eq!(map.size(), 2);
//! assert_eq!(map.get("key1"), Some(&30));
//!
//! map.remove("key2");
//! assert!(!map.contains_key("key2"));
//!
//! let (modes, frequency) = find_mode(["apple", "apple", "grape"]);
//! assert_eq!(modes[0], "apple");
//! assert_eq!(frequency, 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;
pub mod hash_map;

// Re-export core types
pub use algorithms::find_mode;
pub use config::{ChainedHashMapConfig, Config};
pub use containers::{DynamicArray, LinkedList};
pub use error::{ChainTableError, Result};
pub use hash_map::{
    additive_hash, positional_hash, BucketStats, BuildHasherFunction, ChainedHashMap,
    HashFunctionKind, StringHasher,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing chaintable v{}", VERSION);
}
