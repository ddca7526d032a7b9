//! Separate-chaining hash map and its hashing helpers
//!
//! - `ChainedHashMap`: string-keyed table with prime bucket counts and full rehash on growth
//! - `hash_functions`: the built-in string hash functions and the `StringHasher` seam
//! - `primes`: primality test and next-prime search used for bucket counts

mod chained_hash_map;
mod hash_functions;
mod primes;

pub use chained_hash_map::{
    BucketStats, ChainedHashMap, Iter, DEFAULT_CAPACITY, GROWTH_FACTOR, RESIZE_LOAD_FACTOR,
};
pub use hash_functions::{
    additive_hash, positional_hash, BuildHasherFunction, HashFunctionKind, StringHasher,
};
pub use primes::{is_prime, next_prime};
