//! String hash functions for bucket selection
//!
//! A [`ChainedHashMap`](super::ChainedHashMap) reduces the digest of a key
//! modulo its bucket count, so any pure `&str -> u64` function can drive it.
//! Two simple functions are provided:
//!
//! - [`additive_hash`]: sum of the character code points. Anagrams collide.
//! - [`positional_hash`]: each code point weighted by its 1-based position.
//!
//! Anything implementing [`StringHasher`] may be supplied instead, including
//! plain closures and std [`BuildHasher`]s wrapped in [`BuildHasherFunction`].
//!
//! # Usage
//!
//! ```rust
//! use chaintable::hash_map::{additive_hash, positional_hash, StringHasher, HashFunctionKind};
//!
//! assert_eq!(additive_hash("ab"), additive_hash("ba"));
//! assert_ne!(positional_hash("ab"), positional_hash("ba"));
//! assert_eq!(HashFunctionKind::Positional.hash_str("ab"), positional_hash("ab"));
//! ```

use crate::error::ChainTableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

/// Sum of the Unicode scalar values of `key`
#[inline]
pub fn additive_hash(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |hash, c| hash.wrapping_add(u64::from(c)))
}

/// Sum of `(position + 1) * scalar` over the characters of `key`
#[inline]
pub fn positional_hash(key: &str) -> u64 {
    key.chars().enumerate().fold(0u64, |hash, (index, c)| {
        hash.wrapping_add((index as u64 + 1).wrapping_mul(u64::from(c)))
    })
}

/// A pure, deterministic mapping from string keys to digests
pub trait StringHasher {
    /// Digest of `key`; equal keys must produce equal digests
    fn hash_str(&self, key: &str) -> u64;
}

impl<F> StringHasher for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash_str(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Selects one of the built-in hash functions by name
///
/// This is what [`ChainedHashMapConfig`](crate::config::ChainedHashMapConfig)
/// stores, so it serializes as `"additive"` / `"positional"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunctionKind {
    /// [`additive_hash`]
    #[default]
    Additive,
    /// [`positional_hash`]
    Positional,
}

impl HashFunctionKind {
    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Positional => "positional",
        }
    }
}

impl StringHasher for HashFunctionKind {
    #[inline]
    fn hash_str(&self, key: &str) -> u64 {
        match self {
            Self::Additive => additive_hash(key),
            Self::Positional => positional_hash(key),
        }
    }
}

impl fmt::Display for HashFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFunctionKind {
    type Err = ChainTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(Self::Additive),
            "positional" => Ok(Self::Positional),
            other => Err(ChainTableError::configuration(format!(
                "unknown hash function '{}', expected 'additive' or 'positional'",
                other
            ))),
        }
    }
}

/// Adapts a std [`BuildHasher`] into a [`StringHasher`]
///
/// The builder must be deterministic for the lifetime of the map. Randomly
/// seeded builders are fine as long as the same instance is used throughout,
/// which the map guarantees by owning it.
///
/// ```rust
/// use chaintable::hash_map::{BuildHasherFunction, StringHasher};
///
/// let hasher = BuildHasherFunction::ahash_with_seeds(1, 2, 3, 4);
/// assert_eq!(hasher.hash_str("melon"), hasher.hash_str("melon"));
/// ```
#[derive(Debug, Clone)]
pub struct BuildHasherFunction<S> {
    builder: S,
}

impl<S: BuildHasher> BuildHasherFunction<S> {
    /// Wrap an existing builder
    pub fn new(builder: S) -> Self {
        Self { builder }
    }

    /// The wrapped builder
    pub fn builder(&self) -> &S {
        &self.builder
    }
}

impl BuildHasherFunction<ahash::RandomState> {
    /// AHash with fixed seeds, reproducible within a build
    pub fn ahash_with_seeds(k0: u64, k1: u64, k2: u64, k3: u64) -> Self {
        Self::new(ahash::RandomState::with_seeds(k0, k1, k2, k3))
    }
}

impl<S: BuildHasher> StringHasher for BuildHasherFunction<S> {
    #[inline]
    fn hash_str(&self, key: &str) -> u64 {
        self.builder.hash_one(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_hash() {
        assert_eq!(additive_hash(""), 0);
        assert_eq!(additive_hash("a"), 97);
        assert_eq!(additive_hash("ab"), 195);
        // Anagrams collide by construction
        assert_eq!(additive_hash("ab"), additive_hash("ba"));
    }

    #[test]
    fn test_positional_hash() {
        assert_eq!(positional_hash(""), 0);
        assert_eq!(positional_hash("a"), 97);
        assert_eq!(positional_hash("ab"), 97 + 2 * 98);
        assert_eq!(positional_hash("ba"), 98 + 2 * 97);
        assert_ne!(positional_hash("ab"), positional_hash("ba"));
    }

    #[test]
    fn test_non_ascii_keys() {
        assert_eq!(additive_hash("é"), 0xE9);
        assert_eq!(positional_hash("aé"), 97 + 2 * 0xE9);
    }

    #[test]
    fn test_closure_as_hasher() {
        let constant = |_: &str| 7u64;
        assert_eq!(constant.hash_str("anything"), 7);

        let pointer: fn(&str) -> u64 = additive_hash;
        assert_eq!(pointer.hash_str("ab"), 195);
    }

    #[test]
    fn test_kind_dispatch() {
        for key in ["", "key1", "str149", "Manjaro"] {
            assert_eq!(HashFunctionKind::Additive.hash_str(key), additive_hash(key));
            assert_eq!(HashFunctionKind::Positional.hash_str(key), positional_hash(key));
        }
        assert_eq!(HashFunctionKind::default(), HashFunctionKind::Additive);
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("additive".parse::<HashFunctionKind>().unwrap(), HashFunctionKind::Additive);
        assert_eq!(" Positional ".parse::<HashFunctionKind>().unwrap(), HashFunctionKind::Positional);

        let err = "fnv".parse::<HashFunctionKind>().unwrap_err();
        assert_eq!(err.category(), "config");

        for kind in [HashFunctionKind::Additive, HashFunctionKind::Positional] {
            assert_eq!(kind.to_string().parse::<HashFunctionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&HashFunctionKind::Positional).unwrap();
        assert_eq!(json, "\"positional\"");
        let kind: HashFunctionKind = serde_json::from_str("\"additive\"").unwrap();
        assert_eq!(kind, HashFunctionKind::Additive);
    }

    #[test]
    fn test_build_hasher_function_is_deterministic() {
        let hasher = BuildHasherFunction::ahash_with_seeds(11, 22, 33, 44);
        let same = BuildHasherFunction::ahash_with_seeds(11, 22, 33, 44);
        for key in ["apple", "grape", "melon", "peach"] {
            assert_eq!(hasher.hash_str(key), hasher.hash_str(key));
            assert_eq!(hasher.hash_str(key), same.hash_str(key));
        }
        assert_ne!(hasher.hash_str("apple"), hasher.hash_str("grape"));
    }
}
