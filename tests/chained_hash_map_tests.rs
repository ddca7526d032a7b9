//! Scenario tests for ChainedHashMap and find_mode
//!
//! Expected layouts (empty bucket counts, capacities) follow from the two
//! built-in hash functions and the doubling policy.

use chaintable::hash_map::{additive_hash, is_prime, positional_hash};
use chaintable::{find_mode, ChainedHashMap, ChainedHashMapConfig, Config, HashFunctionKind};
use std::collections::BTreeSet;

// =============================================================================
// PUT / GROWTH
// =============================================================================

#[test]
fn test_sequential_keys_grow_past_double_capacity() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(53, additive_hash);
    for i in 0..150 {
        map.put(format!("str{}", i), i * 100);
        assert!(is_prime(map.capacity()));
        assert_eq!(map.table_load(), map.size() as f64 / map.capacity() as f64);
    }

    assert!(map.capacity() >= 2 * 53);
    assert_eq!(map.capacity(), 223);
    assert_eq!(map.size(), 150);
    for i in 0..150 {
        assert_eq!(map.get(&format!("str{}", i)), Some(&(i * 100)));
    }
}

#[test]
fn test_empty_bucket_progression() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(53, additive_hash);
    let mut observed = Vec::new();
    for i in 0..150 {
        map.put(format!("key{}", i), i * 100);
        if i % 30 == 0 {
            observed.push((map.empty_buckets(), map.size(), map.capacity()));
        }
    }
    assert_eq!(
        observed,
        vec![
            (52, 1, 53),
            (39, 31, 53),
            (83, 61, 107),
            (80, 91, 107),
            (184, 121, 223),
        ]
    );
}

#[test]
fn test_table_load_progression() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(53, additive_hash);
    let mut observed = Vec::new();
    for i in 0..50 {
        map.put(format!("key{}", i), i * 100);
        if i % 10 == 0 {
            observed.push(((map.table_load() * 100.0).round() as u32, map.size(), map.capacity()));
        }
    }
    assert_eq!(
        observed,
        vec![(2, 1, 53), (21, 11, 53), (40, 21, 53), (58, 31, 53), (77, 41, 53)]
    );
}

// =============================================================================
// RESIZE
// =============================================================================

#[test]
fn test_resize_across_many_capacities() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(75, positional_hash);
    let keys: Vec<u32> = (1..1000).step_by(13).collect();
    for &key in &keys {
        map.put(key.to_string(), key * 42);
    }
    assert_eq!((map.size(), map.capacity()), (77, 79));

    let mut capacities = Vec::new();
    for capacity in (111..1000).step_by(117) {
        map.resize_table(capacity);

        map.put("some key", 0);
        assert!(map.contains_key("some key"));
        map.remove("some key");

        for &key in &keys {
            assert!(map.contains_key(&key.to_string()), "missing {}", key);
            assert!(!map.contains_key(&(key + 1).to_string()));
            assert_eq!(map.get(&key.to_string()), Some(&(key * 42)));
        }
        assert_eq!(map.size(), 77);
        capacities.push(map.capacity());
    }

    assert_eq!(capacities, vec![113, 229, 347, 463, 587, 701, 821, 937]);
}

#[test]
fn test_resize_preserves_associations() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(11, positional_hash);
    for i in 0..60 {
        map.put(format!("entry-{}", i), i);
    }

    for requested in [1, 2, 7, 64, 500] {
        map.resize_table(requested);
        assert!(is_prime(map.capacity()));
        assert_eq!(map.size(), 60);
        for i in 0..60 {
            assert_eq!(map.get(&format!("entry-{}", i)), Some(&i));
        }
    }
}

// =============================================================================
// LOOKUP / REMOVAL
// =============================================================================

#[test]
fn test_get_with_positional_hash() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(151, positional_hash);
    for i in (200..300).step_by(7) {
        map.put(i.to_string(), i * 10);
    }
    assert_eq!((map.size(), map.capacity()), (15, 151));

    for i in (200..300).step_by(21) {
        assert_eq!(map.get(&i.to_string()), Some(&(i * 10)));
        assert_eq!(map.get(&(i + 1).to_string()), None);
    }
}

#[test]
fn test_contains_key_with_positional_hash() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(79, positional_hash);
    let keys: Vec<u32> = (1..1000).step_by(20).collect();
    for &key in &keys {
        map.put(key.to_string(), key * 42);
    }
    assert_eq!((map.size(), map.capacity()), (50, 79));

    for &key in &keys {
        assert!(map.contains_key(&key.to_string()));
        assert!(!map.contains_key(&(key + 1).to_string()));
    }
}

#[test]
fn test_remove_absent_key_is_noop() {
    let mut map = ChainedHashMap::new();
    map.put("present", 1);
    for _ in 0..3 {
        assert_eq!(map.remove("absent"), None);
        assert_eq!(map.size(), 1);
    }
    assert_eq!(map.remove("present"), Some(1));
    assert_eq!(map.remove("present"), None);
    assert!(map.is_empty());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(101, additive_hash);
    map.put("key1", 10);
    map.put("key2", 20);
    map.put("key1", 30);
    assert_eq!((map.size(), map.capacity()), (2, 101));

    map.clear();
    assert_eq!((map.size(), map.capacity()), (0, 101));
    assert_eq!(map.get("key1"), None);
    assert_eq!(map.iter().count(), 0);

    // Still usable after clearing
    map.put("key3", 3);
    assert_eq!(map.get("key3"), Some(&3));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_constructed_map_matches_manual() {
    let config = ChainedHashMapConfig {
        initial_capacity: 41,
        hash_function: HashFunctionKind::Positional,
    };
    assert!(config.validate().is_ok());

    let mut configured = ChainedHashMap::with_config(&config).unwrap();
    let mut manual = ChainedHashMap::with_capacity_and_hasher(41, positional_hash);
    for i in 0..50 {
        configured.put(format!("str{}", i / 3), i);
        manual.put(format!("str{}", i / 3), i);
    }

    assert_eq!(configured.empty_buckets(), manual.empty_buckets());
    let configured_pairs: Vec<(String, i32)> = configured.get_keys_and_values().into();
    let manual_pairs: Vec<(String, i32)> = manual.get_keys_and_values().into();
    assert_eq!(configured_pairs, manual_pairs);
}

// =============================================================================
// MODE FINDER
// =============================================================================

#[test]
fn test_find_mode_cases() {
    let (modes, frequency) = find_mode(["apple", "apple", "grape", "melon", "peach"]);
    assert_eq!(modes.as_slice(), &["apple".to_string()]);
    assert_eq!(frequency, 2);

    let (modes, frequency) = find_mode([
        "2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2",
    ]);
    let set: BTreeSet<&str> = modes.iter().map(String::as_str).collect();
    assert_eq!(set, BTreeSet::from(["2", "3", "4"]));
    assert_eq!(frequency, 3);

    let (modes, frequency) = find_mode(["one", "two", "three", "four", "five"]);
    assert_eq!(modes.len(), 5);
    assert_eq!(frequency, 1);
}
