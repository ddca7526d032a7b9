//! Mode finding over a sequence of strings
//!
//! Frequencies are counted in a [`ChainedHashMap`], then the most frequent
//! keys are collected in the map's traversal order (bucket, then chain). That
//! order depends on the hash layout, not on the order of the input.

use crate::containers::DynamicArray;
use crate::hash_map::ChainedHashMap;

/// Most frequent strings of `items` and their shared frequency
///
/// Every string tied for the highest count is returned. An empty input
/// yields no modes and a frequency of 0.
///
/// # Examples
///
/// ```rust
/// use chaintable::find_mode;
///
/// let (modes, frequency) = find_mode(["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(modes.as_slice(), &["apple".to_string()]);
/// assert_eq!(frequency, 2);
/// ```
pub fn find_mode<I, S>(items: I) -> (DynamicArray<String>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: ChainedHashMap<usize> = ChainedHashMap::new();

    for item in items {
        let key = item.as_ref();
        match counts.get(key) {
            Some(&count) => counts.put(key, count + 1),
            None => counts.put(key, 1),
        }
    }

    let pairs = counts.get_keys_and_values();
    let max_frequency = pairs.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let modes = pairs
        .into_iter()
        .filter(|(_, count)| *count == max_frequency)
        .map(|(key, _)| key)
        .collect();

    (modes, max_frequency)
}
