//! Algorithms built on top of the hash table
//!
//! - [`find_mode`]: most frequent strings of a sequence

pub mod mode;

pub use mode::find_mode;
