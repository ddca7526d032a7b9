//! Container types backing the hash table
//!
//! - **`DynamicArray<T>`** - growable indexable array, used as the bucket array
//! - **`LinkedList<V>`** - singly linked chain of string-keyed nodes, one per bucket

mod dynamic_array;
pub mod linked_list;

pub use dynamic_array::DynamicArray;
pub use linked_list::{LinkedList, Node};
