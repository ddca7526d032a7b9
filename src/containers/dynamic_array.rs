//! DynamicArray: growable, indexable sequence used as the bucket array
//!
//! Checked access (`get`, `get_mut`, `set`) reports out-of-range indices as
//! [`ChainTableError::OutOfBounds`]. The `Index`/`IndexMut` impls panic on a
//! bad index and are meant for callers that already hold a valid index, such
//! as a bucket index reduced modulo the array length.

use crate::error::{check_bounds, ChainTableError, Result};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

/// Growable array with bounds-checked accessors
///
/// # Examples
///
/// ```rust
/// use chaintable::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push("apple");
/// array.push("grape");
/// assert_eq!(array.len(), 2);
/// assert_eq!(array[1], "grape");
/// assert!(array.get(2).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// Create a new empty DynamicArray
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a DynamicArray with room for `cap` elements
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: Vec::with_capacity(cap),
        }
    }

    /// Build an array of `len` elements, each produced by `f`
    pub fn from_fn<F>(len: usize, mut f: F) -> Self
    where
        F: FnMut() -> T,
    {
        let mut array = Self::with_capacity(len);
        for _ in 0..len {
            array.push(f());
        }
        array
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the allocated capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append an element at the end
    #[inline]
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Remove and return the last element
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Bounds-checked shared access
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.data.len())?;
        Ok(&self.data[index])
    }

    /// Bounds-checked mutable access
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| ChainTableError::out_of_bounds(index, size))
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the array as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over shared references
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over mutable references
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.data
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
