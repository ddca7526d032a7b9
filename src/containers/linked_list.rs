//! LinkedList: singly linked chain of string-keyed nodes
//!
//! Each bucket of [`ChainedHashMap`](crate::hash_map::ChainedHashMap) is one
//! of these chains. Lookups and removals walk the chain from the head, so
//! their cost is linear in the chain length.

use std::fmt;

/// Key/value node owned by a [`LinkedList`]
pub struct Node<V> {
    key: String,
    /// Stored value, updated in place on repeat insertion
    pub value: V,
    next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    /// Key of this node
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shared reference to the value
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable reference to the value
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

/// Singly linked list of key/value nodes
///
/// Keys are not deduplicated here; the owning hash map checks
/// [`contains`](Self::contains) before calling [`insert`](Self::insert).
///
/// # Examples
///
/// ```rust
/// use chaintable::LinkedList;
///
/// let mut chain = LinkedList::new();
/// chain.insert("a", 1);
/// chain.insert("b", 2);
/// assert_eq!(chain.contains("b").map(|n| n.value), Some(2));
/// assert_eq!(chain.remove("a"), Some(1));
/// assert_eq!(chain.len(), 1);
/// ```
pub struct LinkedList<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> LinkedList<V> {
    /// Create an empty chain
    #[inline]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes in the chain
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append a new node at the tail
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node {
            key: key.into(),
            value,
            next: None,
        }));
        self.len += 1;
    }

    /// Find the node holding `key`
    pub fn contains(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|node| node.key == key)
    }

    /// Find the node holding `key` for in-place update
    pub fn contains_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(node);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Unlink the node holding `key`, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let removed = cursor.take()?;
        let Node { value, next, .. } = *removed;
        *cursor = next;
        self.len -= 1;
        Some(value)
    }

    /// Detach the head node, returning its key and value
    pub fn pop_front(&mut self) -> Option<(String, V)> {
        self.head.take().map(|node| {
            let Node { key, value, next } = *node;
            self.head = next;
            self.len -= 1;
            (key, value)
        })
    }

    /// Iterate over nodes from head to tail
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LinkedList<V> {
    fn drop(&mut self) {
        // Unlink iteratively so a long chain does not recurse once per node
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Borrowing iterator over the nodes of a [`LinkedList`]
pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}

impl<'a, V> IntoIterator for &'a LinkedList<V> {
    type Item = &'a Node<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator yielding `(key, value)` pairs head to tail
pub struct IntoIter<V> {
    list: LinkedList<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<V> IntoIterator for LinkedList<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<V: fmt::Display> fmt::Display for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLL [")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({}: {})", node.key, node.value)?;
        }
        write!(f, "]")
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
