/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to choose the most efficient implementation based on context.

Examples:
- Sparse sets, e.g. sets of edges -> `HashSet` / `FxHashSet`
- Dense sets of nodes -> [`NodeBitSet`]
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::node::*;

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries and bulk insertion.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was not present before.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// ** Panics if a node exceeds the length of the bitset **
impl Set<Node> for NodeBitSet {
    fn insert(&mut self, value: Node) -> bool {
        !self.replace(value as usize, true)
    }

    fn remove(&mut self, value: &Node) -> bool {
        self.replace(*value as usize, false)
    }

    fn contains(&self, value: &Node) -> bool {
        self[*value as usize]
    }

    fn clear(&mut self) {
        self.fill(false);
    }

    fn len(&self) -> usize {
        self.count_ones()
    }
}
