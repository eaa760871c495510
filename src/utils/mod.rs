/*!
# Utilities

Provides a few utility traits/structs such as
- abstractions over [`Set`] so that algorithms can choose their bookkeeping,
- [`Labelling`] for mapping arbitrary vertex labels onto the nodes `0..n`.
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::node::*;

pub mod labels;
pub mod set;

pub use labels::Labelling;
pub use set::Set;

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// Note that this should mainly be used in conjunction with [`Set`] datastructures.
pub trait FromCapacity: Sized {
    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both arguments.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using a bitset as a Set requires intializing to the maximum element
        node_bitset_unset(total as NumNodes)
    }
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `HashSet<T>` as a Set only requires intializing to the number of elements
        Self::with_capacity_and_hasher(used, S::default())
    }
}
