/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Nodes of a graph with `n` nodes are exactly `0..n`; arbitrary vertex identifiers
are mapped onto this range by [`Labelling`](crate::utils::Labelling).
*/

use bitvec::vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes: bit `u` represents node `u`
pub type NodeBitSet = BitVec;

/// Creates an empty [`NodeBitSet`] with one entry per node of a graph with `n` nodes
pub fn node_bitset_unset(n: NumNodes) -> NodeBitSet {
    BitVec::repeat(false, n as usize)
}

/// Creates a [`NodeBitSet`] with one entry per node where exactly the bits in `nodes` are set.
/// ** Panics if any node is `>= n` **
pub fn node_bitset_with(n: NumNodes, nodes: impl IntoIterator<Item = Node>) -> NodeBitSet {
    let mut bits = node_bitset_unset(n);
    for u in nodes {
        bits.set(u as usize, true);
    }
    bits
}
