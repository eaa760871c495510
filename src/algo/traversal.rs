/*!
Graph traversal algorithms.

This module provides:
- Generic traversal iterators (BFS, DFS) parameterized by the frontier
  ([`NodeSequencer`]) and the visited-set ([`Set<Node>`]).
- A high-level [`Traversal`] trait that exposes traversals directly as
  methods on graph data structures.

The same [`NodeSequencer`] abstraction is used as the stack of pending nodes
when building Eulerian circuits (see [`Hierholzer`](super::Hierholzer)).
*/

use super::*;
use std::collections::VecDeque;

/// Common interface for maintaining and querying visited-states
/// during a traversal.
///
/// Implementations wrap a [`Set<Node>`] that tracks which nodes
/// have already been discovered.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS** and Hierholzer's algorithm
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns a clone of the next node without removing it.
    fn peek(&self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<T> {
        self.front().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<T> {
        self.last().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a set of
/// visited nodes. A node is marked as visited as soon as it enters the frontier,
/// so every node is yielded at most once.
pub struct TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
}

/// Type alias for a **breadth-first search** iterator using a queue (`VecDeque`).
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, V>;

/// Type alias for a **depth-first search** iterator using a stack (`Vec`).
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, V>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = BFSWithSet<'a, G, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = DFSWithSet<'a, G, NodeBitSet>;

impl<G, S, V> TraversalState<V> for TraversalSearch<'_, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, S, V> Iterator for TraversalSearch<'_, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if self.visited.insert(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph
                    .len()
                    .saturating_sub(self.visited.len())
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

impl<'a, G, S, V> TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` for bitset-backed visited-sets **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }
}

impl<G, S, V> TraversalSearch<'_, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node>,
{
    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let node = self.graph.vertices().find(|u| !self.visited.contains(u));
        match node {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(x);
                true
            }
        }
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken. If the node was already visited,
    /// this is a non-op.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_node`].
    ///
    /// # Warning
    /// Calling this method has no effect for nodes that are already on the stack. It is
    /// therefore highly recommended to call this method directly after the constructor.
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder-variant of [`TraversalSearch::exclude_nodes`].
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }
}

/// Exposes traversals directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use ucircuits::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use ucircuits::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(2).collect();
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
