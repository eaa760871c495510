use std::ops::Range;

use itertools::Itertools;

use crate::{error::GraphError, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all nodes.
    /// In contrast to self.vertices(), the range returned does not borrow self
    /// and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// The order is the order of the underlying adjacency listing.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the neighbor of `u` listed last in its adjacency listing
    /// ** Panics if `u >= n` **
    fn last_neighbor_of(&self, u: Node) -> Option<Node> {
        self.neighbors_of(u).last()
    }

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree in increasing order
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the number of nodes with non-zero degree
    fn number_of_nodes_with_neighbors(&self) -> NumNodes {
        self.vertices_with_neighbors().count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a NodeBitSet with bit `v` set exactly if `v` is a neighbor of `u`
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        node_bitset_with(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over edges incident to a given vertex in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        self.edges_of(u, only_normalized).sorted()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, every undirected edge is returned exactly once as `(u, v)` with `u <= v`.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, every undirected edge is returned exactly once as `(u, v)` with `u <= v`.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Checks whether the edge `(u, v)` could be inserted while keeping the graph simple.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `u >= n` or `v >= n`,
    /// - [`GraphError::SelfLoop`] if `u == v`,
    /// - [`GraphError::ParallelEdge`] if the edge is already present.
    fn check_new_edge(&self, u: Node, v: Node) -> Result<(), GraphError> {
        let n = self.number_of_nodes();
        if let Some(node) = [u, v].into_iter().find(|&x| x >= n) {
            return Err(GraphError::NodeOutOfRange { node, n });
        }

        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        if self.has_edge(u, v) {
            return Err(GraphError::ParallelEdge(Edge(u, v).normalized()));
        }

        Ok(())
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    /// ** Panics if `n == 0` **
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew + AdjacencyTest {
    /// Adds the edge `{u, v}` to the graph.
    ///
    /// # Errors
    /// Fails without modifying the graph if the edge would break simplicity,
    /// see [`AdjacencyTest::check_new_edge`].
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError>;

    /// Adds all edges in the collection and stops at the first invalid one.
    /// Edges inserted before the failing one remain in the graph.
    fn try_add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<(), GraphError> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `{u, v}` from the graph.
    /// Returns *true* if the edge was present; removing an absent edge
    /// (including edges with endpoints `>= n`) is a no-op returning *false*.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised by an invalid edge.
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, GraphError>;

    /// Create a graph from an iterator over Edges where the number of nodes is
    /// one more than the largest endpoint.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if there are no edges and otherwise the first
    /// [`GraphError`] raised by an invalid edge.
    fn try_from_edge_list(
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, GraphError> {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        let n = edges
            .iter()
            .map(Edge::max_node)
            .max()
            .ok_or(GraphError::EmptyGraph)?;
        Self::try_from_edges(n + 1, edges)
    }

    /// Like [`GraphFromScratch::try_from_edges`] but for edges known to be valid.
    /// ** Panics if any edge is a self-loop, a parallel edge or out of range **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        match Self::try_from_edges(n, edges) {
            Ok(graph) => graph,
            Err(err) => panic!("invalid edge list: {err}"),
        }
    }
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n);
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}
