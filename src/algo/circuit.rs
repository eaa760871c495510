use std::fmt;

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// An Eulerian circuit: a closed walk `(v0, ..., vk)` with `v0 == vk` that traverses
/// every edge of the graph it was computed on exactly once.
///
/// Circuits are produced by [`Hierholzer`] and are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Circuit {
    nodes: Vec<Node>,
}

impl Circuit {
    pub(crate) fn new(nodes: Vec<Node>) -> Self {
        debug_assert!(nodes.len() >= 2);
        Self { nodes }
    }

    /// Returns the nodes of the closed walk; the first and last node coincide
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes in the walk, i.e. one more than the number of edges
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges traversed
    pub fn number_of_edges(&self) -> NumEdges {
        (self.nodes.len() - 1) as NumEdges
    }

    /// Returns the node at which the walk starts (and ends)
    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    /// Returns the traversed edges in order of traversal
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().tuple_windows().map(|(&u, &v)| Edge(u, v))
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Checks whether the given nodes form an Eulerian circuit of `graph`.
    ///
    /// # Errors
    /// Returns the first violation found, see [`CircuitError`].
    pub fn verify_nodes_for<G>(nodes: &[Node], graph: &G) -> Result<(), CircuitError>
    where
        G: AdjacencyTest + GraphEdgeOrder,
    {
        let (&first, &last) = nodes.first().zip(nodes.last()).ok_or(CircuitError::Empty)?;
        if first != last {
            return Err(CircuitError::NotClosed { first, last });
        }

        let mut seen = FxHashSet::default();
        for (&u, &v) in nodes.iter().tuple_windows() {
            let edge = Edge(u, v).normalized();
            if !graph.contains_node(u) || !graph.contains_node(v) || !graph.has_edge(u, v) {
                return Err(CircuitError::MissingEdge(edge));
            }
            if !seen.insert(edge) {
                return Err(CircuitError::RepeatedEdge(edge));
            }
        }

        let expected = graph.number_of_edges() as usize;
        if seen.len() != expected {
            return Err(CircuitError::EdgeCountMismatch {
                expected,
                found: seen.len(),
            });
        }

        Ok(())
    }

    /// Checks whether this circuit is an Eulerian circuit of `graph`.
    /// Destructive strategies leave the graph empty, so verify against a copy taken beforehand.
    pub fn verify_for<G>(&self, graph: &G) -> Result<(), CircuitError>
    where
        G: AdjacencyTest + GraphEdgeOrder,
    {
        Self::verify_nodes_for(&self.nodes, graph)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.nodes.iter().join(", "))
    }
}

impl From<Circuit> for Vec<Node> {
    fn from(circuit: Circuit) -> Self {
        circuit.into_nodes()
    }
}
