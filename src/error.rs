/*!
# Errors

Every fallible operation of this crate returns one of the following error types:
- [`GraphError`]: invalid graph construction (self-loops, parallel edges, nodes out of range)
  or a graph without any edge where at least one is required,
- [`EulerianError`]: the reason why no Eulerian circuit could be built,
- [`CircuitError`]: the reason why a sequence of nodes is not an Eulerian circuit of a graph.
*/

use thiserror::Error;

use crate::{edge::*, node::*};

/// Errors raised while building or querying a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Simple graphs do not allow an edge from a node to itself.
    #[error("self-loop at node {0} is not allowed in a simple graph")]
    SelfLoop(Node),
    /// Simple graphs do not allow an edge to be inserted twice.
    #[error("edge {0} is already present in the graph")]
    ParallelEdge(Edge),
    /// The node is not part of the graph.
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },
    /// The graph has no node with positive degree.
    #[error("graph has no edges")]
    EmptyGraph,
}

/// Reasons why a graph has no Eulerian circuit (or why it could not be computed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EulerianError {
    /// The graph has no edges.
    #[error("graph has no edges")]
    EmptyGraph,
    /// Some node has odd degree (the node with smallest index is reported).
    #[error("node {node} has odd degree {degree}")]
    OddDegree { node: Node, degree: NumNodes },
    /// The nodes with positive degree span more than one connected component.
    #[error("nodes with positive degree form {components} connected components")]
    Disconnected { components: usize },
    /// The requested start node is out of range or isolated.
    #[error("node {0} cannot start an Eulerian circuit")]
    InvalidStartNode(Node),
    /// The edge-removal strategy was requested on a shared reference.
    #[error("the edge-removal strategy needs exclusive access to the graph")]
    RequiresExclusiveAccess,
    /// Any other graph error encountered while checking the graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(GraphError),
}

impl From<GraphError> for EulerianError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::EmptyGraph => EulerianError::EmptyGraph,
            other => EulerianError::InvalidGraph(other),
        }
    }
}

/// Reasons why a sequence of nodes is not an Eulerian circuit of a given graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CircuitError {
    /// The sequence contains no node.
    #[error("circuit is empty")]
    Empty,
    /// The walk does not end where it started.
    #[error("circuit starts at {first} but ends at {last}")]
    NotClosed { first: Node, last: Node },
    /// The walk uses a pair of nodes that is not an edge of the graph.
    #[error("edge {0} is not part of the graph")]
    MissingEdge(Edge),
    /// The walk traverses an edge more than once.
    #[error("edge {0} is traversed more than once")]
    RepeatedEdge(Edge),
    /// The walk does not traverse every edge of the graph.
    #[error("circuit traverses {found} edges but the graph has {expected}")]
    EdgeCountMismatch { expected: usize, found: usize },
}

/// Returned when parsing an unknown [`CircuitStrategy`](crate::algo::CircuitStrategy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown circuit strategy: {0}")]
pub struct UnknownStrategy(pub String);
