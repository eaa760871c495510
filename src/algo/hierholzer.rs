/*!
# Eulerian Circuits

Hierholzer's algorithm with three interchangeable ways of bookkeeping which edges were
already traversed. All of them share the same driver: a stack of pending nodes whose top
is extended along an unconsumed edge if one exists and otherwise popped and appended to
the circuit.

| Strategy                              | Bookkeeping                             | Graph afterwards |
|---------------------------------------|-----------------------------------------|------------------|
| [`CircuitStrategy::EdgeRemoval`]      | edges are removed from the graph itself | no edges         |
| [`CircuitStrategy::AdjacencyMatrix`]  | private copy as `n x n` bit matrix      | unchanged        |
| [`CircuitStrategy::SeenEdges`]        | private set of traversed edges          | unchanged        |

The strategies may produce different circuits, but each one is deterministic.
*/
use std::{fmt, str::FromStr};

use fxhash::FxHashSet;
use log::{debug, trace};

use super::*;

/// Selects how [`Hierholzer`] keeps track of traversed edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CircuitStrategy {
    /// Removes every traversed edge from the graph; always continues along the neighbor listed last
    EdgeRemoval,
    /// Works on a bit matrix copy of the graph; always continues along the smallest neighbor
    AdjacencyMatrix,
    /// Records traversed edges in a set; always continues along the first untraversed neighbor
    #[default]
    SeenEdges,
}

impl CircuitStrategy {
    pub const ALL: [CircuitStrategy; 3] = [
        CircuitStrategy::EdgeRemoval,
        CircuitStrategy::AdjacencyMatrix,
        CircuitStrategy::SeenEdges,
    ];

    /// Returns *true* if the strategy consumes the edges of the input graph
    pub fn is_destructive(&self) -> bool {
        matches!(self, CircuitStrategy::EdgeRemoval)
    }
}

impl fmt::Display for CircuitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CircuitStrategy::EdgeRemoval => "edge-removal",
            CircuitStrategy::AdjacencyMatrix => "adjacency-matrix",
            CircuitStrategy::SeenEdges => "seen-edges",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CircuitStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edge-removal" | "removal" => Ok(CircuitStrategy::EdgeRemoval),
            "adjacency-matrix" | "matrix" => Ok(CircuitStrategy::AdjacencyMatrix),
            "seen-edges" | "seen" => Ok(CircuitStrategy::SeenEdges),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Consumes edges during Hierholzer's algorithm
pub(crate) trait EdgeTracker {
    /// Marks an unconsumed edge incident to `u` as consumed and returns its other endpoint.
    /// Returns *None* if all edges at `u` are consumed.
    fn take_edge_at(&mut self, u: Node) -> Option<Node>;
}

pub(crate) struct EdgeRemovalTracker<'a, G> {
    graph: &'a mut G,
}

impl<G> EdgeTracker for EdgeRemovalTracker<'_, G>
where
    G: AdjacencyList + GraphEdgeEditing,
{
    fn take_edge_at(&mut self, u: Node) -> Option<Node> {
        let w = self.graph.last_neighbor_of(u)?;
        self.graph.remove_edge(u, w);
        Some(w)
    }
}

/// One bit row per node; an edge is consumed by clearing both of its entries
pub(crate) struct AdjacencyMatrixTracker {
    rows: Vec<NodeBitSet>,
}

impl AdjacencyMatrixTracker {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            rows: graph
                .vertices()
                .map(|u| graph.neighbors_of_as_bitset(u))
                .collect(),
        }
    }
}

impl EdgeTracker for AdjacencyMatrixTracker {
    fn take_edge_at(&mut self, u: Node) -> Option<Node> {
        let w = self.rows[u as usize].first_one()?;
        self.rows[u as usize].set(w, false);
        self.rows[w].set(u as usize, false);
        Some(w as Node)
    }
}

/// Edges are keyed by their normalized form
pub(crate) struct SeenEdgesTracker<'a, G, S = FxHashSet<Edge>> {
    graph: &'a G,
    seen: S,
}

impl<'a, G, S> SeenEdgesTracker<'a, G, S>
where
    G: AdjacencyList + GraphEdgeOrder,
    S: Set<Edge> + FromCapacity,
{
    fn new(graph: &'a G) -> Self {
        let m = graph.number_of_edges() as usize;
        Self {
            graph,
            seen: S::from_total_used_capacity(m, m),
        }
    }
}

impl<G, S> EdgeTracker for SeenEdgesTracker<'_, G, S>
where
    G: AdjacencyList,
    S: Set<Edge>,
{
    fn take_edge_at(&mut self, u: Node) -> Option<Node> {
        let w = self
            .graph
            .neighbors_of(u)
            .find(|&w| !self.seen.contains(&Edge(u, w).normalized()))?;
        self.seen.insert(Edge(u, w).normalized());
        Some(w)
    }
}

/// Runs the stack-based walk from `start` until every edge reachable from it is consumed
fn walk<T: EdgeTracker>(mut tracker: T, start: Node, num_edges: NumEdges) -> Circuit {
    let mut stack: Vec<Node> = NodeSequencer::init(start);
    let mut circuit = Vec::with_capacity(num_edges as usize + 1);

    while let Some(current) = stack.peek() {
        if let Some(next) = tracker.take_edge_at(current) {
            trace!("traverse edge {}", Edge(current, next));
            stack.push(next);
        } else {
            stack.pop();
            circuit.push(current);
        }
    }

    Circuit::new(circuit)
}

/// Computes Eulerian circuits with Hierholzer's algorithm.
///
/// The graph is checked with [`Eulerian::check_eulerian`] before any edge is consumed;
/// if the check fails, the graph is left untouched.
///
/// # Examples
/// ```
/// use ucircuits::{prelude::*, algo::*};
///
/// let mut graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
///
/// let circuit = Hierholzer::new()
///     .strategy(CircuitStrategy::AdjacencyMatrix)
///     .start_node(1)
///     .compute(&mut graph)
///     .unwrap();
///
/// assert_eq!(circuit.nodes(), &[1, 2, 0, 1]);
/// assert_eq!(graph.number_of_edges(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Hierholzer {
    strategy: CircuitStrategy,
    start_node: Option<Node>,
}

impl Hierholzer {
    /// Creates the default configuration: [`CircuitStrategy::SeenEdges`] starting
    /// at the smallest node with positive degree
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: CircuitStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(mut self, strategy: CircuitStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// The circuit starts and ends at `u`; `u` must have positive degree
    pub fn set_start_node(&mut self, u: Node) {
        self.start_node = Some(u);
    }

    pub fn start_node(mut self, u: Node) -> Self {
        self.set_start_node(u);
        self
    }

    /// Computes an Eulerian circuit with the configured strategy.
    /// [`CircuitStrategy::EdgeRemoval`] leaves `graph` without edges, all other strategies only read it.
    ///
    /// # Errors
    /// Returns an [`EulerianError`] if the graph is not Eulerian or the start node is
    /// out of range or isolated.
    pub fn compute<G>(&self, graph: &mut G) -> Result<Circuit, EulerianError>
    where
        G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder,
    {
        if !self.strategy.is_destructive() {
            return self.compute_shared(&*graph);
        }

        let start = self.prepare(&*graph)?;
        let m = graph.number_of_edges();
        let circuit = walk(EdgeRemovalTracker { graph }, start, m);
        Ok(self.finish(circuit))
    }

    /// Like [`Hierholzer::compute`] but never modifies `graph`.
    ///
    /// # Errors
    /// Additionally returns [`EulerianError::RequiresExclusiveAccess`] if configured
    /// with [`CircuitStrategy::EdgeRemoval`].
    pub fn compute_shared<G>(&self, graph: &G) -> Result<Circuit, EulerianError>
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        match self.strategy {
            CircuitStrategy::EdgeRemoval => Err(EulerianError::RequiresExclusiveAccess),
            CircuitStrategy::AdjacencyMatrix => {
                let start = self.prepare(graph)?;
                let circuit = walk(
                    AdjacencyMatrixTracker::new(graph),
                    start,
                    graph.number_of_edges(),
                );
                Ok(self.finish(circuit))
            }
            CircuitStrategy::SeenEdges => self.compute_with_seen_set::<G, FxHashSet<Edge>>(graph),
        }
    }

    /// Runs the [`CircuitStrategy::SeenEdges`] strategy (regardless of the configured one)
    /// with `S` as the set of traversed edges.
    ///
    /// # Errors
    /// See [`Hierholzer::compute`].
    pub fn compute_with_seen_set<G, S>(&self, graph: &G) -> Result<Circuit, EulerianError>
    where
        G: AdjacencyList + GraphEdgeOrder,
        S: Set<Edge> + FromCapacity,
    {
        let start = self.prepare(graph)?;
        let tracker = SeenEdgesTracker::<G, S>::new(graph);
        let circuit = walk(tracker, start, graph.number_of_edges());
        Ok(self.finish(circuit))
    }

    /// Validates the graph and returns the start node
    fn prepare<G>(&self, graph: &G) -> Result<Node, EulerianError>
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        graph.check_eulerian()?;

        let start = match self.start_node {
            Some(u) if !graph.contains_node(u) || graph.is_isolated(u) => {
                return Err(EulerianError::InvalidStartNode(u));
            }
            Some(u) => u,
            None => graph
                .vertices_with_neighbors()
                .next()
                .ok_or(EulerianError::EmptyGraph)?,
        };

        debug!(
            "hierholzer ({}) starts at node {start} on {} edges",
            self.strategy,
            graph.number_of_edges()
        );
        Ok(start)
    }

    fn finish(&self, circuit: Circuit) -> Circuit {
        debug!(
            "hierholzer ({}) found circuit with {} edges",
            self.strategy,
            circuit.number_of_edges()
        );
        circuit
    }
}

/// Shortcuts for computing Eulerian circuits directly on a graph.
///
/// # Examples
/// ```
/// use ucircuits::{prelude::*, algo::*};
///
/// let mut graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
///
/// let circuit = graph.eulerian_circuit_by_seen_edges().unwrap();
/// assert_eq!(circuit.len(), 7);
/// assert_eq!(circuit.verify_for(&graph), Ok(()));
///
/// let circuit = graph.eulerian_circuit_by_removal().unwrap();
/// assert_eq!(circuit.len(), 7);
/// assert_eq!(graph.number_of_edges(), 0);
/// ```
pub trait EulerianCircuits: AdjacencyList + GraphEdgeOrder + Sized {
    /// Computes an Eulerian circuit with the default configuration of [`Hierholzer`]
    fn eulerian_circuit(&self) -> Result<Circuit, EulerianError> {
        Hierholzer::new().compute_shared(self)
    }

    /// Computes an Eulerian circuit and removes all edges from the graph
    fn eulerian_circuit_by_removal(&mut self) -> Result<Circuit, EulerianError>
    where
        Self: GraphEdgeEditing,
    {
        self.build_circuit(CircuitStrategy::EdgeRemoval)
    }

    /// Computes an Eulerian circuit on a bit matrix copy of the graph
    fn eulerian_circuit_by_matrix(&self) -> Result<Circuit, EulerianError> {
        Hierholzer::new()
            .strategy(CircuitStrategy::AdjacencyMatrix)
            .compute_shared(self)
    }

    /// Computes an Eulerian circuit while recording traversed edges in a set
    fn eulerian_circuit_by_seen_edges(&self) -> Result<Circuit, EulerianError> {
        Hierholzer::new()
            .strategy(CircuitStrategy::SeenEdges)
            .compute_shared(self)
    }

    /// Computes an Eulerian circuit with the given strategy starting at the smallest non-isolated node
    fn build_circuit(&mut self, strategy: CircuitStrategy) -> Result<Circuit, EulerianError>
    where
        Self: GraphEdgeEditing,
    {
        Hierholzer::new().strategy(strategy).compute(self)
    }
}

impl<G> EulerianCircuits for G where G: AdjacencyList + GraphEdgeOrder + Sized {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;

    fn scenario_a() -> AdjArrayUndir {
        AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 1), (1, 5), (5, 0)])
    }

    #[test]
    fn neighbor_selection() {
        let triangle = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let by_removal = triangle.clone().eulerian_circuit_by_removal().unwrap();
        let by_matrix = triangle.eulerian_circuit_by_matrix().unwrap();
        let by_seen_edges = triangle.eulerian_circuit_by_seen_edges().unwrap();
        assert_eq!(by_removal.nodes(), &[0, 1, 2, 0]);
        assert_eq!(by_matrix.nodes(), &[0, 2, 1, 0]);
        assert_eq!(by_seen_edges.nodes(), &[0, 2, 1, 0]);

        let graph = scenario_a();
        let by_removal = graph.clone().eulerian_circuit_by_removal().unwrap();
        assert_eq!(by_removal.into_nodes(), vec![0, 1, 2, 3, 4, 1, 5, 0]);
        assert_eq!(
            graph.eulerian_circuit_by_matrix().unwrap().into_nodes(),
            vec![0, 5, 1, 4, 3, 2, 1, 0]
        );
        assert_eq!(
            graph.eulerian_circuit_by_seen_edges().unwrap().into_nodes(),
            vec![0, 5, 1, 4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn removal_consumes_graph() {
        let mut graph = scenario_a();
        let copy = graph.clone();

        let circuit = graph.build_circuit(CircuitStrategy::EdgeRemoval).unwrap();
        assert_eq!(circuit.verify_for(&copy), Ok(()));
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.vertices().all(|u| graph.is_isolated(u)));

        // nothing left to traverse
        assert_eq!(
            graph.build_circuit(CircuitStrategy::EdgeRemoval),
            Err(EulerianError::EmptyGraph)
        );
    }

    #[test]
    fn shared_strategies_keep_graph() {
        let mut graph = scenario_a();
        let edges = graph.ordered_edges(true).collect_vec();

        for strategy in [CircuitStrategy::AdjacencyMatrix, CircuitStrategy::SeenEdges] {
            let circuit = graph.build_circuit(strategy).unwrap();
            assert_eq!(circuit.number_of_edges(), 7);
            assert_eq!(graph.ordered_edges(true).collect_vec(), edges);
        }
    }

    #[test]
    fn requires_exclusive_access() {
        let graph = scenario_a();
        assert_eq!(
            Hierholzer::new()
                .strategy(CircuitStrategy::EdgeRemoval)
                .compute_shared(&graph),
            Err(EulerianError::RequiresExclusiveAccess)
        );
        assert_eq!(graph.number_of_edges(), 7);
    }

    #[test]
    fn custom_seen_set() {
        let graph = SparseAdjArrayUndir::from_edges(
            5,
            [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)],
        );
        let with_std = Hierholzer::new()
            .start_node(3)
            .compute_with_seen_set::<_, HashSet<Edge>>(&graph)
            .unwrap();
        let with_fx = Hierholzer::new()
            .start_node(3)
            .compute_shared(&graph)
            .unwrap();

        assert_eq!(with_std, with_fx);
        assert_eq!(with_std.start(), 3);
    }

    #[test]
    fn invalid_start_node() {
        let mut graph = AdjArrayUndir::from_edges(5, [(1, 2), (2, 3), (3, 1)]);

        for strategy in CircuitStrategy::ALL {
            for u in [0, 4, 5, 100] {
                assert_eq!(
                    Hierholzer::new()
                        .strategy(strategy)
                        .start_node(u)
                        .compute(&mut graph),
                    Err(EulerianError::InvalidStartNode(u))
                );
            }
            assert_eq!(graph.number_of_edges(), 3);
        }

        assert_eq!(graph.eulerian_circuit().unwrap().start(), 1);
    }

    #[test]
    fn not_eulerian_is_not_modified() {
        let mut graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(
            graph.eulerian_circuit_by_removal(),
            Err(EulerianError::OddDegree { node: 2, degree: 3 })
        );
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn strategy_names() {
        for strategy in CircuitStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<CircuitStrategy>(), Ok(strategy));
        }
        assert_eq!("Matrix".parse::<CircuitStrategy>(), Ok(CircuitStrategy::AdjacencyMatrix));
        assert_eq!(
            "fleury".parse::<CircuitStrategy>(),
            Err(UnknownStrategy("fleury".to_string()))
        );
        assert_eq!(CircuitStrategy::default(), CircuitStrategy::SeenEdges);
    }
}
