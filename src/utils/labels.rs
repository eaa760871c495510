/*!
# Labelling

Maps arbitrary hashable vertex labels onto the dense node range `0..n` used by all graph
representations, and translates results (such as circuits) back into labels.
*/
use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{algo::Circuit, error::GraphError, node::*, ops::*};

/// A bijection between labels of type `L` and the nodes `0..n`.
/// Labels are assigned node ids in order of first appearance.
#[derive(Clone, Debug)]
pub struct Labelling<L> {
    labels: Vec<L>,
    nodes: FxHashMap<L, Node>,
}

impl<L> Default for Labelling<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            nodes: FxHashMap::default(),
        }
    }
}

impl<L: Hash + Eq + Clone> Labelling<L> {
    /// Creates an empty labelling
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of labels (and thus nodes) known to the labelling
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns the node assigned to `label` if it exists
    pub fn node_of(&self, label: &L) -> Option<Node> {
        self.nodes.get(label).copied()
    }

    /// Returns the label of node `u` if it exists
    pub fn label_of(&self, u: Node) -> Option<&L> {
        self.labels.get(u as usize)
    }

    /// Returns the node assigned to `label`, assigning the next free node if the label is new
    pub fn get_or_insert(&mut self, label: L) -> Node {
        if let Some(&u) = self.nodes.get(&label) {
            return u;
        }

        let u = self.labels.len() as Node;
        self.labels.push(label.clone());
        self.nodes.insert(label, u);
        u
    }

    /// Translates a circuit over nodes back into a sequence of labels.
    /// Returns *None* if the circuit visits a node without label.
    pub fn labels_of(&self, circuit: &Circuit) -> Option<Vec<L>> {
        circuit
            .nodes()
            .iter()
            .map(|&u| self.label_of(u).cloned())
            .collect()
    }

    /// Builds a graph from a list of labelled edges together with the labelling used.
    ///
    /// # Example
    /// ```
    /// use ucircuits::{prelude::*, utils::Labelling};
    ///
    /// let (labels, graph) = Labelling::from_labelled_edges::<AdjArrayUndir>(
    ///     [("a", "b"), ("b", "c"), ("c", "a")]
    /// ).unwrap();
    /// assert_eq!(graph.number_of_nodes(), 3);
    /// assert_eq!(labels.node_of(&"c"), Some(2));
    /// ```
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if no edge is given and otherwise the first
    /// [`GraphError`] raised by an invalid edge (e.g. `("a", "a")`).
    pub fn from_labelled_edges<G: GraphFromScratch>(
        edges: impl IntoIterator<Item = (L, L)>,
    ) -> Result<(Self, G), GraphError> {
        let mut labelling = Self::new();
        let edges: Vec<(Node, Node)> = edges
            .into_iter()
            .map(|(a, b)| (labelling.get_or_insert(a), labelling.get_or_insert(b)))
            .collect();

        if edges.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let graph = G::try_from_edges(labelling.number_of_nodes(), edges)?;
        Ok((labelling, graph))
    }
}
