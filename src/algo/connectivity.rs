use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connectivity queries on undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if all nodes with positive degree lie in the same connected component.
    /// Isolated nodes are ignored.
    ///
    /// # Examples
    /// ```
    /// use ucircuits::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(1, 2), (2, 3)]);
    /// assert_eq!(g.all_positive_degree_vertices_connected(), Ok(true));
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(1, 2), (3, 4)]);
    /// assert_eq!(g.all_positive_degree_vertices_connected(), Ok(false));
    /// ```
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if no node has positive degree.
    fn all_positive_degree_vertices_connected(&self) -> Result<bool, GraphError> {
        let root = self
            .vertices_with_neighbors()
            .next()
            .ok_or(GraphError::EmptyGraph)?;

        // BFS only reaches nodes with positive degree from a root with positive degree
        Ok(self.bfs(root).count() == self.number_of_nodes_with_neighbors() as usize)
    }

    /// Returns an iterator over all connected components (including isolated nodes)
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, false)
    }

    /// Returns an iterator over all connected components with at least one edge
    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, true)
    }

    /// Returns the number of connected components with at least one edge
    fn number_of_nontrivial_components(&self) -> usize {
        self.connected_components_no_singletons().count()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph.
/// Each component is emitted as the list of its nodes in BFS order;
/// components are ordered by their smallest node.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the iterator; if `skip_trivial`, isolated nodes are not reported
    pub fn new(graph: &'a G, skip_trivial: bool) -> Self {
        assert!(
            !graph.is_empty(),
            "Can't iterate connected components in a graph with no nodes!"
        );
        if skip_trivial {
            if let Some(start_node) = graph.vertices_with_neighbors().next() {
                Self {
                    bfs: graph
                        .bfs(start_node)
                        .with_nodes_excluded(graph.vertices().filter(|&u| graph.is_isolated(u))),
                }
            } else {
                let mut bfs = graph.bfs(0);
                bfs.exclude_nodes(graph.vertices());
                bfs.next(); // Consume falsely inserted starting node
                Self { bfs }
            }
        } else {
            Self { bfs: graph.bfs(0) }
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}
