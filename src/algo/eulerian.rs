use log::debug;
use num::Integer;

use super::*;

/// Eulerian-ness checks for undirected graphs.
///
/// A graph is Eulerian if every node has even degree and all nodes with positive degree
/// belong to one connected component. Isolated nodes never disqualify a graph; a graph
/// without any edge is *not* considered Eulerian.
pub trait Eulerian: AdjacencyList + Connectivity {
    /// Returns *true* if the graph has an Eulerian circuit.
    ///
    /// # Examples
    /// ```
    /// use ucircuits::{prelude::*, algo::*};
    ///
    /// let triangle = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0)]);
    /// assert!(triangle.is_eulerian());
    ///
    /// let path = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(!path.is_eulerian());
    /// ```
    fn is_eulerian(&self) -> bool {
        self.check_eulerian().is_ok()
    }

    /// Explains why the graph has no Eulerian circuit.
    ///
    /// # Errors
    /// - [`EulerianError::OddDegree`] for the smallest node with odd degree,
    /// - [`EulerianError::EmptyGraph`] if the graph has no edges,
    /// - [`EulerianError::Disconnected`] with the number of components containing an edge.
    fn check_eulerian(&self) -> Result<(), EulerianError> {
        if let Some(node) = self.vertices().find(|&u| self.degree_of(u).is_odd()) {
            let degree = self.degree_of(node);
            debug!("graph is not eulerian: node {node} has odd degree {degree}");
            return Err(EulerianError::OddDegree { node, degree });
        }

        if !self.all_positive_degree_vertices_connected()? {
            let components = self.number_of_nontrivial_components();
            debug!("graph is not eulerian: {components} non-trivial components");
            return Err(EulerianError::Disconnected { components });
        }

        Ok(())
    }

    /// Returns all nodes with odd degree in increasing order
    fn odd_degree_vertices(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.degree_of(u).is_odd())
            .collect()
    }

    /// Returns *true* if every node has even degree
    fn has_only_even_degrees(&self) -> bool {
        self.degrees().all(|d| d.is_even())
    }
}

impl<G> Eulerian for G where G: AdjacencyList + Sized {}
