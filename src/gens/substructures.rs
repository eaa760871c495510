/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

Since graphs are kept simple, every method fails on the first edge that would be a
self-loop, a parallel edge, or out of range. Edges inserted before remain in the graph.

# Example

```rust
use ucircuits::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(5);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
assert_eq!(g.connect_clique([0, 1, 4]), Err(GraphError::ParallelEdge(Edge(0, 1))));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use ucircuits::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_path([0, 1, 2, 3]).unwrap();
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<(), GraphError>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    /// - Fewer than three nodes cannot form a cycle in a simple graph and are rejected.
    ///
    /// # Example
    /// ```rust
    /// use ucircuits::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(3);
    /// g.connect_cycle([0, 1, 2]).unwrap();
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 0));
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<(), GraphError>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    ///
    /// # Example
    /// ```rust
    /// use ucircuits::{prelude::*, gens::*};
    ///
    /// let mut g = AdjMatrixUndir::new(3);
    /// g.connect_clique([0, 1, 2]).unwrap();
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(0, 2));
    /// ```
    fn connect_clique<C>(&mut self, nodes: C) -> Result<(), GraphError>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<(), GraphError>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<(), GraphError>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            let mut len = 1;
            for cur in iter {
                self.try_add_edge(prev, cur)?;
                prev = cur;
                len += 1;
            }

            // closing a cycle of one or two nodes would be a loop or a parallel edge
            match len {
                1 => return Err(GraphError::SelfLoop(first)),
                2 => return Err(GraphError::ParallelEdge(Edge(prev, first).normalized())),
                _ => self.try_add_edge(prev, first)?,
            }
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C) -> Result<(), GraphError>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }
}
