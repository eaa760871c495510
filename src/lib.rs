/*!
`ucircuits` computes **Eulerian circuits** on graphs that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Neither nodes nor edges have a weight attached to them
- **u**ndirected and simple : no self-loops, no parallel edges

An Eulerian circuit is a closed walk that traverses every edge of a graph exactly once.
Such a circuit exists if and only if every node has even degree and all nodes with positive
degree lie in a single connected component.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` where `Edge(u, v)` is treated as
equivalent to `Edge(v, u)`; [`Edge::normalized`] yields the canonical form.
Arbitrary vertex labels can be mapped onto nodes with [`utils::Labelling`].

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)
- [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir)

All of them reject self-loops and parallel edges on insertion.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, the most commonly used functionality is implemented via traits on the graph itself, making it usable without configuring the algorithm beforehand.

Circuits are computed with Hierholzer's algorithm in one of three strategies
(see [`algo::CircuitStrategy`]) that differ in how traversed edges are tracked.
Only [`algo::CircuitStrategy::EdgeRemoval`] modifies the input graph and hence requires `&mut` access.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`), connected components, the Eulerian check (`graph.is_eulerian()`) and circuit construction (`graph.eulerian_circuit()`),
- [`gens`] includes random generators for even-degree graphs and deterministic substructures such as paths/cycles/cliques,
- [`utils`] includes helper traits and structs such as set abstractions and vertex labellings.

In most use-cases, `use ucircuits::{prelude::*, algo::*};` suffices for your needs.

```rust
use ucircuits::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 1), (1, 5), (5, 0)]);
assert!(graph.is_eulerian());

let circuit = graph.eulerian_circuit().unwrap();
assert_eq!(circuit.len(), 8);
assert_eq!(circuit.verify_for(&graph), Ok(()));
```

# Logging
The crate logs through the [`log`](https://crates.io/crates/log) facade and never installs a logger itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `ucircuits::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
