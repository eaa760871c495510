/*!
# Graph Generators

This module provides builder-style generators for edge lists and helpers to insert
substructures into existing graphs.

Each generator allows parameterized control over structural properties of the graph and can
produce either a complete collection of edges or a stream of them through iterators. The
typical usage workflow is:

1. Create a generator instance (e.g., `CycleUnion::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).cycles(k)`).
3. Generate edges via `generate()` or `stream()`.

The `RandomGraph` trait wraps generators into constructors of whole graphs.

# Example
```rust
use ucircuits::{prelude::*, algo::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = AdjArrayUndir::cycle_union(rng, 10, 4);
assert!(graph.has_only_even_degrees());
```
*/

use rand::Rng;

use crate::prelude::*;

mod cycles;
mod substructures;

pub use cycles::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a graph on `n` nodes that is the union of edge-disjoint random cycles,
    /// see [`CycleUnion`]. Every node has even degree.
    fn cycle_union<R>(rng: &mut R, n: NumNodes, cycles: usize) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn cycle_union<R>(rng: &mut R, n: NumNodes, cycles: usize) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, CycleUnion::new().nodes(n).cycles(cycles).stream(rng))
    }
}
