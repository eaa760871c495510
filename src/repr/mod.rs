/*!
# Graph Representations

All representations store an **undirected simple graph** with nodes `0..n` as one
[`Neighborhood`] per node plus an edge counter:

- [`AdjArrayUndir`]: neighborhoods as `Vec<Node>` (the default choice),
- [`SparseAdjArrayUndir`]: neighborhoods as `SmallVec<[Node; 8]>` for very sparse graphs,
- [`AdjMatrixUndir`]: neighborhoods as bit rows, i.e. an adjacency matrix with `O(1)` edge tests
  but `O(n^2)` memory.

List-based neighborhoods keep neighbors in insertion order (modulo swap-removals),
matrix rows always list neighbors in increasing order.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
