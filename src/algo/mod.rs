/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use ucircuits::algo::*;
```
and gain access to traversal, connectivity, the Eulerian check and circuit construction.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod circuit;
mod connectivity;
mod eulerian;
mod hierholzer;
mod traversal;

use crate::{prelude::*, utils::*};

pub use circuit::*;
pub use connectivity::*;
pub use eulerian::*;
pub use hierholzer::*;
pub use traversal::*;
