use fxhash::FxHashSet;
use itertools::Itertools;
use rand::seq::SliceRandom;

use super::*;

/// Generator for random graphs in which every node has even degree.
///
/// The graph is the union of random simple cycles on `n` nodes. A sampled cycle that
/// shares an edge with a previously accepted cycle is dropped, so the accepted cycles are
/// edge-disjoint and every node ends up with even degree. The result is not necessarily
/// connected and hence not necessarily Eulerian.
///
/// The generator can be parameterized via:
/// - `.nodes(n)` — total number of nodes (at least `3`)
/// - `.cycles(k)` — number of cycles sampled
/// - `.cycle_len(min, max)` — bounds on the number of nodes per cycle (default `3..=n`)
#[derive(Debug, Copy, Clone, Default)]
pub struct CycleUnion {
    n: NumNodes,
    cycles: usize,
    len_bounds: Option<(NumNodes, NumNodes)>,
}

impl CycleUnion {
    /// Creates a new generator without nodes and cycles
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of cycles sampled
    pub fn cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    /// Sets the minimum and maximum number of nodes per cycle (both inclusive).
    /// ** Panics if `min < 3` or `min > max` **
    pub fn cycle_len(mut self, min: NumNodes, max: NumNodes) -> Self {
        assert!(min >= 3, "A cycle needs at least 3 nodes!");
        assert!(min <= max);
        self.len_bounds = Some((min, max));
        self
    }

    fn len_range(&self) -> (NumNodes, NumNodes) {
        let (min, max) = self.len_bounds.unwrap_or((3, self.n));
        (min.min(self.n), max.min(self.n))
    }
}

impl NumNodesGen for CycleUnion {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for CycleUnion {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.n >= 3, "A cycle needs at least 3 nodes!");
        let (min, max) = self.len_range();

        let mut nodes = (0..self.n).collect_vec();
        let mut used = FxHashSet::default();
        let mut edges = Vec::new();

        for _ in 0..self.cycles {
            let len = rng.random_range(min..=max) as usize;
            let (cycle, _) = nodes.partial_shuffle(rng, len);

            let cycle_edges = cycle
                .iter()
                .circular_tuple_windows()
                .map(|(&u, &v)| Edge(u, v).normalized())
                .collect_vec();

            if cycle_edges.iter().any(|e| used.contains(e)) {
                continue;
            }

            used.extend(cycle_edges.iter().copied());
            edges.extend(cycle_edges);
        }

        edges.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::*;

    #[test]
    fn even_degrees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for n in [3, 4, 10, 50] {
            for cycles in [1, 2, 5, 20] {
                let edges = CycleUnion::new().nodes(n).cycles(cycles).generate(rng);
                assert!(!edges.is_empty());
                assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));

                let graph = AdjArrayUndir::try_from_edges(n, edges).unwrap();
                assert!(graph.has_only_even_degrees());
            }
        }
    }

    #[test]
    fn single_cycle_is_eulerian() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let graph: AdjMatrixUndir = RandomGraph::cycle_union(rng, 8, 1);
            assert!(graph.is_eulerian());
            assert!(graph.degrees().all(|d| d == 0 || d == 2));
        }
    }

    #[test]
    fn cycle_lengths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let edges = CycleUnion::new()
            .nodes(20)
            .cycles(1)
            .cycle_len(5, 5)
            .generate(rng);
        assert_eq!(edges.len(), 5);

        let edges = CycleUnion::new()
            .nodes(4)
            .cycles(1)
            .cycle_len(3, 10)
            .generate(rng);
        assert!((3..=4).contains(&edges.len()));
    }
}
