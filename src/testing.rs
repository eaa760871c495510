use itertools::Itertools;
use rand::Rng;

use crate::{algo::*, prelude::*};

/// Creates a list of at most `m_ub` random normalized edges without self-loops for nodes `0..n`
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Runs every circuit strategy on a copy of `graph` and checks that each yields a valid,
/// reproducible Eulerian circuit and treats the copy as documented
pub(crate) fn assert_valid_circuits<G>(graph: &G)
where
    G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder + Clone,
{
    let original_edges = graph.ordered_edges(true).collect_vec();

    for strategy in CircuitStrategy::ALL {
        let mut copy = graph.clone();
        let circuit = copy.build_circuit(strategy).unwrap();

        assert_eq!(circuit.verify_for(graph), Ok(()), "{strategy}: {circuit}");
        assert_eq!(circuit.len(), graph.number_of_edges() as usize + 1);
        assert_eq!(circuit.start(), circuit.nodes()[circuit.len() - 1]);

        if strategy.is_destructive() {
            assert!(copy.is_singleton_graph());
            assert_eq!(copy.edges(false).count(), 0);
        } else {
            assert_eq!(copy.ordered_edges(true).collect_vec(), original_edges);
        }

        let mut again = graph.clone();
        assert_eq!(again.build_circuit(strategy).unwrap(), circuit);
    }

    assert_eq!(
        graph.eulerian_circuit_by_matrix().unwrap(),
        graph.clone().build_circuit(CircuitStrategy::AdjacencyMatrix).unwrap()
    );
    assert_eq!(
        graph.eulerian_circuit_by_seen_edges().unwrap(),
        graph.eulerian_circuit().unwrap()
    );
    assert_eq!(graph.ordered_edges(true).collect_vec(), original_edges);
}

/// Checks that no strategy builds a circuit for a non-Eulerian graph and that the graph is left untouched
pub(crate) fn assert_no_circuit<G>(graph: &G, expected: EulerianError)
where
    G: AdjacencyList + GraphEdgeEditing + GraphEdgeOrder + Clone,
{
    assert!(!graph.is_eulerian());
    assert_eq!(graph.check_eulerian(), Err(expected));

    for strategy in CircuitStrategy::ALL {
        let mut copy = graph.clone();
        assert_eq!(copy.build_circuit(strategy), Err(expected));
        assert_eq!(
            copy.ordered_edges(true).collect_vec(),
            graph.ordered_edges(true).collect_vec()
        );
    }
}

/// Generates a test module for a graph representation; every listed arm adds the tests for that trait
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            #[allow(unused_imports)]
            use crate::{algo::*, gens::*, prelude::*, testing::*};
            #[allow(unused_imports)]
            use itertools::Itertools;
            #[allow(unused_imports)]
            use rand::{Rng, SeedableRng};
            #[allow(unused_imports)]
            use rand_pcg::Pcg64Mcg;

            $(
                crate::testing::test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton_graph());

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.vertices_with_neighbors().count(), 0);
                assert_eq!(graph.number_of_nodes_with_neighbors(), 0);
            }
        }

        #[test]
        #[should_panic]
        fn graph_new_without_nodes() {
            let _ = <$graph>::new(0);
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> =
                            vec![node_bitset_unset(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set(v as usize, true);
                            adj_matrix[v as usize].set(u as usize, true);
                        }

                        // insert in both orientations to exercise normalization
                        let graph = <$graph>::from_edges(
                            n,
                            edges
                                .iter()
                                .enumerate()
                                .map(|(i, e)| if i % 2 == 0 { *e } else { e.reverse() }),
                        );

                        let m = edges.len() as NumEdges;

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(edges, graph.ordered_edges(true).collect_vec());
                        assert_eq!(graph.edges(false).count(), 2 * m as usize);

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(
                                graph.degree_of(u) as usize,
                                adj_matrix[u as usize].count_ones()
                            );
                            assert_eq!(graph.is_isolated(u), adj_matrix[u as usize].not_any());

                            let last = graph.last_neighbor_of(u);
                            assert_eq!(last, graph.neighbors_of(u).last());
                            if let Some(v) = last {
                                assert!(graph.has_edge(u, v) && graph.has_edge(v, u));
                            }
                        }

                        assert_eq!(
                            graph.vertices_with_neighbors().collect_vec(),
                            (0..n).filter(|&u| adj_matrix[u as usize].any()).collect_vec()
                        );
                        assert_eq!(
                            graph.number_of_nodes_with_neighbors() as usize,
                            adj_matrix.iter().filter(|row| row.any()).count()
                        );
                        assert_eq!(
                            graph.max_degree() as usize,
                            adj_matrix.iter().map(|row| row.count_ones()).max().unwrap()
                        );
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix: Vec<NodeBitSet> =
                            vec![node_bitset_unset(n); n as usize];

                        for &Edge(u, v) in &edges {
                            assert_eq!(graph.try_add_edge(u, v), Ok(()));
                            adj_matrix[u as usize].set(v as usize, true);
                            adj_matrix[v as usize].set(u as usize, true);

                            assert_eq!(
                                graph.try_add_edge(v, u),
                                Err(GraphError::ParallelEdge(Edge(u, v)))
                            );
                        }

                        assert_eq!(graph.try_add_edge(0, 0), Err(GraphError::SelfLoop(0)));
                        assert_eq!(
                            graph.try_add_edge(0, n),
                            Err(GraphError::NodeOutOfRange { node: n, n })
                        );
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].replace(v as usize, false) {
                                assert!(graph.remove_edge(u, v));
                                assert!(adj_matrix[v as usize].replace(u as usize, false));
                                m -= 1;
                            } else {
                                assert!(!graph.remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        assert!(!graph.remove_edge(0, n));

                        for Edge(u, v) in graph.ordered_edges(true).collect_vec() {
                            assert!(graph.remove_edge(v, u));
                        }
                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
    ($graph:ident: Eulerian) => {
        #[test]
        fn eulerian_scenarios() {
            // 1 has degree four, all others degree two
            let graph = <$graph>::from_edges(
                6,
                [(0, 1), (1, 2), (2, 3), (3, 4), (4, 1), (1, 5), (5, 0)],
            );
            assert!(graph.is_eulerian());
            assert_valid_circuits(&graph);

            let triangle = <$graph>::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
            assert!(triangle.is_eulerian());
            assert_valid_circuits(&triangle);
            assert_eq!(triangle.eulerian_circuit().unwrap().len(), 4);

            let two_triangles = <$graph>::from_edges(
                6,
                [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
            );
            assert!(two_triangles.has_only_even_degrees());
            assert_no_circuit(&two_triangles, EulerianError::Disconnected { components: 2 });

            let with_isolated = <$graph>::from_edges(4, [(1, 2), (2, 3), (3, 1)]);
            assert!(with_isolated.is_eulerian());
            assert_valid_circuits(&with_isolated);
            assert_eq!(with_isolated.eulerian_circuit().unwrap().start(), 1);

            let with_pendant = <$graph>::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
            assert_eq!(with_pendant.odd_degree_vertices(), vec![2, 3]);
            assert_no_circuit(&with_pendant, EulerianError::OddDegree { node: 2, degree: 3 });

            assert_no_circuit(&<$graph>::new(5), EulerianError::EmptyGraph);
        }

        #[test]
        fn eulerian_random_cycle_unions() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            let mut eulerian = 0;
            for n in [5 as NumNodes, 10, 30] {
                for cycles in [1, 3, 10] {
                    for _ in 0..10 {
                        let graph = <$graph>::cycle_union(rng, n, cycles);
                        assert!(graph.has_only_even_degrees());

                        if graph.is_eulerian() {
                            eulerian += 1;
                            assert_valid_circuits(&graph);
                        } else {
                            let components = graph.number_of_nontrivial_components();
                            assert!(components > 1);
                            assert_no_circuit(&graph, EulerianError::Disconnected { components });
                        }
                    }
                }
            }

            assert!(eulerian > 0);
        }

        #[test]
        fn eulerian_start_node() {
            let graph = <$graph>::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);

            for strategy in CircuitStrategy::ALL {
                for start in 0..5 {
                    let mut copy = graph.clone();
                    let circuit = Hierholzer::new()
                        .strategy(strategy)
                        .start_node(start)
                        .compute(&mut copy)
                        .unwrap();
                    assert_eq!(circuit.start(), start);
                    assert_eq!(circuit.verify_for(&graph), Ok(()));
                }

                let mut copy = graph.clone();
                assert_eq!(
                    Hierholzer::new()
                        .strategy(strategy)
                        .start_node(5)
                        .compute(&mut copy),
                    Err(EulerianError::InvalidStartNode(5))
                );
                assert_eq!(copy.number_of_edges(), graph.number_of_edges());
            }
        }
    };
}

pub(crate) use test_graph_ops;
