//! Property-based tests for the labeled graph.
//!
//! Random operation sequences are replayed against a graph and the structural
//! invariants are checked after every step. Dedicated properties cover the
//! reordering primitives: shuffling preserves topology, permuting by an order
//! and then by its inverse is the identity, and normalisation is idempotent.

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, TestCaseError, TestCaseResult};
use test_strategy::Arbitrary;

use crate::{RandomSource, SeededRandom, Weight, WeightArray};

use super::{LabeledGraph, labels::invert};

/// Upper bound on labels touched by generated operations.
const MAX_LABEL: usize = 12;

#[derive(Clone, Debug, Arbitrary)]
enum GraphOp {
    #[weight(6)]
    AddEdge {
        #[strategy(0..MAX_LABEL)]
        u: usize,
        #[strategy(0..MAX_LABEL)]
        v: usize,
        weighted: bool,
    },
    #[weight(1)]
    Extend {
        #[strategy(0..MAX_LABEL)]
        extra: usize,
    },
    #[weight(1)]
    SetVertexWeight {
        #[strategy(0..MAX_LABEL)]
        label: usize,
        value: i64,
    },
    #[weight(1)]
    Shuffle { seed: u64 },
}

fn apply(graph: &mut LabeledGraph, op: &GraphOp) -> TestCaseResult {
    let result = match *op {
        GraphOp::AddEdge { u, v, weighted } => {
            let weight = if weighted {
                Weight::Int(i64::try_from(u + v).unwrap_or_default())
            } else {
                Weight::Empty
            };
            graph.add_edge(u, v, weight).map(|_| ())
        }
        GraphOp::Extend { extra } => graph.extend(graph.n() + extra),
        GraphOp::SetVertexWeight { label, value } => {
            if label < graph.n() {
                graph.set_vertex_weight(label, Weight::Int(value))
            } else {
                Ok(())
            }
        }
        GraphOp::Shuffle { seed } => graph.shuffle(&mut SeededRandom::new(seed)),
    };
    result.map_err(|err| TestCaseError::fail(format!("{op:?} failed: {err}")))
}

fn build(directed: bool, ops: &[GraphOp]) -> Result<LabeledGraph, TestCaseError> {
    let mut graph = LabeledGraph::new(directed);
    for op in ops {
        apply(&mut graph, op)?;
    }
    Ok(graph)
}

/// Edges as internal index pairs, sorted, with undirected endpoints ordered.
fn internal_edges(graph: &LabeledGraph) -> Vec<(usize, usize)> {
    let mut edges: Vec<(usize, usize)> = graph
        .store
        .edges()
        .iter()
        .map(|edge| {
            if graph.is_directed() {
                (edge.u, edge.v)
            } else {
                let ordered = edge.ordered();
                (ordered.u, ordered.v)
            }
        })
        .collect();
    edges.sort_unstable();
    edges
}

fn incident_ids(graph: &LabeledGraph) -> Vec<Vec<usize>> {
    (0..graph.n())
        .map(|index| graph.store.incident(index).to_vec())
        .collect()
}

fn ops_strategy() -> impl Strategy<Value = Vec<GraphOp>> {
    proptest::collection::vec(any::<GraphOp>(), 0..48)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn invariants_hold_after_every_operation(directed: bool, ops in ops_strategy()) {
        let mut graph = LabeledGraph::new(directed);
        let mut added = 0_usize;
        for op in &ops {
            apply(&mut graph, op)?;
            if matches!(op, GraphOp::AddEdge { .. }) {
                added += 1;
            }
            graph
                .check_invariants()
                .map_err(|err| TestCaseError::fail(format!("after {op:?}: {err}")))?;
            prop_assert_eq!(graph.m(), added);
            for index in 0..graph.n() {
                prop_assert!(graph.store.incident(index).iter().all(|&id| id < graph.m()));
            }
        }
    }

    #[test]
    fn labels_round_trip(directed: bool, ops in ops_strategy()) {
        let graph = build(directed, &ops)?;
        for value in 0..graph.n() {
            let index = graph.to_internal(value)?;
            prop_assert_eq!(graph.to_label(index)?, value);
            let label = graph.to_label(value)?;
            prop_assert_eq!(graph.to_internal(label)?, value);
        }
    }

    #[test]
    fn shuffle_preserves_internal_topology(directed: bool, ops in ops_strategy(), seed: u64) {
        let mut graph = build(directed, &ops)?;
        let before = internal_edges(&graph);
        let components = graph.component_count();
        graph.shuffle(&mut SeededRandom::new(seed))?;
        prop_assert_eq!(internal_edges(&graph), before);
        prop_assert_eq!(graph.component_count(), components);
    }

    #[test]
    fn permute_then_inverse_is_identity(directed: bool, ops in ops_strategy(), seed: u64) {
        let mut graph = build(directed, &ops)?;
        let edges = graph.edges();
        let incident = incident_ids(&graph);
        let weights: Vec<Weight> = (0..graph.m())
            .map(|id| graph.edge_weight(id).cloned())
            .collect::<Result<_, _>>()?;

        let order = SeededRandom::new(seed).permutation(graph.m());
        let inverse = invert(&order).ok_or_else(|| TestCaseError::fail("not a permutation"))?;
        graph.permute_edges(&order)?;
        graph.permute_edges(&inverse)?;

        prop_assert_eq!(graph.edges(), edges);
        prop_assert_eq!(incident_ids(&graph), incident);
        for (id, weight) in weights.iter().enumerate() {
            prop_assert_eq!(graph.edge_weight(id)?, weight);
        }
    }

    #[test]
    fn normalize_sorts_and_is_idempotent(directed: bool, ops in ops_strategy()) {
        let ops: Vec<GraphOp> = ops
            .into_iter()
            .filter(|op| !matches!(op, GraphOp::Shuffle { .. }))
            .collect();
        let mut graph = build(directed, &ops)?;
        graph.normalize_edges()?;
        let once = graph.edges();
        let mut expected = once.clone();
        if !directed {
            for edge in &mut expected {
                *edge = (edge.0.min(edge.1), edge.0.max(edge.1));
            }
        }
        expected.sort_unstable();
        prop_assert_eq!(&once, &expected);

        graph.normalize_edges()?;
        prop_assert_eq!(graph.edges(), once);
    }

    #[test]
    fn bulk_vertex_weights_round_trip(
        ops in ops_strategy(),
        values in proptest::collection::vec(any::<i64>(), 1..MAX_LABEL),
    ) {
        let mut graph = build(false, &ops)?;
        let weights: WeightArray = values
            .iter()
            .cycle()
            .take(graph.n())
            .map(|&value| Weight::Int(value))
            .collect();
        graph.set_vertex_weights(&weights)?;
        for label in 0..graph.n() {
            prop_assert_eq!(graph.vertex_weight(label)?, weights.get(label));
        }
    }
}
