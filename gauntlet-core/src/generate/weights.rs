//! Uniform integer weights for generated graphs.

use crate::{
    LabeledGraph, Weight, WeightArray, error::GraphError, random::RandomSource,
};

/// Gives every edge an integer weight drawn uniformly from `[low, high]`.
///
/// # Errors
/// Returns [`GraphError`] if the graph rejects the weight array.
pub fn random_edge_weights(
    graph: &mut LabeledGraph,
    low: i64,
    high: i64,
    rng: &mut impl RandomSource,
) -> Result<(), GraphError> {
    let weights = draw(graph.m(), low, high, rng);
    graph.set_edge_weights(weights)
}

/// Gives every vertex an integer weight drawn uniformly from `[low, high]`.
///
/// # Errors
/// Returns [`GraphError`] if the graph rejects the weight array.
pub fn random_vertex_weights(
    graph: &mut LabeledGraph,
    low: i64,
    high: i64,
    rng: &mut impl RandomSource,
) -> Result<(), GraphError> {
    let weights = draw(graph.n(), low, high, rng);
    graph.set_vertex_weights(&weights)
}

fn draw(count: usize, low: i64, high: i64, rng: &mut impl RandomSource) -> WeightArray {
    (0..count)
        .map(|_| Weight::Int(rng.range_inclusive(low, high)))
        .collect()
}
