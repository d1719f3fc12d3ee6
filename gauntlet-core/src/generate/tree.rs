//! Random recursive trees.

use tracing::instrument;

use crate::{LabeledGraph, Weight, error::GraphError, random::RandomSource};

/// Builds a tree on `n` vertices where each vertex `i > 0` is joined to a
/// uniformly chosen vertex in `0..i`.
///
/// Edge `i - 1` connects vertex `i` to its parent.
///
/// # Errors
/// Returns [`GraphError`] if the graph rejects a mutation.
///
/// # Examples
/// ```
/// use gauntlet_core::{SeededRandom, generate::random_tree};
///
/// let tree = random_tree(6, &mut SeededRandom::new(2))?;
/// assert_eq!(tree.m(), 5);
/// assert!(tree.is_connected());
/// # Ok::<(), gauntlet_core::GraphError>(())
/// ```
#[instrument(level = "debug", skip(rng))]
pub fn random_tree(n: usize, rng: &mut impl RandomSource) -> Result<LabeledGraph, GraphError> {
    let mut tree = LabeledGraph::undirected();
    tree.extend(n)?;
    for vertex in 1..n {
        let parent = rng.uniform(vertex);
        tree.add_edge(parent, vertex, Weight::Empty)?;
    }
    Ok(tree)
}
