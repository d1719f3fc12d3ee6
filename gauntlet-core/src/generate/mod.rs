//! Random graph generators built on the public [`LabeledGraph`] API.
//!
//! [`RandomGraphBuilder`] validates the requested shape once;
//! [`RandomGraph::generate`] can then be called repeatedly with any
//! [`RandomSource`]. Trees and random weights live in their own modules.

mod tree;
mod weights;

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{
    LabeledGraph, Weight,
    error::GenerateError,
    random::RandomSource,
};

pub use self::{
    tree::random_tree,
    weights::{random_edge_weights, random_vertex_weights},
};

/// Configures a uniformly random graph.
///
/// # Examples
/// ```
/// use gauntlet_core::{SeededRandom, generate::RandomGraphBuilder};
///
/// let graph = RandomGraphBuilder::new()
///     .with_vertices(5)
///     .with_edges(10)
///     .build()?
///     .generate(&mut SeededRandom::new(1))?;
/// assert_eq!(graph.n(), 5);
/// assert_eq!(graph.m(), 10);
/// # Ok::<(), gauntlet_core::GenerateError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RandomGraphBuilder {
    vertices: usize,
    edges: usize,
    directed: bool,
    loops: bool,
    multi_edges: bool,
}

impl RandomGraphBuilder {
    /// Creates a builder for an empty undirected simple graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex count.
    #[must_use]
    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Sets the number of edges to draw.
    #[must_use]
    pub fn with_edges(mut self, edges: usize) -> Self {
        self.edges = edges;
        self
    }

    /// Draws ordered pairs instead of unordered ones.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Allows edges from a vertex to itself.
    #[must_use]
    pub fn with_loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Allows several edges between the same pair of vertices.
    #[must_use]
    pub fn with_multi_edges(mut self, multi_edges: bool) -> Self {
        self.multi_edges = multi_edges;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`GenerateError::EdgesWithoutVertices`] when edges are requested on
    ///   zero vertices.
    /// - [`GenerateError::TooManyEdges`] when the edges cannot be placed
    ///   without repeating a pair (or at all, for a single vertex without
    ///   loops).
    pub fn build(self) -> Result<RandomGraph, GenerateError> {
        if self.edges > 0 && self.vertices == 0 {
            return Err(GenerateError::EdgesWithoutVertices { edges: self.edges });
        }
        let capacity = distinct_edges(self.vertices, self.directed, self.loops);
        let fits = if self.multi_edges {
            self.edges == 0 || capacity > 0
        } else {
            self.edges <= capacity
        };
        if !fits {
            return Err(GenerateError::TooManyEdges {
                requested: self.edges,
                capacity,
            });
        }
        Ok(RandomGraph {
            config: self,
            capacity,
        })
    }
}

/// A validated random graph shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomGraph {
    config: RandomGraphBuilder,
    capacity: usize,
}

impl RandomGraph {
    /// Vertex count of every generated graph.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.config.vertices
    }

    /// Edge count of every generated graph.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.config.edges
    }

    /// Returns `true` when generated graphs are directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Number of distinct admissible endpoint pairs.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Draws a graph with exactly the configured vertex and edge counts.
    ///
    /// Labels are the identity and edges appear in the order they were drawn.
    ///
    /// # Errors
    /// Returns [`GenerateError::Graph`] if the graph rejects a mutation, for
    /// example when the vertex count exceeds [`crate::MAX_VERTICES`].
    #[instrument(
        level = "debug",
        skip(self, rng),
        fields(vertices = self.config.vertices, edges = self.config.edges)
    )]
    pub fn generate(&self, rng: &mut impl RandomSource) -> Result<LabeledGraph, GenerateError> {
        let mut graph = LabeledGraph::new(self.config.directed);
        graph.extend(self.config.vertices)?;

        let pairs = if self.config.multi_edges {
            (0..self.config.edges)
                .map(|_| self.draw_pair(rng))
                .collect()
        } else if self.config.edges > self.capacity / 2 {
            self.sample_enumerated(rng)
        } else {
            self.sample_rejecting(rng)
        };
        for (u, v) in pairs {
            graph.add_edge(u, v, Weight::Empty)?;
        }
        debug!(components = graph.component_count(), "random graph generated");
        Ok(graph)
    }

    fn draw_pair(&self, rng: &mut impl RandomSource) -> (usize, usize) {
        loop {
            let u = rng.uniform(self.config.vertices);
            let v = rng.uniform(self.config.vertices);
            if self.config.loops || u != v {
                return (u, v);
            }
        }
    }

    /// Distinct pairs by redrawing duplicates; used while at most half the
    /// admissible pairs are requested.
    fn sample_rejecting(&self, rng: &mut impl RandomSource) -> Vec<(usize, usize)> {
        let mut seen = HashSet::with_capacity(self.config.edges);
        let mut pairs = Vec::with_capacity(self.config.edges);
        while pairs.len() < self.config.edges {
            let (u, v) = self.draw_pair(rng);
            let key = if self.config.directed {
                (u, v)
            } else {
                (u.min(v), u.max(v))
            };
            if seen.insert(key) {
                pairs.push((u, v));
            }
        }
        pairs
    }

    /// Distinct pairs by taking a random prefix of every admissible pair.
    fn sample_enumerated(&self, rng: &mut impl RandomSource) -> Vec<(usize, usize)> {
        let n = self.config.vertices;
        let mut all = Vec::with_capacity(self.capacity);
        for u in 0..n {
            let first = if self.config.directed { 0 } else { u };
            for v in first..n {
                if self.config.loops || u != v {
                    all.push((u, v));
                }
            }
        }
        rng.permutation(all.len())
            .into_iter()
            .take(self.config.edges)
            .map(|position| {
                let (u, v) = all[position];
                if !self.config.directed && rng.coin_flip() {
                    (v, u)
                } else {
                    (u, v)
                }
            })
            .collect()
    }
}

/// Number of distinct endpoint pairs on `n` vertices, saturating at
/// `usize::MAX`.
fn distinct_edges(n: usize, directed: bool, loops: bool) -> usize {
    let pairs = if directed {
        n.saturating_mul(n.saturating_sub(1))
    } else {
        n.saturating_mul(n.saturating_sub(1)) / 2
    };
    if loops { pairs.saturating_add(n) } else { pairs }
}
