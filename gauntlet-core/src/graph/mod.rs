//! Labeled graph data model.
//!
//! [`LabeledGraph`] stores topology and weights by internal index and exposes
//! everything in label space. The label permutation can be redrawn in `O(n)`
//! without touching adjacency or weight storage, and the edge store can be
//! reordered as one step that renumbers adjacency and edge weights with it.

mod compare;
mod edges;
mod labels;
mod union_find;

use tracing::{debug, instrument, trace};

use crate::{
    error::{GraphError, Result},
    random::RandomSource,
    weight::{Weight, WeightArray},
};

use self::{
    edges::{Edge, EdgeStore},
    labels::{Labelling, invert},
    union_find::DisjointSet,
};

pub use self::edges::EdgeId;

/// Largest vertex count a graph may grow to.
///
/// `extend` and `add_edge` reject larger sizes before touching any storage.
pub const MAX_VERTICES: usize = 1 << 24;

/// Graph whose vertices carry permutable public labels.
///
/// Vertices are addressed by *label* (`0..n`) in every public method. Edges
/// are addressed by *edge id*, their position in insertion (or last
/// reordering) order.
///
/// # Examples
/// ```
/// use gauntlet_core::{LabeledGraph, Weight};
///
/// let mut graph = LabeledGraph::undirected();
/// graph.add_edge(0, 1, Weight::Empty)?;
/// graph.add_edge(1, 2, Weight::Int(4))?;
/// assert_eq!(graph.n(), 3);
/// assert_eq!(graph.m(), 2);
/// assert_eq!(graph.neighbours(1)?, vec![0, 2]);
/// assert_eq!(graph.edge_weight(1)?, &Weight::Int(4));
/// # Ok::<(), gauntlet_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LabeledGraph {
    store: EdgeStore,
    labels: Labelling,
    components: DisjointSet,
    vertex_weights: WeightArray,
    edge_weights: WeightArray,
}

impl LabeledGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new(directed: bool) -> Self {
        Self {
            store: EdgeStore::new(directed),
            labels: Labelling::new(),
            components: DisjointSet::new(),
            vertex_weights: WeightArray::new(),
            edge_weights: WeightArray::new(),
        }
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub const fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub const fn directed() -> Self {
        Self::new(true)
    }

    /// Returns `true` when edges are directed from their first endpoint.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.store.is_directed()
    }

    /// Number of vertices.
    #[must_use]
    pub fn n(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn m(&self) -> usize {
        self.store.edge_count()
    }

    /// Grows the graph to `size` vertices.
    ///
    /// New vertices get identity labels (label `i` is internal index `i`), are
    /// isolated, and have no weight.
    ///
    /// # Errors
    /// Returns [`GraphError::PreconditionViolation`] when `size` is smaller
    /// than the current vertex count; graphs never shrink.
    /// Returns [`GraphError::OutOfRange`] when `size` exceeds [`MAX_VERTICES`].
    pub fn extend(&mut self, size: usize) -> Result<()> {
        if size < self.n() {
            return Err(GraphError::PreconditionViolation {
                operation: "extend",
                reason: "vertex count can only grow",
            });
        }
        self.grow(size, "extend")
    }

    fn grow(&mut self, size: usize, operation: &'static str) -> Result<()> {
        if size > MAX_VERTICES {
            return Err(GraphError::OutOfRange {
                operation,
                value: size,
                bound: MAX_VERTICES,
            });
        }
        if size <= self.n() {
            return Ok(());
        }
        self.labels.grow(size)?;
        self.store.grow(size);
        self.components.extend(size);
        trace!(vertices = size, "graph extended");
        Ok(())
    }

    /// Adds an edge between labels `u` and `v` and returns its id.
    ///
    /// The graph first grows to cover both labels. A non-empty `weight` is
    /// stored for the new edge.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `max(u, v) + 1` exceeds
    /// [`MAX_VERTICES`] and [`GraphError::InvariantViolation`] if internal
    /// storage is inconsistent.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<EdgeId> {
        let largest = u.max(v);
        if largest >= MAX_VERTICES {
            return Err(GraphError::OutOfRange {
                operation: "add_edge",
                value: largest,
                bound: MAX_VERTICES,
            });
        }
        self.grow(largest + 1, "add_edge")?;

        let u_index = self.labels.to_internal(u, "add_edge")?;
        let v_index = self.labels.to_internal(v, "add_edge")?;

        let id = self.add_edge_unsafe(u_index, v_index)?;
        self.components.union(u_index, v_index);
        if !weight.is_empty() {
            self.edge_weights.set(id, weight);
        }
        Ok(id)
    }

    /// Appends an edge between two internal indices without growing the graph.
    pub(crate) fn add_edge_unsafe(&mut self, u: usize, v: usize) -> Result<EdgeId> {
        self.store.push(u, v)
    }

    /// Labels of the neighbours of `label`, in adjacency order.
    ///
    /// For directed graphs only out-neighbours are listed. A self-loop lists
    /// the vertex itself once.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `label >= n`.
    pub fn neighbours(&self, label: usize) -> Result<Vec<usize>> {
        let index = self.labels.to_internal(label, "neighbours")?;
        Ok(self.neighbour_labels(index).collect())
    }

    fn neighbour_labels(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.store
            .neighbours(index)
            .map(|other| self.labels.label(other))
    }

    /// Every edge as a pair of labels, in edge-id order.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.store
            .edges()
            .iter()
            .map(|edge| self.label_pair(*edge))
            .collect()
    }

    /// Edge `id` as a pair of labels.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `id >= m`.
    pub fn edge(&self, id: EdgeId) -> Result<(usize, usize)> {
        self.store
            .edge(id)
            .map(|edge| self.label_pair(edge))
            .ok_or(GraphError::OutOfRange {
                operation: "edge",
                value: id,
                bound: self.m(),
            })
    }

    fn label_pair(&self, edge: Edge) -> (usize, usize) {
        (self.labels.label(edge.u), self.labels.label(edge.v))
    }

    /// Internal storage index of `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `label >= n`.
    pub fn to_internal(&self, label: usize) -> Result<usize> {
        self.labels.to_internal(label, "to_internal")
    }

    /// Label of internal storage index `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `index >= n`.
    pub fn to_label(&self, index: usize) -> Result<usize> {
        self.labels.to_label(index, "to_label")
    }

    /// Returns `true` when every label equals its internal index.
    #[must_use]
    pub fn has_identity_labels(&self) -> bool {
        self.labels.is_identity()
    }

    /// Assigns a weight to vertex `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `label >= n`.
    pub fn set_vertex_weight(&mut self, label: usize, weight: Weight) -> Result<()> {
        let index = self.labels.to_internal(label, "set_vertex_weight")?;
        self.vertex_weights.set(index, weight);
        Ok(())
    }

    /// Replaces all vertex weights; `weights[label]` belongs to `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::ArgumentSizeMismatch`] unless `weights` has
    /// exactly `n` entries.
    pub fn set_vertex_weights(&mut self, weights: &WeightArray) -> Result<()> {
        if weights.len() != self.n() {
            return Err(GraphError::ArgumentSizeMismatch {
                operation: "set_vertex_weights",
                expected: self.n(),
                got: weights.len(),
            });
        }
        let by_index: Vec<usize> = (0..self.n()).map(|index| self.labels.label(index)).collect();
        self.vertex_weights = weights.reindexed(&by_index);
        Ok(())
    }

    /// Assigns a weight to edge `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `id >= m`.
    pub fn set_edge_weight(&mut self, id: EdgeId, weight: Weight) -> Result<()> {
        if id >= self.m() {
            return Err(GraphError::OutOfRange {
                operation: "set_edge_weight",
                value: id,
                bound: self.m(),
            });
        }
        self.edge_weights.set(id, weight);
        Ok(())
    }

    /// Replaces all edge weights; `weights[id]` belongs to edge `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::ArgumentSizeMismatch`] unless `weights` has
    /// exactly `m` entries.
    pub fn set_edge_weights(&mut self, weights: WeightArray) -> Result<()> {
        if weights.len() != self.m() {
            return Err(GraphError::ArgumentSizeMismatch {
                operation: "set_edge_weights",
                expected: self.m(),
                got: weights.len(),
            });
        }
        self.edge_weights = weights;
        Ok(())
    }

    /// Weight of vertex `label`; [`Weight::Empty`] when unset.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `label >= n`.
    pub fn vertex_weight(&self, label: usize) -> Result<&Weight> {
        let index = self.labels.to_internal(label, "vertex_weight")?;
        Ok(self.vertex_weights.get(index))
    }

    /// Weight of edge `id`; [`Weight::Empty`] when unset.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `id >= m`.
    pub fn edge_weight(&self, id: EdgeId) -> Result<&Weight> {
        if id >= self.m() {
            return Err(GraphError::OutOfRange {
                operation: "edge_weight",
                value: id,
                bound: self.m(),
            });
        }
        Ok(self.edge_weights.get(id))
    }

    /// Returns `true` if any vertex has a weight.
    #[must_use]
    pub fn has_vertex_weights(&self) -> bool {
        self.vertex_weights.has_non_empty()
    }

    /// Returns `true` if any edge has a weight.
    #[must_use]
    pub fn has_edge_weights(&self) -> bool {
        self.edge_weights.has_non_empty()
    }

    /// Builds a print-ready copy of `weights` with `required` slots.
    ///
    /// Every empty slot is filled with the default value of the type of the
    /// first set entry. `weights` itself is not modified.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyWeightArray`] when no entry is set.
    ///
    /// # Examples
    /// ```
    /// use gauntlet_core::{LabeledGraph, Weight, WeightArray};
    ///
    /// let mut weights = WeightArray::new();
    /// weights.set(1, Weight::Int(9));
    /// let ready = LabeledGraph::prepare_weight_array(&weights, 3)?;
    /// assert_eq!(ready, WeightArray::from(vec![Weight::Int(0), Weight::Int(9), Weight::Int(0)]));
    /// # Ok::<(), gauntlet_core::GraphError>(())
    /// ```
    pub fn prepare_weight_array(weights: &WeightArray, required: usize) -> Result<WeightArray> {
        let weight_type = weights.any_type().ok_or(GraphError::EmptyWeightArray)?;
        let mut prepared = weights.clone();
        prepared.extend(required);
        for slot in prepared.iter_mut().filter(|slot| slot.is_empty()) {
            *slot = weight_type.default_weight();
        }
        Ok(prepared)
    }

    /// Print-ready vertex weights in label order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyWeightArray`] when no vertex weight is set.
    pub fn vertex_weights_by_label(&self) -> Result<WeightArray> {
        let prepared = Self::prepare_weight_array(&self.vertex_weights, self.n())?;
        let by_label: Vec<usize> = (0..self.n())
            .map(|label| self.labels.to_internal(label, "vertex_weights_by_label"))
            .collect::<Result<_>>()?;
        Ok(prepared.reindexed(&by_label))
    }

    /// Print-ready edge weights in edge-id order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyWeightArray`] when no edge weight is set.
    pub fn edge_weights_by_id(&self) -> Result<WeightArray> {
        Self::prepare_weight_array(&self.edge_weights, self.m())
    }

    /// Returns `true` if labels `a` and `b` are joined by a path, ignoring
    /// edge direction.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when either label is `>= n`.
    pub fn same_component(&self, a: usize, b: usize) -> Result<bool> {
        let a_index = self.labels.to_internal(a, "same_component")?;
        let b_index = self.labels.to_internal(b, "same_component")?;
        Ok(self.components.same_set(a_index, b_index))
    }

    /// Number of connected components, ignoring edge direction.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components.components()
    }

    /// Returns `true` when the graph has at most one component.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.components.components() <= 1
    }

    /// Reorders the edge store so that edge `order[i]` becomes edge `i`.
    ///
    /// Adjacency lists and edge weights are renumbered in the same step.
    ///
    /// # Errors
    /// Returns [`GraphError::ArgumentSizeMismatch`] unless `order` has `m`
    /// entries and [`GraphError::OutOfRange`] unless it is a permutation of
    /// `0..m`. The graph is unchanged on error.
    #[instrument(level = "trace", skip(self, order), fields(edges = self.m()))]
    pub fn permute_edges(&mut self, order: &[EdgeId]) -> Result<()> {
        if order.len() != self.m() {
            return Err(GraphError::ArgumentSizeMismatch {
                operation: "permute_edges",
                expected: self.m(),
                got: order.len(),
            });
        }
        let new_by_old = invert(order).ok_or_else(|| GraphError::OutOfRange {
            operation: "permute_edges",
            value: first_misplaced(order),
            bound: self.m(),
        })?;

        self.store.permute(order, &new_by_old);
        if self.edge_weights.has_non_empty() {
            self.edge_weights = self.edge_weights.reindexed(order);
        }
        Ok(())
    }

    /// Redraws the label permutation and randomises edge order.
    ///
    /// For undirected graphs each edge also swaps its stored endpoints with
    /// probability one half. Topology, weights and connectivity are
    /// preserved; only labels and edge ids change.
    ///
    /// # Errors
    /// Returns [`GraphError::InvariantViolation`] if `rng` produces something
    /// other than a permutation.
    #[instrument(level = "debug", skip(self, rng), fields(vertices = self.n(), edges = self.m()))]
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        let order = rng.permutation(self.m());
        if invert(&order).is_none() {
            return Err(GraphError::invariant(
                "shuffle",
                "random source returned a non-permutation",
            ));
        }
        self.labels.shuffle(rng)?;
        if !self.is_directed() {
            self.store.reorient(|edge| {
                if rng.coin_flip() {
                    edge.flipped()
                } else {
                    edge
                }
            });
        }
        self.permute_edges(&order)?;
        debug!("graph shuffled");
        Ok(())
    }

    /// Sorts edges by their endpoints.
    ///
    /// Undirected edges are first stored smaller endpoint first. The sort is
    /// stable, so parallel edges keep their relative order, and calling this
    /// twice in a row changes nothing the second time.
    ///
    /// # Errors
    /// Returns [`GraphError::PreconditionViolation`] once the graph has been
    /// relabelled by [`LabeledGraph::shuffle`].
    ///
    /// # Examples
    /// ```
    /// use gauntlet_core::{LabeledGraph, Weight};
    ///
    /// let mut graph = LabeledGraph::undirected();
    /// for (u, v) in [(2, 1), (1, 0)] {
    ///     graph.add_edge(u, v, Weight::Empty)?;
    /// }
    /// graph.normalize_edges()?;
    /// assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    /// # Ok::<(), gauntlet_core::GraphError>(())
    /// ```
    #[instrument(level = "debug", skip(self), err, fields(edges = self.m()))]
    pub fn normalize_edges(&mut self) -> Result<()> {
        if !self.labels.is_identity() {
            return Err(GraphError::PreconditionViolation {
                operation: "normalize_edges",
                reason: "edges can only be normalized on a graph that was never shuffled",
            });
        }
        if !self.is_directed() {
            self.store.reorient(Edge::ordered);
        }
        let edges = self.store.edges();
        let mut order: Vec<EdgeId> = (0..edges.len()).collect();
        order.sort_by_key(|&id| edges[id]);
        self.permute_edges(&order)
    }

    /// Verifies the structural invariants linking labels, adjacency,
    /// connectivity and weights.
    ///
    /// # Errors
    /// Returns [`GraphError::InvariantViolation`] describing the first
    /// inconsistency found.
    pub fn check_invariants(&self) -> Result<()> {
        self.labels.check()?;
        self.store.check()?;
        let n = self.n();
        if self.store.vertex_count() != n || self.components.len() != n {
            return Err(GraphError::invariant(
                "check_invariants",
                format!(
                    "parallel structures disagree: labels {n}, adjacency {}, union-find {}",
                    self.store.vertex_count(),
                    self.components.len()
                ),
            ));
        }
        if self.vertex_weights.len() > n || self.edge_weights.len() > self.m() {
            return Err(GraphError::invariant(
                "check_invariants",
                "weight array longer than its key space",
            ));
        }
        for edge in self.store.edges() {
            if !self.components.same_set(edge.u, edge.v) {
                return Err(GraphError::invariant(
                    "check_invariants",
                    format!("edge ({}, {}) spans two components", edge.u, edge.v),
                ));
            }
        }
        Ok(())
    }
}

impl Default for LabeledGraph {
    fn default() -> Self {
        Self::undirected()
    }
}

/// First value of a non-permutation that is out of range or repeated.
fn first_misplaced(order: &[usize]) -> usize {
    let mut seen = vec![false; order.len()];
    for &value in order {
        match seen.get_mut(value) {
            Some(slot) if !*slot => *slot = true,
            _ => return value,
        }
    }
    order.len()
}

#[cfg(test)]
mod property;
