//! Insertion-ordered edge storage and per-vertex adjacency.
//!
//! An edge is identified by its position in [`EdgeStore::edges`]. Adjacency
//! lists hold these edge ids rather than endpoints, so swapping endpoints or
//! reordering the store only requires rewriting ids.

use crate::error::{GraphError, Result};

/// Position of an edge within the edge store.
pub type EdgeId = usize;

/// Stored endpoints of an edge, in internal indices.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Edge {
    pub(crate) u: usize,
    pub(crate) v: usize,
}

impl Edge {
    pub(crate) const fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    pub(crate) const fn is_loop(self) -> bool {
        self.u == self.v
    }

    /// Orients the edge so the smaller endpoint comes first.
    pub(crate) const fn ordered(self) -> Self {
        if self.u > self.v {
            Self::new(self.v, self.u)
        } else {
            self
        }
    }

    pub(crate) const fn flipped(self) -> Self {
        Self::new(self.v, self.u)
    }

    /// Endpoint opposite to `vertex`; a self-loop yields `vertex` itself.
    ///
    /// `vertex` must be an endpoint of the edge.
    pub(crate) const fn opposite(self, vertex: usize) -> usize {
        if self.u == vertex { self.v } else { self.u }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct EdgeStore {
    directed: bool,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl EdgeStore {
    pub(crate) const fn new(directed: bool) -> Self {
        Self {
            directed,
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    pub(crate) const fn is_directed(&self) -> bool {
        self.directed
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id).copied()
    }

    pub(crate) fn incident(&self, vertex: usize) -> &[EdgeId] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn grow(&mut self, size: usize) {
        if size > self.adjacency.len() {
            self.adjacency.resize_with(size, Vec::new);
        }
    }

    /// Appends `(u, v)` and records it in the adjacency of its endpoints.
    ///
    /// Both endpoints must already be covered by [`EdgeStore::grow`].
    pub(crate) fn push(&mut self, u: usize, v: usize) -> Result<EdgeId> {
        let bound = self.adjacency.len();
        if u >= bound || v >= bound {
            return Err(GraphError::invariant(
                "add_edge_unsafe",
                format!("endpoints ({u}, {v}) exceed vertex count {bound}"),
            ));
        }
        let id = self.edges.len();
        self.edges.push(Edge::new(u, v));
        self.adjacency[u].push(id);
        if !self.directed && u != v {
            self.adjacency[v].push(id);
        }
        Ok(id)
    }

    /// Internal indices adjacent to `vertex`, in adjacency order.
    ///
    /// Every listed id names an edge incident to `vertex`, as verified by
    /// [`EdgeStore::check`].
    pub(crate) fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident(vertex)
            .iter()
            .map(move |&id| self.edges[id].opposite(vertex))
    }

    /// Applies `map` to every stored edge, keeping ids and adjacency intact.
    ///
    /// `map` must return the same endpoint set for undirected edges.
    pub(crate) fn reorient(&mut self, mut map: impl FnMut(Edge) -> Edge) {
        for edge in &mut self.edges {
            *edge = map(*edge);
        }
    }

    /// Moves edge `order[i]` to position `i` and renumbers adjacency to match.
    ///
    /// `order` must be validated as a permutation of `0..m` and paired with
    /// its inverse `new_by_old` by the caller.
    pub(crate) fn permute(&mut self, order: &[EdgeId], new_by_old: &[EdgeId]) {
        self.edges = order.iter().map(|&old| self.edges[old]).collect();
        for list in &mut self.adjacency {
            for id in list.iter_mut() {
                *id = new_by_old[*id];
            }
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        let edge_count = self.edges.len();
        let mut entries = 0_usize;
        for (vertex, list) in self.adjacency.iter().enumerate() {
            for &id in list {
                let Some(edge) = self.edges.get(id) else {
                    return Err(GraphError::invariant(
                        "EdgeStore::check",
                        format!("vertex {vertex} references unknown edge {id} (m = {edge_count})"),
                    ));
                };
                let owns = edge.u == vertex || (!self.directed && edge.v == vertex);
                if !owns {
                    return Err(GraphError::invariant(
                        "EdgeStore::check",
                        format!("edge {id} is listed at vertex {vertex} but is not incident"),
                    ));
                }
            }
            entries += list.len();
        }
        let expected: usize = self
            .edges
            .iter()
            .map(|edge| if self.directed || edge.is_loop() { 1 } else { 2 })
            .sum();
        if entries != expected {
            return Err(GraphError::invariant(
                "EdgeStore::check",
                format!("adjacency holds {entries} entries, expected {expected}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(directed: bool, size: usize, edges: &[(usize, usize)]) -> EdgeStore {
        let mut store = EdgeStore::new(directed);
        store.grow(size);
        for &(u, v) in edges {
            store.push(u, v).expect("endpoints in range");
        }
        store
    }

    #[test]
    fn undirected_edges_are_listed_at_both_ends() {
        let store = store(false, 3, &[(0, 1), (1, 1), (2, 0)]);
        assert_eq!(store.incident(0), &[0, 2]);
        assert_eq!(store.incident(1), &[0, 1]);
        assert_eq!(store.neighbours(1).collect::<Vec<_>>(), vec![0, 1]);
        store.check().expect("store must be consistent");
    }

    #[test]
    fn directed_edges_are_listed_at_the_source() {
        let store = store(true, 3, &[(0, 1), (2, 0)]);
        assert_eq!(store.incident(0), &[0]);
        assert!(store.incident(1).is_empty());
        assert_eq!(store.neighbours(2).collect::<Vec<_>>(), vec![0]);
        store.check().expect("store must be consistent");
    }

    #[test]
    fn opposite_handles_both_ends_and_loops() {
        assert_eq!(Edge::new(3, 5).opposite(3), 5);
        assert_eq!(Edge::new(3, 5).opposite(5), 3);
        assert_eq!(Edge::new(4, 4).opposite(4), 4);
    }

    #[test]
    fn push_rejects_endpoints_past_the_vertex_count() {
        let mut store = EdgeStore::new(false);
        store.grow(2);
        let err = store.push(0, 2).expect_err("vertex 2 was never added");
        assert!(err.is_fatal());
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn permute_renumbers_adjacency() {
        let mut store = store(false, 3, &[(0, 1), (1, 2), (2, 0)]);
        store.permute(&[2, 0, 1], &[1, 2, 0]);
        assert_eq!(store.edges(), &[Edge::new(2, 0), Edge::new(0, 1), Edge::new(1, 2)]);
        assert_eq!(store.incident(0), &[1, 0]);
        store.check().expect("store must be consistent");
    }
}
