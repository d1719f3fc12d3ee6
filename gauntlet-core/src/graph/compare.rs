//! Total order over labeled graphs.
//!
//! Graphs are ordered by vertex count, then vertex by vertex in label order by
//! their sorted neighbour labels. The order looks at labels, so two
//! isomorphic graphs with different labellings usually compare unequal; it is
//! not an isomorphism test. Weights and directedness are ignored.

use std::cmp::Ordering;

use super::LabeledGraph;

impl LabeledGraph {
    /// Compares two graphs under their current labellings.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use gauntlet_core::{LabeledGraph, Weight};
    ///
    /// let mut path = LabeledGraph::undirected();
    /// path.add_edge(0, 1, Weight::Empty)?;
    /// path.add_edge(1, 2, Weight::Empty)?;
    ///
    /// // Same shape, centre vertex relabelled from 1 to 0.
    /// let mut relabelled = LabeledGraph::undirected();
    /// relabelled.add_edge(1, 0, Weight::Empty)?;
    /// relabelled.add_edge(0, 2, Weight::Empty)?;
    ///
    /// assert_ne!(path.compare_to(&relabelled), Ordering::Equal);
    /// # Ok::<(), gauntlet_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.n().cmp(&other.n()).then_with(|| {
            (0..self.n())
                .map(|label| self.sorted_neighbours(label).cmp(&other.sorted_neighbours(label)))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    fn sorted_neighbours(&self, label: usize) -> Vec<usize> {
        let mut neighbours: Vec<usize> = self.neighbour_labels(self.labels.index(label)).collect();
        neighbours.sort_unstable();
        neighbours
    }
}

impl PartialEq for LabeledGraph {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other).is_eq()
    }
}

impl Eq for LabeledGraph {}

impl PartialOrd for LabeledGraph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LabeledGraph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}
