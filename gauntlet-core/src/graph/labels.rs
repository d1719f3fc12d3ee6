//! Public label to internal index indirection.
//!
//! [`Labelling`] keeps two permutations of `0..n` that are inverse to each
//! other. Relabelling rewrites only these two vectors, so adjacency and weight
//! storage keyed by internal index never move.

use crate::{
    error::{GraphError, Result},
    random::RandomSource,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Labelling {
    index_of_label: Vec<usize>,
    label_of_index: Vec<usize>,
}

impl Labelling {
    pub(crate) const fn new() -> Self {
        Self {
            index_of_label: Vec::new(),
            label_of_index: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.index_of_label.len()
    }

    pub(crate) fn to_internal(&self, label: usize, operation: &'static str) -> Result<usize> {
        self.index_of_label
            .get(label)
            .copied()
            .ok_or(GraphError::OutOfRange {
                operation,
                value: label,
                bound: self.len(),
            })
    }

    pub(crate) fn to_label(&self, index: usize, operation: &'static str) -> Result<usize> {
        self.label_of_index
            .get(index)
            .copied()
            .ok_or(GraphError::OutOfRange {
                operation,
                value: index,
                bound: self.len(),
            })
    }

    /// Label of an index already known to be in range.
    ///
    /// Only call with indices read from the graph's own storage.
    pub(crate) fn label(&self, index: usize) -> usize {
        self.label_of_index[index]
    }

    /// Internal index of a label already known to be in range.
    pub(crate) fn index(&self, label: usize) -> usize {
        self.index_of_label[label]
    }

    /// Appends identity-mapped entries `[len, size)`.
    pub(crate) fn grow(&mut self, size: usize) -> Result<()> {
        let old = self.len();
        if size < old {
            return Err(GraphError::invariant(
                "Labelling::grow",
                format!("cannot shrink labelling from {old} to {size}"),
            ));
        }
        self.index_of_label.extend(old..size);
        self.label_of_index.extend(old..size);
        Ok(())
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.index_of_label
            .iter()
            .enumerate()
            .all(|(label, &index)| label == index)
    }

    /// Draws a fresh label to index permutation and recomputes its inverse.
    pub(crate) fn shuffle(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        let permutation = rng.permutation(self.len());
        self.install(permutation)
    }

    /// Replaces the label to index map with `index_of_label`.
    fn install(&mut self, index_of_label: Vec<usize>) -> Result<()> {
        let inverse = invert(&index_of_label).ok_or_else(|| {
            GraphError::invariant("Labelling::install", "random source returned a non-permutation")
        })?;
        self.index_of_label = index_of_label;
        self.label_of_index = inverse;
        Ok(())
    }

    pub(crate) fn check(&self) -> Result<()> {
        let consistent = self.label_of_index.len() == self.index_of_label.len()
            && self
                .index_of_label
                .iter()
                .enumerate()
                .all(|(label, &index)| self.label_of_index.get(index) == Some(&label));
        if consistent {
            Ok(())
        } else {
            Err(GraphError::invariant(
                "Labelling::check",
                "label and index maps are not mutual inverses",
            ))
        }
    }
}

/// Inverts a permutation of `0..order.len()`, or returns `None` if `order`
/// is not one.
pub(crate) fn invert(order: &[usize]) -> Option<Vec<usize>> {
    let mut inverse = vec![usize::MAX; order.len()];
    for (position, &value) in order.iter().enumerate() {
        let slot = inverse.get_mut(value)?;
        if *slot != usize::MAX {
            return None;
        }
        *slot = position;
    }
    Some(inverse)
}
