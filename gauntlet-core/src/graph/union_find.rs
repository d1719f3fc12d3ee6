//! Union-find (disjoint set union) tracking the connectivity of a graph.
//!
//! The structure mirrors the vertex count of the owning graph: it is grown by
//! [`DisjointSet::extend`] whenever vertices are added and updated with
//! [`DisjointSet::union`] on every edge insertion. It is never rebuilt.

#[derive(Clone, Debug, Default)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(crate) const fn new() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
            components: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    pub(crate) const fn components(&self) -> usize {
        self.components
    }

    /// Appends singleton sets until `size` elements are tracked.
    pub(crate) fn extend(&mut self, size: usize) {
        let old = self.parent.len();
        if size <= old {
            return;
        }
        self.parent.extend(old..size);
        self.rank.resize(size, 0);
        self.components += size - old;
    }

    /// Finds the representative of `node`, compressing the walked path.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let root = self.root(node);
        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }
        root
    }

    /// Finds the representative of `node` without modifying the forest.
    ///
    /// Union by rank keeps the walk logarithmic.
    pub(crate) fn root(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Merges the sets of `left` and `right`; returns `true` if they differed.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    pub(crate) fn same_set(&self, left: usize, right: usize) -> bool {
        self.root(left) == self.root(right)
    }
}
