//! Union-find (disjoint set union) over a fixed vertex universe.
//!
//! Kruskal's algorithm asks one question per edge: are both endpoints already
//! in the same component? [`DisjointSet`] answers it with path compression and
//! union by rank, and a failed [`DisjointSet::union`] is the cycle signal used
//! by the engine.

/// Disjoint-set forest with path compression and union by rank.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(3);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert!(sets.connected(0, 1));
/// assert_eq!(sets.component_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut sets = Self::default();
        sets.reset(len);
        sets
    }

    /// Re-initialises the structure to `len` singleton sets, discarding all
    /// previous unions while keeping the allocations.
    pub fn reset(&mut self, len: usize) {
        self.parent.clear();
        self.parent.extend(0..len);
        self.rank.clear();
        self.rank.resize(len, 0);
        self.components = len;
    }

    /// Number of elements tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set, pointing every node on the
    /// visited path directly at it.
    ///
    /// # Panics
    ///
    /// Panics when `node >= self.len()`; out-of-range indices are a caller
    /// bug, not a recoverable condition.
    pub fn find(&mut self, mut node: usize) -> usize {
        assert!(
            node < self.parent.len(),
            "disjoint-set index {node} out of range for {} elements",
            self.parent.len()
        );

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// representative. Otherwise the lower-rank root is attached beneath the
    /// higher-rank one; on equal ranks `left`'s root survives and its rank
    /// grows by one.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range (see [`Self::find`]).
    pub fn union(&mut self, left: usize, right: usize) -> bool {
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

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range (see [`Self::find`]).
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}
