/// Union-find over the fixed universe `0..len`, with union by rank and path
/// compression. Amortized O(a(n)) per operation, where `a` is the inverse
/// Ackermann function.
///
/// Indices outside `0..len` panic.
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parents: Vec<usize>,
    ranks: Vec<usize>,
    num_sets: usize,
}

impl DisjointSetUnion {
    /// O(n). Every element starts as its own singleton set.
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            ranks: vec![1; size],
            num_sets: size,
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// O(1). Number of disjoint sets currently in the partition.
    #[inline]
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// O(1)
    #[inline]
    pub fn is_root(&self, i: usize) -> bool {
        self.parents[i] == i
    }

    /// Representative of the set containing `i`, without compressing the
    /// path. O(height); use `find_mut` where a `&mut self` is available.
    pub fn find(&self, mut i: usize) -> usize {
        while self.parents[i] != i {
            i = self.parents[i];
        }
        i
    }

    /// Representative of the set containing `i`. Re-parents every node on
    /// the walked path directly to the root, so repeated lookups flatten the
    /// tree. Amortized O(a(n)). Returns the same root as `find`.
    pub fn find_mut(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        while i != root {
            let parent = self.parents[i];
            self.parents[i] = root;
            i = parent;
        }

        root
    }

    /// Merges the sets containing `i` and `j`. Returns `false` when they
    /// were already the same set. Amortized O(a(n)).
    pub fn union(&mut self, mut i: usize, mut j: usize) -> bool {
        i = self.find_mut(i);
        j = self.find_mut(j);

        if i == j {
            return false;
        }

        self.num_sets -= 1;

        // The lower-ranked root goes under the higher-ranked one. Rank
        // grows, by exactly 1, only when two equal-rank roots meet.
        if self.ranks[i] < self.ranks[j] {
            self.parents[i] = j;
        } else {
            self.parents[j] = i;
            if self.ranks[i] == self.ranks[j] {
                self.ranks[i] += 1;
            }
        }

        true
    }

    /// Whether `i` and `j` are in the same set. Compresses both paths as a
    /// side effect. Amortized O(a(n)).
    #[inline]
    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find_mut(i) == self.find_mut(j)
    }

    /// Rank of a root, an upper bound on the height of its tree. `None` when
    /// `root` is not a root.
    pub fn rank(&self, root: usize) -> Option<usize> {
        if self.is_root(root) {
            Some(self.ranks[root])
        } else {
            None
        }
    }
}
