//! Weighted quick-union with path halving.

use seep_core::PercolationError;

/// A weighted disjoint-set forest over elements `0..n`.
///
/// `parent[i] == i` marks a root. `size[r]` is only meaningful when `r`
/// is a root and counts the elements whose parent chain ends at `r`.
///
/// # Examples
///
/// ```
/// use seep_forest::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(5).unwrap();
/// forest.union(0, 1).unwrap();
/// forest.union(1, 2).unwrap();
/// assert!(forest.connected(0, 2).unwrap());
/// assert!(!forest.connected(0, 3).unwrap());
/// assert_eq!(forest.count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSetForest {
    /// Create `n` singleton components.
    ///
    /// Returns `Err(PercolationError::InvalidArgument)` if `n == 0`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "element_count",
                value: n,
            });
        }
        Ok(Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        })
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always returns `false`; construction rejects empty forests.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, p: usize) -> Result<(), PercolationError> {
        if p >= self.parent.len() {
            return Err(PercolationError::element_out_of_range(
                p,
                self.parent.len(),
            ));
        }
        Ok(())
    }

    /// Root of the component containing `p`.
    ///
    /// Halves the path on the way up: each visited node is pointed at
    /// its grandparent.
    pub fn find(&mut self, p: usize) -> Result<usize, PercolationError> {
        self.validate(p)?;
        Ok(self.find_root(p))
    }

    fn find_root(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Whether `p` and `q` are in the same component.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, PercolationError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components containing `p` and `q`.
    ///
    /// No-op if they are already connected.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), PercolationError> {
        self.union_roots(p, q).map(|_| ())
    }

    /// Merge the components containing `p` and `q`, returning the root of
    /// the merged component, or `None` if they were already connected.
    ///
    /// The root of the smaller tree goes under the root of the larger
    /// one. On a size tie, `q`'s root goes under `p`'s root.
    pub fn union_roots(&mut self, p: usize, q: usize) -> Result<Option<usize>, PercolationError> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(None);
        }

        let (child, root) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        Ok(Some(root))
    }

    /// Number of elements in the component containing `p`.
    pub fn component_size(&mut self, p: usize) -> Result<usize, PercolationError> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }
}
