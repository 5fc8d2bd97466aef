/// Original population positions still eligible for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSet {
    positions: Vec<usize>,
}

impl IndexSet {
    /// `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            positions: (0..n).collect(),
        }
    }

    /// Same no-op policy as [`WeightVector::remove_at`](crate::WeightVector::remove_at).
    pub fn remove_at(mut self, position: usize) -> Self {
        if position < self.positions.len() {
            self.positions.remove(position);
        }
        self
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.positions.get(position).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }
}

impl From<Vec<usize>> for IndexSet {
    fn from(positions: Vec<usize>) -> Self {
        Self { positions }
    }
}
