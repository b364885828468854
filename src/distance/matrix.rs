//! Dense travel-time matrix.

/// A dense n×n matrix of travel times in seconds, stored in row-major order.
///
/// Values are non-negative by construction; build one through
/// [`crate::validation::validate_matrix`] or [`TimeMatrix::from_data`].
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::TimeMatrix;
///
/// let tm = TimeMatrix::from_data(2, vec![0, 10, 12, 0]).expect("4 cells");
/// assert_eq!(tm.get(0, 1), 10);
/// assert_eq!(tm.get(1, 0), 12);
/// assert!(!tm.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatrix {
    data: Vec<u64>,
    size: usize,
}

impl TimeMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the travel time from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, seconds: u64) {
        self.data[from * self.size + to] = seconds;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let tm = TimeMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(tm.get(0, 1), 5);
        assert_eq!(tm.get(1, 0), 5);
        assert!(tm.is_symmetric());
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(TimeMatrix::from_data(2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut tm = TimeMatrix::new(3);
        tm.set(0, 1, 42);
        assert_eq!(tm.get(0, 1), 42);
        assert_eq!(tm.get(1, 0), 0);
        assert!(!tm.is_symmetric());
    }
}
