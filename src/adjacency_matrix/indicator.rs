use bitvec::vec::BitVec;

use crate::{triangular::triangular, util::edge_key};

/// A symmetric n×n matrix of bits whose diagonal is always zero, stored in a
/// flat bit vector.  Only entries strictly below the diagonal are stored, so
/// for a 4×4 matrix the entries live at the following indices
/// of a vector of length 6:
///
/// ```text
/// ⎛ - 0 1 3 ⎞
/// ⎟ 0 - 2 4 ⎟
/// ⎟ 1 2 - 5 ⎟
/// ⎝ 3 4 5 - ⎠
/// ```
///
/// Entry `(i, j)` and entry `(j, i)` share one bit, so the matrix cannot
/// become asymmetric.
#[derive(Clone, Debug)]
pub(crate) struct SymmetricIndicatorMatrix {
    /// The size of one dimension of the matrix.
    size: usize,
    bits: BitVec,
}

impl SymmetricIndicatorMatrix {
    /// Creates an all-zero matrix of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bits: BitVec::repeat(false, Self::storage_size(size)),
        }
    }

    fn storage_size(size: usize) -> usize {
        triangular(size.saturating_sub(1))
    }

    /// Returns the size of one dimension of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the position of entry `(i, j)` in `bits`, or `None` for the
    /// diagonal and for out-of-range coordinates.
    fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.size && j < self.size && i != j).then(|| {
            let (low, high) = edge_key(i, j);
            triangular(high - 1) + low
        })
    }

    /// Reads entry `(i, j)`.  The diagonal and out-of-range entries read as
    /// false.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.index(i, j).is_some_and(|index| self.bits[index])
    }

    /// Writes entry `(i, j)` (and therefore `(j, i)`), returning the previous
    /// value.  Writes to the diagonal or out of range are ignored and return
    /// false.
    pub fn set(&mut self, i: usize, j: usize, value: bool) -> bool {
        match self.index(i, j) {
            Some(index) => self.bits.replace(index, value),
            None => false,
        }
    }

    /// Returns the number of set entries above the diagonal.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterates over the columns set in row `i`, in ascending order.
    pub fn row(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&j| self.get(i, j))
    }

    /// Iterates over the set entries `(i, j)` with `i < j`, row by row.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |i| {
            (i + 1..self.size)
                .filter(move |&j| self.get(i, j))
                .map(move |j| (i, j))
        })
    }
}
