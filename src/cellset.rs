//! fixed-size bit set of cell indices, for internal bookkeeping.

use std::fmt;

type Word = u64;
const BITS: usize = Word::BITS as usize;

/// Set of cells `0..capacity`, one bit per cell.
///
/// Also tracks how many cells are set, so checking whether
/// every cell has been visited is O(1).
#[derive(Clone, PartialEq, Eq)]
pub struct CellSet {
    words: Vec<Word>,
    capacity: usize,
    len: usize,
}

impl CellSet {
    /// Create an empty set that can hold cells `0..capacity`.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; (capacity + BITS - 1) / BITS],
            capacity,
            len: 0,
        }
    }

    /// Add a cell to the set.
    ///
    /// Returns `true` if the cell was not already present.
    #[inline]
    pub fn insert(&mut self, cell: usize) -> bool {
        assert!(
            cell < self.capacity,
            "cell {cell} out of range for set of {}",
            self.capacity
        );

        let (i, j) = (cell / BITS, cell % BITS);
        let bit = 1 << j;

        if self.words[i] & bit != 0 {
            return false;
        }

        self.words[i] |= bit;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        let (i, j) = (cell / BITS, cell % BITS);
        self.words.get(i).map_or(false, |&word| (word >> j) & 1 == 1)
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Every cell `0..capacity` is in the set.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Iterate over the cells in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let j = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(i * BITS + j)
            })
        })
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
