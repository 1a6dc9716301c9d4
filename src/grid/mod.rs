//! Two-dimensional byte grid
//!
//! One contiguous row-major allocation: cell (row, col) lives at
//! `row * cols + col`, so stepping a column moves one byte and stepping a
//! row moves `cols` bytes.

/// Fixed-size R × C grid of bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Box<[u8]>,
}

impl Grid {
    /// Zero-filled grid; dimensions come from a validated `LayoutConfig`
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0u8; rows * cols].into_boxed_slice(),
        }
    }

    /// Row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at (row, col)
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[self.offset(row, col)]
    }

    /// One full row as a contiguous slice
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Raw row-major storage
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u8) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}
