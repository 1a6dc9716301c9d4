//! Layout configuration
//!
//! Dimensions are fixed once a [`LayoutConfig`] exists: the only ways to get
//! one are [`LayoutConfig::reference`] and the validating [`LayoutConfig::new`].

use crate::LayoutError;

/// Rows in the reference grid
pub const ROWS: usize = 64;

/// Columns in the reference grid (64k per row)
pub const COLS: usize = 64 * 1024;

/// Marker value for "set" elements in both structures
pub const SENTINEL: u8 = 0xFF;

/// Every `MARK_INTERVAL`-th row is marked in full (12.5% of all elements)
pub const MARK_INTERVAL: usize = 8;

/// Largest node count addressable by the list arena
pub const MAX_NODES: usize = u32::MAX as usize;

const _: () = assert!(ROWS * COLS <= MAX_NODES);

/// Where each logical list position is stored in the node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodePlacement {
    /// Arena order matches link order, like a bump allocator
    #[default]
    Sequential,

    /// Arena slots are a seeded random permutation of link order
    Shuffled {
        /// RNG seed; equal seeds give identical arenas
        seed: u64,
    },
}

/// Grid dimensions and list placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    rows: usize,
    cols: usize,
    placement: NodePlacement,
}

impl LayoutConfig {
    /// The 64 × 65536 sizing the benchmark is built around
    pub fn reference() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            placement: NodePlacement::Sequential,
        }
    }

    /// Custom dimensions
    ///
    /// Zero rows or columns is allowed and yields empty structures.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LayoutError> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(LayoutError::DimensionOverflow { rows, cols })?;
        if cells > MAX_NODES {
            return Err(LayoutError::TooManyNodes {
                nodes: cells,
                max: MAX_NODES,
            });
        }

        Ok(Self {
            rows,
            cols,
            placement: NodePlacement::Sequential,
        })
    }

    /// Replace the node placement strategy
    pub fn with_placement(mut self, placement: NodePlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Row count R
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count C
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Node placement strategy
    pub fn placement(&self) -> NodePlacement {
        self.placement
    }

    /// Total elements in each structure: R × C
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Rows satisfying `row % MARK_INTERVAL == 0`
    pub fn marked_rows(&self) -> usize {
        self.rows.div_ceil(MARK_INTERVAL)
    }

    /// Count every traversal must return
    pub fn expected_marked(&self) -> usize {
        self.marked_rows() * self.cols
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::reference()
    }
}

/// Marking rule shared by the grid and the list
#[inline]
pub fn is_marked_row(row: usize) -> bool {
    row % MARK_INTERVAL == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_expected_count() {
        let config = LayoutConfig::reference();
        assert_eq!(config.cell_count(), 4_194_304);
        assert_eq!(config.marked_rows(), 8);
        assert_eq!(config.expected_marked(), 524_288);
        assert_eq!(config.expected_marked() * 8, config.cell_count());
    }

    #[test]
    fn test_partial_interval_rounds_up() {
        // rows 0 and 8 are marked
        let config = LayoutConfig::new(9, 3).unwrap();
        assert_eq!(config.marked_rows(), 2);
        assert_eq!(config.expected_marked(), 6);
    }

    #[test]
    fn test_rejects_overflow() {
        let err = LayoutConfig::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, LayoutError::DimensionOverflow { .. }));
    }

    #[test]
    fn test_rejects_arena_overflow() {
        let err = LayoutConfig::new(1 << 20, 1 << 13).unwrap_err();
        assert!(matches!(err, LayoutError::TooManyNodes { .. }));
    }

    #[test]
    fn test_marking_rule() {
        assert!(is_marked_row(0));
        assert!(!is_marked_row(1));
        assert!(!is_marked_row(7));
        assert!(is_marked_row(8));
        assert!(is_marked_row(56));
    }
}
