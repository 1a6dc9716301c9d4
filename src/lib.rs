//! # Data layout vs traversal performance
//!
//! Why data layout matters more to performance than algorithmic efficiency:
//! the same marked elements are stored twice and counted three ways.
//!
//! ## Structures
//!
//! 1. **Grid**: R × C bytes in one contiguous row-major allocation
//! 2. **List**: R × C nodes, each holding one byte and a link to the next
//!
//! Both are built in lockstep and every 8th row is set to `0xFF` (12.5% of
//! all elements).
//!
//! ## Counters
//!
//! - `linked_list`: pointer chasing through the list
//! - `column`: column-major over the grid, each step jumps a full row
//! - `row`: row-major over the grid, each step is the next byte
//!
//! All three return the same count; only the memory access pattern differs.
//!
//! ## Usage Example
//!
//! ```
//! use caching::{traverse, Layout, LayoutConfig};
//!
//! let config = LayoutConfig::new(64, 1024).unwrap();
//! let layout = Layout::new(&config);
//! assert_eq!(traverse::row(&layout), 8 * 1024);
//! assert_eq!(traverse::column(&layout), traverse::linked_list(&layout));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;   // Dimensions, marking rule, node placement
pub mod grid;     // Row-major byte grid
pub mod list;     // Arena-backed linked list
pub mod layout;   // Lockstep construction of both structures
pub mod traverse; // The three counters
pub mod timing;   // Repeated-run wall-clock timing

pub use config::{LayoutConfig, NodePlacement, COLS, MARK_INTERVAL, ROWS, SENTINEL};
pub use grid::Grid;
pub use layout::{InitReport, Layout};
pub use list::{LinkedList, Node, NodeId};
pub use timing::{time_traversal, TraversalTiming};
pub use traverse::Traversal;

use std::sync::OnceLock;

use thiserror::Error;

/// Errors from building or timing a layout
#[derive(Error, Debug)]
pub enum LayoutError {
    /// rows × cols does not fit in `usize`
    #[error("Grid dimensions {rows} x {cols} overflow")]
    DimensionOverflow {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// More cells than the node arena can index
    #[error("{nodes} nodes exceed arena limit {max}")]
    TooManyNodes {
        /// Requested node count
        nodes: usize,
        /// Largest supported node count
        max: usize,
    },

    /// Traversal name not recognised
    #[error("Unknown traversal '{0}' (expected list, column or row)")]
    UnknownTraversal(String),

    /// Timing needs at least one run
    #[error("Iteration count must be at least 1")]
    ZeroIterations,
}

static SHARED: OnceLock<Layout> = OnceLock::new();

/// Build the process-wide reference layout once
///
/// The call that performs construction prints the list and matrix element
/// counts to stdout; later calls return the same layout silently.
pub fn initialize() -> &'static Layout {
    SHARED.get_or_init(|| {
        let layout = Layout::reference();
        println!("{}", layout.report());
        layout
    })
}

/// [`traverse::linked_list`] over the process-wide layout
pub fn linked_list_traverse() -> usize {
    traverse::linked_list(initialize())
}

/// [`traverse::column`] over the process-wide layout
pub fn column_traverse() -> usize {
    traverse::column(initialize())
}

/// [`traverse::row`] over the process-wide layout
pub fn row_traverse() -> usize {
    traverse::row(initialize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_wide_layout_is_shared() {
        let first = initialize() as *const Layout;
        let second = initialize() as *const Layout;
        assert_eq!(first, second);
    }

    #[test]
    fn test_process_wide_counts() {
        let expected = ROWS * COLS / 8;
        assert_eq!(linked_list_traverse(), expected);
        assert_eq!(column_traverse(), expected);
        assert_eq!(row_traverse(), expected);
    }
}
