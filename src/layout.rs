//! Lockstep construction of the grid and the list

use std::fmt;

use tracing::debug;

use crate::config::{is_marked_row, LayoutConfig, SENTINEL};
use crate::grid::Grid;
use crate::list::{LinkedList, ListBuilder};

/// Both data structures, built once and read-only afterward
#[derive(Debug, Clone)]
pub struct Layout {
    config: LayoutConfig,
    grid: Grid,
    list: LinkedList,
}

impl Layout {
    /// Build grid and list together
    ///
    /// Walks (row, col) in row-major order, creating one node per cell. Rows
    /// with `row % 8 == 0` get the sentinel in both structures, all other
    /// elements stay zero.
    pub fn new(config: &LayoutConfig) -> Self {
        debug!(
            rows = config.rows(),
            cols = config.cols(),
            placement = ?config.placement(),
            "building layout"
        );

        let mut grid = Grid::zeroed(config.rows(), config.cols());
        let mut list = ListBuilder::new(config.cell_count(), config.placement());

        for row in 0..config.rows() {
            let value = if is_marked_row(row) { SENTINEL } else { 0 };
            for col in 0..config.cols() {
                list.push(value);
                if value == SENTINEL {
                    grid.set(row, col, SENTINEL);
                }
            }
        }

        Self {
            config: config.clone(),
            grid,
            list: list.finish(),
        }
    }

    /// Reference-sized layout
    pub fn reference() -> Self {
        Self::new(&LayoutConfig::reference())
    }

    /// Configuration this layout was built from
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The list
    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    /// Walk the chain and pair its length with the grid cell count
    pub fn report(&self) -> InitReport {
        let report = InitReport {
            list_elements: self.list.chain_len(),
            matrix_elements: self.config.cell_count(),
        };
        debug!(
            list = report.list_elements,
            matrix = report.matrix_elements,
            "layout element counts"
        );
        report
    }
}

/// Element counts of both structures after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Nodes reached by walking the chain
    pub list_elements: usize,

    /// R × C
    pub matrix_elements: usize,
}

impl InitReport {
    /// Both structures hold the same number of elements
    pub fn is_consistent(&self) -> bool {
        self.list_elements == self.matrix_elements
    }
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elements in the link list {}", self.list_elements)?;
        write!(f, "Elements in the matrix {}", self.matrix_elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodePlacement;

    #[test]
    fn test_marks_every_eighth_row() {
        let config = LayoutConfig::new(17, 5).unwrap();
        let layout = Layout::new(&config);

        for row in 0..config.rows() {
            let expected = if row % 8 == 0 { SENTINEL } else { 0 };
            assert!(
                layout.grid().row(row).iter().all(|&cell| cell == expected),
                "row {} should be all {:#04x}",
                row,
                expected
            );
        }
    }

    #[test]
    fn test_list_mirrors_grid_in_row_major_order() {
        let config = LayoutConfig::new(10, 3)
            .unwrap()
            .with_placement(NodePlacement::Shuffled { seed: 99 });
        let layout = Layout::new(&config);

        let chain: Vec<u8> = layout.list().iter().map(|node| node.value).collect();
        assert_eq!(chain.as_slice(), layout.grid().as_bytes());
    }

    #[test]
    fn test_report_is_consistent() {
        let layout = Layout::new(&LayoutConfig::new(12, 34).unwrap());
        let report = layout.report();

        assert!(report.is_consistent());
        assert_eq!(report.list_elements, 408);
        assert_eq!(
            report.to_string(),
            "Elements in the link list 408\nElements in the matrix 408"
        );
    }
}
