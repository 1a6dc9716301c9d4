//! The three counters
//!
//! Each one visits every element exactly once and counts sentinels. They
//! differ only in the order memory is touched:
//!   linked_list: follow `next` links (pointer chasing)
//!   column:      outer loop columns, inner loop rows (stride = cols)
//!   row:         outer loop rows, inner loop columns (stride = 1)

use std::fmt;
use std::str::FromStr;

use crate::config::SENTINEL;
use crate::{Layout, LayoutError};

/// Count sentinel nodes walking the chain head to tail
pub fn linked_list(layout: &Layout) -> usize {
    let mut count = 0;
    for node in layout.list() {
        if node.value == SENTINEL {
            count += 1;
        }
    }
    count
}

/// Count sentinel cells down each column
pub fn column(layout: &Layout) -> usize {
    let grid = layout.grid();
    let mut count = 0;
    for col in 0..grid.cols() {
        for row in 0..grid.rows() {
            if grid.get(row, col) == SENTINEL {
                count += 1;
            }
        }
    }
    count
}

/// Count sentinel cells along each row
pub fn row(layout: &Layout) -> usize {
    let grid = layout.grid();
    let mut count = 0;
    for row in 0..grid.rows() {
        for &cell in grid.row(row) {
            if cell == SENTINEL {
                count += 1;
            }
        }
    }
    count
}

/// Selects one of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// [`linked_list`]
    LinkedList,
    /// [`column`]
    Column,
    /// [`row`]
    Row,
}

impl Traversal {
    /// All counters, slowest layout first
    pub const ALL: [Traversal; 3] = [Traversal::LinkedList, Traversal::Column, Traversal::Row];

    /// Run the counter
    #[inline]
    pub fn count(self, layout: &Layout) -> usize {
        match self {
            Traversal::LinkedList => linked_list(layout),
            Traversal::Column => column(layout),
            Traversal::Row => row(layout),
        }
    }

    /// Short name used on the command line and in benchmark ids
    pub fn name(self) -> &'static str {
        match self {
            Traversal::LinkedList => "list",
            Traversal::Column => "column",
            Traversal::Row => "row",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" | "linked-list" | "linkedlist" => Ok(Traversal::LinkedList),
            "column" | "col" => Ok(Traversal::Column),
            "row" => Ok(Traversal::Row),
            _ => Err(LayoutError::UnknownTraversal(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutConfig;

    #[test]
    fn test_counters_agree_on_small_grid() {
        let config = LayoutConfig::new(20, 7).unwrap();
        let layout = Layout::new(&config);

        // rows 0, 8, 16
        for traversal in Traversal::ALL {
            assert_eq!(traversal.count(&layout), 21, "{} disagrees", traversal);
        }
    }

    #[test]
    fn test_single_row() {
        let layout = Layout::new(&LayoutConfig::new(1, 100).unwrap());
        assert_eq!(linked_list(&layout), 100);
        assert_eq!(column(&layout), 100);
        assert_eq!(row(&layout), 100);
    }

    #[test]
    fn test_parse_names() {
        for traversal in Traversal::ALL {
            assert_eq!(traversal.name().parse::<Traversal>().unwrap(), traversal);
        }
        assert_eq!("Linked-List".parse::<Traversal>().unwrap(), Traversal::LinkedList);
        assert!(matches!(
            "diagonal".parse::<Traversal>(),
            Err(LayoutError::UnknownTraversal(name)) if name == "diagonal"
        ));
    }
}
