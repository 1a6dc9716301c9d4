//! Arena-resident list node
//!
//! `next` is an arena index rather than a pointer, so a chain is a plain
//! `Vec<Node>` that frees in one go and cannot form ownership cycles.

use std::fmt;

/// Index of a node in the list arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Arena slot as a `usize` index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One byte of payload plus the link to its successor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Node {
    /// Payload (0 or the sentinel)
    pub value: u8,

    /// Successor, `None` for the tail
    pub next: Option<NodeId>,
}

impl Node {
    /// True for the last node of a chain
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}
