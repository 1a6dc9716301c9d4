//! Singly linked list stored in an arena
//!
//! Link order is the logical order. Arena order is where each node sits in
//! memory, decided by [`NodePlacement`]:
//!   Sequential: slot i holds logical node i, links point one slot ahead
//!   Shuffled:   slots are a seeded permutation, links jump around the arena

mod node;

pub use node::{Node, NodeId};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{NodePlacement, MAX_NODES};

/// Arena-backed singly linked chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList {
    nodes: Vec<Node>,
    head: Option<NodeId>,
}

impl LinkedList {
    /// Chain with no nodes
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// First node, if any
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Node stored at `id`
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Nodes in arena (memory) order
    pub fn arena(&self) -> &[Node] {
        &self.nodes
    }

    /// Arena size (not a chain walk, see [`LinkedList::chain_len`])
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// True when there is no head
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Count nodes by following links from the head
    pub fn chain_len(&self) -> usize {
        self.iter().count()
    }

    /// Nodes in link order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pointer-chasing iterator over a [`LinkedList`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?.index()];
        self.cursor = node.next;
        Some(node)
    }
}

/// Appends nodes in link order into a preallocated arena
///
/// Exactly `capacity` pushes must happen before `finish`; anything else
/// would leave arena nodes off the chain.
#[derive(Debug)]
pub(crate) struct ListBuilder {
    nodes: Vec<Node>,
    slots: Option<Vec<u32>>,
    head: Option<NodeId>,
    last: Option<NodeId>,
    pushed: usize,
}

impl ListBuilder {
    /// Builder for exactly `capacity` nodes
    pub(crate) fn new(capacity: usize, placement: NodePlacement) -> Self {
        assert!(
            capacity <= MAX_NODES,
            "capacity {} exceeds arena limit {}",
            capacity,
            MAX_NODES
        );

        let slots = match placement {
            NodePlacement::Sequential => None,
            NodePlacement::Shuffled { seed } => {
                let mut slots: Vec<u32> = (0..capacity as u32).collect();
                slots.shuffle(&mut StdRng::seed_from_u64(seed));
                Some(slots)
            }
        };

        Self {
            nodes: vec![Node::default(); capacity],
            slots,
            head: None,
            last: None,
            pushed: 0,
        }
    }

    /// Create the next node and link the previous one to it
    pub(crate) fn push(&mut self, value: u8) -> NodeId {
        assert!(
            self.pushed < self.nodes.len(),
            "arena full: capacity is {}",
            self.nodes.len()
        );

        let slot = match &self.slots {
            Some(slots) => slots[self.pushed],
            None => self.pushed as u32,
        };
        let id = NodeId::new(slot);
        self.nodes[id.index()].value = value;

        match self.last {
            Some(prev) => self.nodes[prev.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.last = Some(id);
        self.pushed += 1;
        id
    }

    /// Finish the chain
    pub(crate) fn finish(self) -> LinkedList {
        assert_eq!(
            self.pushed,
            self.nodes.len(),
            "arena not fully linked: {} of {} nodes pushed",
            self.pushed,
            self.nodes.len()
        );
        LinkedList {
            nodes: self.nodes,
            head: self.head,
        }
    }
}
