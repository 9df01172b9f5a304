//! Trie node representation

use crate::{
    bits::{bytes_for_bits, get_bit, BITS_PER_BYTE},
    Key,
};
use std::fmt;


/// The shape of a node, derived from its record and children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Node that holds a record and has no children
    Leaf,
    /// Node that holds a record and also has at least one child, because
    /// longer keys extend its key
    Terminal,
    /// Node that holds no record and exists only to fork two diverging keys
    Split,
}

/// A single node of the PATRICIA trie.
///
/// The `prefix` holds the path from bit 0 of the key down to this node,
/// `prefix_bits` long. Child `branch_zero` (`branch_one`) holds every key
/// whose bit at index `prefix_bits` is 0 (1).
pub struct Node<V> {
    /// Number of significant bits in `prefix`.
    pub(crate) prefix_bits: usize,
    /// Exactly `ceil(prefix_bits / 8)` bytes.
    pub(crate) prefix: Box<[u8]>,
    pub(crate) branch_zero: Option<Box<Node<V>>>,
    pub(crate) branch_one: Option<Box<Node<V>>>,
    /// Only present on nodes created for an inserted key, where `prefix`
    /// is the entire key.
    pub(crate) record: Option<V>,
}

impl<V> Node<V> {
    /// Create a childless node for the given key and record.
    pub fn leaf(key: &Key, record: V) -> Self {
        Node {
            prefix_bits: key.bit_len(),
            prefix: Box::from(key.as_bytes()),
            branch_zero: None,
            branch_one: None,
            record: Some(record),
        }
    }

    /// Create a node holding no record that forks `zero` and `one`.
    ///
    /// # Panics
    ///
    ///  - Panics if `prefix` is not exactly `ceil(prefix_bits / 8)` bytes.
    pub fn split(
        prefix: Box<[u8]>,
        prefix_bits: usize,
        zero: Box<Node<V>>,
        one: Box<Node<V>>,
    ) -> Self {
        assert_eq!(
            prefix.len(),
            bytes_for_bits(prefix_bits),
            "split prefix must be exactly as long as its bits"
        );

        Node {
            prefix_bits,
            prefix,
            branch_zero: Some(zero),
            branch_one: Some(one),
            record: None,
        }
    }

    /// The shape of this node.
    pub fn node_type(&self) -> NodeType {
        match (&self.record, self.has_children()) {
            (Some(_), false) => NodeType::Leaf,
            (Some(_), true) => NodeType::Terminal,
            (None, _) => NodeType::Split,
        }
    }

    /// Number of significant prefix bits.
    pub fn prefix_bits(&self) -> usize {
        self.prefix_bits
    }

    /// The raw prefix buffer.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Read bit `bit_index` of this node's prefix.
    ///
    /// # Panics
    ///
    ///  - Panics if `bit_index >= self.prefix_bits()`.
    pub fn prefix_bit(&self, bit_index: usize) -> u8 {
        assert!(
            bit_index < self.prefix_bits,
            "bit index [{bit_index}] is outside the [{}] bit prefix",
            self.prefix_bits
        );
        get_bit(&self.prefix, bit_index)
    }

    /// The full key of this node, if it holds a record.
    pub fn key(&self) -> Option<&[u8]> {
        self.record.as_ref().map(|_| &*self.prefix)
    }

    /// The stored record, if any.
    pub fn record(&self) -> Option<&V> {
        self.record.as_ref()
    }

    /// The key and the record stored at this node, if any.
    pub fn entry(&self) -> Option<(&[u8], &V)> {
        self.record.as_ref().map(|record| (&*self.prefix, record))
    }

    /// Child reached when the next bit is `bit`.
    pub fn child(&self, bit: u8) -> Option<&Node<V>> {
        if bit == 0 {
            self.branch_zero.as_deref()
        } else {
            self.branch_one.as_deref()
        }
    }

    /// Mutable slot for the child reached when the next bit is `bit`.
    pub(crate) fn child_slot(&mut self, bit: u8) -> &mut Option<Box<Node<V>>> {
        if bit == 0 {
            &mut self.branch_zero
        } else {
            &mut self.branch_one
        }
    }

    /// Iterate over the present children, `branch_zero` first, paired with the
    /// bit that selects them.
    pub fn children(&self) -> impl Iterator<Item = (u8, &Node<V>)> {
        [(0u8, self.branch_zero.as_deref()), (1, self.branch_one.as_deref())]
            .into_iter()
            .filter_map(|(bit, child)| child.map(|child| (bit, child)))
    }

    /// Number of present children.
    pub fn num_children(&self) -> usize {
        usize::from(self.branch_zero.is_some()) + usize::from(self.branch_one.is_some())
    }

    /// Returns true if either child is present.
    pub fn has_children(&self) -> bool {
        self.branch_zero.is_some() || self.branch_one.is_some()
    }

    /// Returns true if the prefix ends on a byte boundary.
    pub fn is_byte_aligned(&self) -> bool {
        self.prefix_bits % BITS_PER_BYTE == 0
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("node_type", &self.node_type())
            .field("prefix_bits", &self.prefix_bits)
            .field("prefix", &String::from_utf8_lossy(&self.prefix))
            .field("record", &self.record)
            .field("branch_zero", &self.branch_zero)
            .field("branch_one", &self.branch_one)
            .finish()
    }
}
