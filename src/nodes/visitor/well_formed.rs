use crate::{
    bits::{bytes_for_bits, get_bit, BITS_PER_BYTE},
    nodes::visitor::{Visitable, Visitor},
    Node, NodeType, PatriciaTrie,
};
use std::{error::Error, fmt};

/// The bits of a node prefix, used to identify where in the tree an issue was
/// found.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct KeyPrefix {
    bytes: Box<[u8]>,
    bits: usize,
}

impl KeyPrefix {
    fn of<V>(node: &Node<V>) -> Self {
        KeyPrefix {
            bytes: Box::from(node.prefix()),
            bits: node.prefix_bits(),
        }
    }

    /// The prefix buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of significant bits in the buffer.
    pub fn bits(&self) -> usize {
        self.bits
    }
}

impl fmt::Debug for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{}", String::from_utf8_lossy(&self.bytes), self.bits)
    }
}

/// An issue with the well-formed-ness of the trie. See the documentation on
/// [`WellFormedChecker`] for more context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedTrieError {
    /// A node had an incorrect number of children for its type
    WrongChildrenCount {
        /// The prefix identifying the node
        key_prefix: KeyPrefix,
        /// The type of the node
        node_type: NodeType,
        /// The number of children found at the node
        num_children: usize,
    },
    /// The prefix buffer was not exactly large enough for its bits
    WrongPrefixLength {
        /// The prefix identifying the node
        key_prefix: KeyPrefix,
    },
    /// A record node whose key does not end on a byte boundary
    UnalignedRecord {
        /// The prefix identifying the node
        key_prefix: KeyPrefix,
    },
    /// A child disagreed with the path leading to it
    PrefixMismatch {
        /// The prefix of the parent node
        parent_prefix: KeyPrefix,
        /// The prefix of the child node
        child_prefix: KeyPrefix,
        /// The branch the child hangs on
        branch: u8,
        /// The first bit at which the child is inconsistent
        bit_index: usize,
    },
    /// The number of stored records did not match the length of the trie
    WrongRecordCount {
        /// The length reported by the trie
        expected: usize,
        /// The number of record nodes found
        found: usize,
    },
    /// The length of the trie is not 0, even though the root is
    /// [`Option::None`]
    EmptyTrieWithLen,
}

impl fmt::Display for MalformedTrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedTrieError::WrongChildrenCount {
                key_prefix,
                node_type,
                num_children,
            } => {
                write!(
                    f,
                    "Found a node of type [{node_type:?}] at location [{key_prefix:?}] that had \
                     the wrong number of children! Found [{num_children}] children",
                )
            },
            MalformedTrieError::WrongPrefixLength { key_prefix } => {
                write!(
                    f,
                    "Found a node at location [{key_prefix:?}] whose prefix buffer is [{}] bytes \
                     long, expected [{}] bytes",
                    key_prefix.bytes().len(),
                    bytes_for_bits(key_prefix.bits())
                )
            },
            MalformedTrieError::UnalignedRecord { key_prefix } => {
                write!(
                    f,
                    "Found a record node at location [{key_prefix:?}] whose key does not end on \
                     a byte boundary",
                )
            },
            MalformedTrieError::PrefixMismatch {
                parent_prefix,
                child_prefix,
                branch,
                bit_index,
            } => {
                write!(
                    f,
                    "Found a child [{child_prefix:?}] on branch [{branch}] of [{parent_prefix:?}] \
                     that disagrees with the path to it at bit [{bit_index}]",
                )
            },
            MalformedTrieError::WrongRecordCount { expected, found } => {
                write!(
                    f,
                    "The trie reports [{expected}] entries, but [{found}] record nodes were found",
                )
            },
            MalformedTrieError::EmptyTrieWithLen => {
                write!(
                    f,
                    "The length of the trie is not 0, even though the root is None",
                )
            },
        }
    }
}

impl Error for MalformedTrieError {}

/// A visitor of the trie which checks that the trie is well-formed.
///
/// In this context, well-formed means that in the trie:
///  1. every split node holds no record and has exactly two children
///  2. every childless node holds a record
///  3. every prefix buffer is exactly `ceil(prefix_bits / 8)` bytes, and every
///     record node prefix covers whole bytes
///  4. every child agrees with its parent prefix, and the bit directly after
///     the parent prefix selects the branch the child hangs on
///  5. the number of record nodes matches the expected entry count
///
/// For #4 the bits of a record node are its key followed by its terminator,
/// so a shorter key can hang below a split made inside its terminator.
///
/// This checker will only return a single issue at a time.
#[derive(Debug, Default)]
pub struct WellFormedChecker {
    parent: Option<ParentPath>,
    num_records: usize,
}

#[derive(Debug)]
struct ParentPath {
    prefix: KeyPrefix,
    branch: u8,
}

impl WellFormedChecker {
    /// Traverse the given trie and check that it is well-formed. Returns the
    /// number of nodes in the trie.
    ///
    /// # Errors
    ///
    /// Returns an error if the given trie is not well-formed.
    pub fn check_trie<V>(trie: &PatriciaTrie<V>) -> Result<usize, MalformedTrieError> {
        match trie.root() {
            Some(root) => Self::check(root, trie.len()),
            None if trie.is_empty() => Ok(0),
            None => Err(MalformedTrieError::EmptyTrieWithLen),
        }
    }

    /// Traverse the tree rooted at `root` and check that it is well-formed and
    /// holds `expected_records` records. Returns the number of nodes in the
    /// tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the given tree is not well-formed.
    pub fn check<V>(root: &Node<V>, expected_records: usize) -> Result<usize, MalformedTrieError> {
        let mut visitor = WellFormedChecker::default();
        let num_nodes = root.visit_with(&mut visitor)?;

        if visitor.num_records != expected_records {
            return Err(MalformedTrieError::WrongRecordCount {
                expected: expected_records,
                found: visitor.num_records,
            });
        }

        Ok(num_nodes)
    }

    fn visit_node<V>(&mut self, node: &Node<V>) -> Result<usize, MalformedTrieError> {
        if node.prefix().len() != bytes_for_bits(node.prefix_bits()) {
            return Err(MalformedTrieError::WrongPrefixLength {
                key_prefix: KeyPrefix::of(node),
            });
        }

        let expected_children = match node.node_type() {
            NodeType::Split => 2..=2,
            NodeType::Terminal => 1..=2,
            NodeType::Leaf => 0..=0,
        };
        if !expected_children.contains(&node.num_children()) {
            return Err(MalformedTrieError::WrongChildrenCount {
                key_prefix: KeyPrefix::of(node),
                node_type: node.node_type(),
                num_children: node.num_children(),
            });
        }

        if node.record().is_some() {
            if !node.is_byte_aligned() {
                return Err(MalformedTrieError::UnalignedRecord {
                    key_prefix: KeyPrefix::of(node),
                });
            }
            self.num_records += 1;
        }

        if let Some(parent) = &self.parent {
            Self::check_against_parent(parent, node)?;
        }

        let original_parent = self.parent.take();
        let mut running_node_count = 0;
        for (branch, child) in node.children() {
            self.parent = Some(ParentPath {
                prefix: KeyPrefix::of(node),
                branch,
            });
            let result = child.visit_with(self);
            self.parent = None;
            running_node_count += result?;
        }
        self.parent = original_parent;

        Ok(running_node_count + 1)
    }

    fn check_against_parent<V>(
        parent: &ParentPath,
        child: &Node<V>,
    ) -> Result<(), MalformedTrieError> {
        let parent_bits = parent.prefix.bits();

        let mismatch = (0..parent_bits)
            .find(|&bit_index| {
                readable_bit(child, bit_index) != Some(get_bit(parent.prefix.bytes(), bit_index))
            })
            .or_else(|| {
                (readable_bit(child, parent_bits) != Some(parent.branch)).then_some(parent_bits)
            });

        match mismatch {
            Some(bit_index) => Err(MalformedTrieError::PrefixMismatch {
                parent_prefix: parent.prefix.clone(),
                child_prefix: KeyPrefix::of(child),
                branch: parent.branch,
                bit_index,
            }),
            None => Ok(()),
        }
    }
}

/// Read a bit of the path a node stands for. Record nodes extend past their
/// prefix with the zero bits of the key terminator.
fn readable_bit<V>(node: &Node<V>, bit_index: usize) -> Option<u8> {
    if bit_index < node.prefix_bits() {
        Some(get_bit(node.prefix(), bit_index))
    } else if node.record().is_some() && bit_index < node.prefix_bits() + BITS_PER_BYTE {
        Some(0)
    } else {
        None
    }
}

impl<V> Visitor<V> for WellFormedChecker {
    type Output = Result<usize, MalformedTrieError>;

    fn default_output(&self) -> Self::Output {
        Ok(0)
    }

    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
        Ok(o1? + o2?)
    }

    fn visit_split(&mut self, t: &Node<V>) -> Self::Output {
        self.visit_node(t)
    }

    fn visit_terminal(&mut self, t: &Node<V>) -> Self::Output {
        self.visit_node(t)
    }

    fn visit_leaf(&mut self, t: &Node<V>) -> Self::Output {
        self.visit_node(t)
    }
}
