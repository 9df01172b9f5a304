use crate::{bits::extract_stem, find_mismatch_bit, Key, Node};
use tracing::trace;


/// The results of a successful tree insert.
#[derive(Debug)]
pub struct InsertResult<V> {
    /// The new root of the tree. This may be the old root, or a split node
    /// created above it.
    pub new_root: Box<Node<V>>,
    /// The record previously stored under the same key, which the inserted
    /// record replaced.
    pub existing_record: Option<V>,
}

/// Insert `record` under `key` into the tree rooted at `root`, returning the
/// new root.
///
/// Inserting a key that is already present replaces the stored record and
/// hands the old one back in [`InsertResult::existing_record`], without
/// changing the shape of the tree.
///
/// # Examples
///
/// ```rust
/// use patricia_dict::{insert, search_exact, Key};
///
/// let root = insert(None, &Key::new("Kew"), 1).new_root;
/// let root = insert(Some(root), &Key::new("Kensington"), 2).new_root;
///
/// assert_eq!(search_exact(Some(&root), &Key::new("Kew")), Some(&1));
/// assert_eq!(search_exact(Some(&root), &Key::new("Kensington")), Some(&2));
/// ```
pub fn insert<V>(root: Option<Box<Node<V>>>, key: &Key, record: V) -> InsertResult<V> {
    let Some(mut root) = root else {
        trace!(key = %key, "insert: new leaf");
        return InsertResult {
            new_root: Box::new(Node::leaf(key, record)),
            existing_record: None,
        };
    };

    let mismatch_bit = find_mismatch_bit(&root.prefix, key, root.prefix_bits);

    if mismatch_bit == root.prefix_bits {
        if mismatch_bit == key.bit_len() && root.record.is_some() {
            trace!(key = %key, "insert: replace existing record");
            let existing_record = root.record.replace(record);
            return InsertResult {
                new_root: root,
                existing_record,
            };
        }

        // The whole prefix is shared, continue below it. When the key is
        // exhausted this reads the first bit of its terminator.
        let next_bit = key.bit(mismatch_bit);
        trace!(key = %key, mismatch_bit, next_bit, "insert: descend");

        let slot = root.child_slot(next_bit);
        let InsertResult {
            new_root: child,
            existing_record,
        } = insert(slot.take(), key, record);
        *slot = Some(child);

        InsertResult {
            new_root: root,
            existing_record,
        }
    } else {
        // Divergence inside the existing prefix, fork above the old subtree.
        let prefix = if mismatch_bit == 0 {
            Box::default()
        } else {
            extract_stem(key.as_bytes_with_nul(), 0, mismatch_bit)
        };
        let new_leaf = Box::new(Node::leaf(key, record));
        let next_bit = key.bit(mismatch_bit);
        trace!(key = %key, mismatch_bit, next_bit, "insert: split");

        let split = if next_bit == 0 {
            Node::split(prefix, mismatch_bit, new_leaf, root)
        } else {
            Node::split(prefix, mismatch_bit, root, new_leaf)
        };

        InsertResult {
            new_root: Box::new(split),
            existing_record: None,
        }
    }
}
