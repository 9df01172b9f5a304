use crate::{find_closest, find_mismatch_bit, ComparisonInfo, Key, Node};
use tracing::{debug, trace};


/// Search the tree rooted at `root` for `key`, falling back to the closest
/// stored key when there is no exact match.
///
/// Returns the matched key and its record. Every node entered costs one node
/// access, every branch taken costs one bit comparison, and a closest-match
/// scan adds one string comparison per record it inspects.
///
/// The descent resolves in one of three ways:
///  - the key ends exactly at a record node, which is an exact match
///  - the key runs past a node whose branch for the next bit is empty, in
///    which case the deepest record on the path answers (a stored key that is
///    a prefix of the query)
///  - the key diverges from a node prefix, in which case the closest record
///    below that node answers
///
/// # Examples
///
/// ```rust
/// use patricia_dict::{insert, search, ComparisonInfo, Key};
///
/// let root = insert(None, &Key::new("Carlton"), 3053).new_root;
/// let root = insert(Some(root), &Key::new("Fitzroy"), 3065).new_root;
///
/// let mut info = ComparisonInfo::new();
/// let (key, postcode) = search(Some(&root), &Key::new("Calton"), &mut info).unwrap();
/// assert_eq!(key, b"Carlton");
/// assert_eq!(*postcode, 3053);
/// assert!(info.node_accesses > 0);
/// ```
pub fn search<'a, V>(
    root: Option<&'a Node<V>>,
    key: &Key,
    info: &mut ComparisonInfo,
) -> Option<(&'a [u8], &'a V)> {
    let node = root?;
    info.count_node_accesses();

    let mismatch_bit = find_mismatch_bit(&node.prefix, key, node.prefix_bits);

    if mismatch_bit == node.prefix_bits {
        if mismatch_bit == key.bit_len() {
            if let Some(entry) = node.entry() {
                debug!(query = %key, %info, "exact match");
                return Some(entry);
            }
        }

        info.count_bit_comparisons();
        let next_bit = key.bit(mismatch_bit);
        trace!(query = %key, mismatch_bit, next_bit, "search: descend");

        return search(node.child(next_bit), key, info).or_else(|| {
            let entry = node.entry();
            if entry.is_some() {
                debug!(query = %key, %info, "stored prefix match");
            }
            entry
        });
    }

    trace!(query = %key, mismatch_bit, "search: diverged, scanning subtree");
    let closest = find_closest(Some(node), key, info)?;
    debug!(
        query = %key,
        key = %String::from_utf8_lossy(closest.key),
        distance = closest.distance,
        %info,
        "closest match"
    );
    Some((closest.key, closest.record))
}

/// Search the tree rooted at `root` for a record stored under exactly `key`.
///
/// No counters are kept and no closest-match fallback is attempted.
pub fn search_exact<'a, V>(root: Option<&'a Node<V>>, key: &Key) -> Option<&'a V> {
    let mut current = root?;

    loop {
        let mismatch_bit = find_mismatch_bit(&current.prefix, key, current.prefix_bits);
        if mismatch_bit != current.prefix_bits {
            return None;
        }

        if mismatch_bit == key.bit_len() {
            if let Some(record) = current.record() {
                return Some(record);
            }
        }

        current = current.child(key.bit(mismatch_bit))?;
    }
}
