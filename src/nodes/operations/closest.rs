use crate::{edit_distance, ComparisonInfo, Key, Node};
use std::fmt;
use tracing::trace;

#[cfg(test)]
mod tests;

/// A stored entry chosen by a closest-match scan.
pub struct Closest<'a, V> {
    /// The stored key of the entry.
    pub key: &'a [u8],
    /// The record stored under `key`.
    pub record: &'a V,
    /// Edit distance between `key` and the query.
    pub distance: usize,
}

impl<'a, V> Closest<'a, V> {
    /// Returns true if `self` should be preferred over `other`.
    ///
    /// A strictly smaller distance wins, and equal distances fall back to the
    /// byte-wise smaller key. This is a total order over stored entries, so
    /// the winner never depends on the order candidates are compared in.
    pub fn is_closer_than(&self, other: &Self) -> bool {
        (self.distance, self.key) < (other.distance, other.key)
    }

    /// Return whichever of the two candidates is closer.
    pub fn closer(self, other: Self) -> Self {
        if other.is_closer_than(&self) {
            other
        } else {
            self
        }
    }
}

impl<V> Clone for Closest<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Closest<'_, V> {}

impl<V: PartialEq> PartialEq for Closest<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.record == other.record && self.distance == other.distance
    }
}

impl<V: Eq> Eq for Closest<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Closest<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closest")
            .field("key", &String::from_utf8_lossy(self.key))
            .field("record", self.record)
            .field("distance", &self.distance)
            .finish()
    }
}

/// Scan every record in the subtree rooted at `node` and return the one whose
/// key has the smallest edit distance to `key`.
///
/// Each record node costs one string comparison. Ties are resolved by
/// [`Closest::is_closer_than`]. An absent node yields no candidate.
///
/// # Examples
///
/// ```rust
/// use patricia_dict::{find_closest, insert, ComparisonInfo, Key};
///
/// let root = insert(None, &Key::new("West"), "w").new_root;
/// let root = insert(Some(root), &Key::new("East"), "e").new_root;
///
/// let mut info = ComparisonInfo::new();
/// let best = find_closest(Some(&root), &Key::new("Best"), &mut info).unwrap();
///
/// // Both keys are one edit away, the smaller key wins
/// assert_eq!(best.key, b"East");
/// assert_eq!(best.distance, 1);
/// assert_eq!(info.string_comparisons, 2);
/// ```
pub fn find_closest<'a, V>(
    node: Option<&'a Node<V>>,
    key: &Key,
    info: &mut ComparisonInfo,
) -> Option<Closest<'a, V>> {
    let node = node?;

    let mut best = node.entry().map(|(node_key, record)| {
        info.count_string_comparisons();
        Closest {
            key: node_key,
            record,
            distance: edit_distance(node_key, key.as_bytes()),
        }
    });

    for (_, child) in node.children() {
        if let Some(candidate) = find_closest(Some(child), key, info) {
            best = Some(match best {
                Some(current) => current.closer(candidate),
                None => candidate,
            });
        }
    }

    if let Some(best) = &best {
        trace!(
            query = %key,
            best = %String::from_utf8_lossy(best.key),
            distance = best.distance,
            "closest in subtree"
        );
    }

    best
}
