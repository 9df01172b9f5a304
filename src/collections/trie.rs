//! Module containing the implementation of the `PatriciaTrie`.

use crate::{
    deallocate_tree, find_closest, insert, search, search_exact, AsBytes, Closest, ComparisonInfo,
    InsertResult, Key, Node,
};
use std::{error::Error, fmt};
use tracing::debug;

#[cfg(test)]
mod tests;

/// The error returned by [`PatriciaTrie::try_insert`] when the key is already
/// present.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKeyError {
    /// The key that was the input to the [`PatriciaTrie::try_insert`]
    /// operation
    pub byte_repr: Box<[u8]>,
}

impl fmt::Debug for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplicateKeyError")
            .field("byte_repr", &String::from_utf8_lossy(&self.byte_repr))
            .finish()
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Attempted to insert a key [{:?}] which is already present in the trie.",
            String::from_utf8_lossy(&self.byte_repr)
        )
    }
}

impl Error for DuplicateKeyError {}

/// A dictionary from string keys to records, backed by a PATRICIA trie.
///
/// Keys follow C string rules: a key ends at its first NUL byte. Besides exact
/// lookup the trie answers approximate queries, returning the stored key with
/// the smallest edit distance to the query.
pub struct PatriciaTrie<V> {
    /// The number of entries present in the trie.
    num_entries: usize,
    /// The trie root, if present.
    root: Option<Box<Node<V>>>,
}

impl<V> PatriciaTrie<V> {
    /// Create a new, empty [`PatriciaTrie`].
    ///
    /// This function will not pre-allocate anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::PatriciaTrie;
    ///
    /// let trie = PatriciaTrie::<u32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        PatriciaTrie {
            num_entries: 0,
            root: None,
        }
    }

    /// The root node of the trie, if any key has been inserted.
    ///
    /// This is the entry point for the [`visitor`][crate::visitor] utilities.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Returns the number of entries in the trie.
    pub fn len(&self) -> usize {
        self.num_entries
    }

    /// Returns true if the trie contains no entries.
    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    /// Clear the trie, removing all entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::PatriciaTrie;
    ///
    /// let mut trie = PatriciaTrie::new();
    /// trie.insert("Kew", 3101);
    /// assert_eq!(trie.len(), 1);
    ///
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// assert!(trie.get("Kew").is_none());
    /// ```
    pub fn clear(&mut self) {
        if self.root.is_some() {
            deallocate_tree(self.root.take());
            self.num_entries = 0;
        }
    }

    /// Inserts a key-record pair into the trie.
    ///
    /// If the trie did not have this key present, `None` is returned. If it
    /// did, the record is replaced and the old record is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::PatriciaTrie;
    ///
    /// let mut trie = PatriciaTrie::new();
    ///
    /// assert!(trie.insert("Carlton", 'a').is_none());
    /// assert!(trie.insert("Fitzroy", 'b').is_none());
    /// assert_eq!(trie.insert("Fitzroy", 'c'), Some('b'));
    ///
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsBytes,
    {
        let key = Key::new(&key);
        let InsertResult {
            new_root,
            existing_record,
        } = insert(self.root.take(), &key, value);
        self.root = Some(new_root);

        if existing_record.is_none() {
            self.num_entries += 1;
        }

        existing_record
    }

    /// Inserts a key-record pair into the trie, refusing to replace a record
    /// that is already stored under the same key.
    ///
    /// # Errors
    ///  - If the trie already has the key, the value is dropped, the stored
    ///    record is left unchanged and an error is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::PatriciaTrie;
    ///
    /// let mut trie = PatriciaTrie::new();
    ///
    /// assert!(trie.try_insert("Kew", 1).is_ok());
    /// assert!(trie.try_insert("Kew East", 2).is_ok());
    /// assert!(trie.try_insert("Kew", 3).is_err());
    ///
    /// assert_eq!(trie.get("Kew"), Some(&1));
    /// ```
    pub fn try_insert<K>(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError>
    where
        K: AsBytes,
    {
        let key = Key::new(&key);
        if search_exact(self.root.as_deref(), &key).is_some() {
            debug!(key = %key, "rejected duplicate key");
            return Err(DuplicateKeyError {
                byte_repr: Box::from(key.as_bytes()),
            });
        }

        let InsertResult { new_root, .. } = insert(self.root.take(), &key, value);
        self.root = Some(new_root);
        self.num_entries += 1;

        Ok(())
    }

    /// Returns a reference to the record stored under exactly `key`.
    ///
    /// This lookup keeps no counters and never falls back to a closest match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::PatriciaTrie;
    ///
    /// let mut trie = PatriciaTrie::new();
    /// trie.insert("Toorak", 3142);
    ///
    /// assert_eq!(trie.get("Toorak"), Some(&3142));
    /// assert_eq!(trie.get("Torak"), None);
    /// ```
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsBytes,
    {
        search_exact(self.root.as_deref(), &Key::new(&key))
    }

    /// Search for `key`, returning its record if present, otherwise the record
    /// of the closest stored key.
    ///
    /// The cost of the search is added to `info`. Returns `None` only when the
    /// trie is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::{ComparisonInfo, PatriciaTrie};
    ///
    /// let mut trie = PatriciaTrie::new();
    /// trie.insert("Footscray", 3011);
    /// trie.insert("Flemington", 3031);
    ///
    /// let mut info = ComparisonInfo::new();
    /// assert_eq!(trie.search("Footscray", &mut info), Some(&3011));
    ///
    /// let mut info = ComparisonInfo::new();
    /// assert_eq!(trie.search("Footscary", &mut info), Some(&3011));
    /// assert!(info.string_comparisons > 0);
    /// ```
    pub fn search<K>(&self, key: K, info: &mut ComparisonInfo) -> Option<&V>
    where
        K: AsBytes,
    {
        self.search_entry(key, info).map(|(_, record)| record)
    }

    /// Like [`PatriciaTrie::search`], but also returns the stored key that
    /// matched.
    pub fn search_entry<K>(&self, key: K, info: &mut ComparisonInfo) -> Option<(&[u8], &V)>
    where
        K: AsBytes,
    {
        search(self.root.as_deref(), &Key::new(&key), info)
    }

    /// Scan every stored key and return the one with the smallest edit
    /// distance to `key`, even when `key` itself is stored.
    ///
    /// Each stored key costs one string comparison in `info`. Ties go to the
    /// lexicographically smaller key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::{ComparisonInfo, PatriciaTrie};
    ///
    /// let trie: PatriciaTrie<_> = [("East", 1), ("West", 2)].into_iter().collect();
    ///
    /// let mut info = ComparisonInfo::new();
    /// let closest = trie.find_closest("Best", &mut info).unwrap();
    /// assert_eq!(closest.key, b"East");
    /// assert_eq!(*closest.record, 1);
    /// assert_eq!(info.string_comparisons, 2);
    /// ```
    pub fn find_closest<K>(&self, key: K, info: &mut ComparisonInfo) -> Option<Closest<'_, V>>
    where
        K: AsBytes,
    {
        find_closest(self.root.as_deref(), &Key::new(&key), info)
    }
}

impl<V> Drop for PatriciaTrie<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V: fmt::Debug> fmt::Debug for PatriciaTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatriciaTrie")
            .field("num_entries", &self.num_entries)
            .field("root", &self.root)
            .finish()
    }
}

impl<V> Default for PatriciaTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for PatriciaTrie<V>
where
    K: AsBytes,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for PatriciaTrie<V>
where
    K: AsBytes,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = PatriciaTrie::new();
        trie.extend(iter);
        trie
    }
}
