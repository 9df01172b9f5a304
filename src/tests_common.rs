//! Helpers shared by the unit tests, integration tests, benchmarks and fuzz
//! targets.

use crate::{edit_distance, insert, AsBytes, Key, Node};
use rand::Rng;
use std::iter;

/// Suburb names used as a realistic key set.
pub const SUBURBS: &[&str] = &[
    "Abbotsford",
    "Albert Park",
    "Alphington",
    "Armadale",
    "Ascot Vale",
    "Balwyn",
    "Balwyn North",
    "Brighton",
    "Brighton East",
    "Brunswick",
    "Brunswick East",
    "Brunswick West",
    "Camberwell",
    "Carlton",
    "Carlton North",
    "Clifton Hill",
    "Coburg",
    "Collingwood",
    "Docklands",
    "East Melbourne",
    "Elsternwick",
    "Elwood",
    "Essendon",
    "Fairfield",
    "Fitzroy",
    "Fitzroy North",
    "Flemington",
    "Footscray",
    "Hawthorn",
    "Hawthorn East",
    "Kensington",
    "Kew",
    "Kew East",
    "Malvern",
    "Malvern East",
    "Melbourne",
    "Northcote",
    "Parkville",
    "Prahran",
    "Richmond",
    "South Melbourne",
    "South Yarra",
    "Southbank",
    "St Kilda",
    "St Kilda East",
    "Thornbury",
    "Toorak",
    "West Melbourne",
    "Windsor",
    "Yarraville",
];

/// Generate keys where each is one byte longer than the last and shares all
/// but its final byte with the run of `a`s before it.
///
/// ```text
/// z
/// az
/// aaz
/// aaaz
/// ```
pub fn generate_keys_skewed(max_len: usize) -> impl Iterator<Item = Box<[u8]>> {
    iter::successors(Some(vec![b'z'; 1].into_boxed_slice()), move |prev| {
        if prev.len() < max_len {
            let mut key = vec![b'a'; prev.len()];
            key.push(b'z');
            Some(key.into_boxed_slice())
        } else {
            None
        }
    })
}

/// Generate keys where each extends the previous one by a single byte.
///
/// ```text
/// a
/// aa
/// aaa
/// ```
pub fn generate_keys_nested(max_len: usize) -> impl Iterator<Item = Box<[u8]>> {
    (1..=max_len).map(|len| vec![b'a'; len].into_boxed_slice())
}

/// Generate `count` random keys of `1..=max_len` bytes drawn from `alphabet`.
///
/// Keys may repeat.
pub fn generate_random_keys<R: Rng>(
    rng: &mut R,
    count: usize,
    max_len: usize,
    alphabet: &[u8],
) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len);
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect()
}

/// Build a tree by inserting every entry in order.
pub fn setup_tree_from_entries<K, V>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Option<Box<Node<V>>>
where
    K: AsBytes,
{
    entries.into_iter().fold(None, |root, (key, value)| {
        Some(insert(root, &Key::new(&key), value).new_root)
    })
}

/// Find the closest key to `query` by scanning every key, using the same
/// `(distance, key)` ordering as the trie.
///
/// Returns `None` if `keys` is empty.
pub fn brute_force_closest<'k, K>(keys: &'k [K], query: &[u8]) -> Option<(&'k [u8], usize)>
where
    K: AsBytes,
{
    keys.iter()
        .map(|key| {
            let key = key.as_bytes();
            (edit_distance(key, query), key)
        })
        .min()
        .map(|(distance, key)| (key, distance))
}
