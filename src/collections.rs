//! Trie-based collections

pub mod trie;

#[doc(inline)]
pub use trie::{DuplicateKeyError, PatriciaTrie};
