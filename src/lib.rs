#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! PATRICIA trie dictionary with exact and closest-match lookup
//!
//! Keys are indexed bit by bit in a path-compressed binary trie. A lookup
//! that finds no exact match falls back to the stored key with the smallest
//! Levenshtein distance to the query, and every lookup reports its cost in a
//! [`ComparisonInfo`].
//!
//! # References
//!
//!  - Morrison, D. R. (1968). PATRICIA: Practical Algorithm To Retrieve
//!    Information Coded in Alphanumeric. Journal of the ACM, 15(4), 514-534.

mod bits;
mod bytes;
mod collections;
mod distance;
mod nodes;

#[cfg(any(test, feature = "test-helpers"))]
#[doc(hidden)]
pub mod tests_common;

pub use bits::*;
pub use bytes::*;
pub use collections::*;
pub use distance::*;
pub use nodes::{visitor, *};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
