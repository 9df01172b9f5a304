//! Per query cost accounting.

use bytemuck::{Pod, Zeroable};
use std::{fmt, ops::AddAssign};

/// Counters describing the cost of a single trie search.
///
/// The caller owns one of these per query, starts it at zero and reads it back
/// once the search returns. The trie only ever increments the counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct ComparisonInfo {
    /// Number of single bit branch decisions taken while descending.
    pub bit_comparisons: u64,
    /// Number of nodes entered during the exact descent.
    pub node_accesses: u64,
    /// Number of whole key edit distance computations during a closest-match
    /// scan.
    pub string_comparisons: u64,
}

macro_rules! counter_increments {
    ($($field:ident),+) => {
        paste::paste! {
            impl ComparisonInfo {
                $(
                    #[inline]
                    pub(crate) fn [<count_ $field>](&mut self) {
                        self.$field += 1;
                    }
                )+
            }
        }
    };
}

counter_increments!(bit_comparisons, node_accesses, string_comparisons);

impl ComparisonInfo {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::zeroed()
    }

    /// Returns true if no counter has been incremented.
    pub fn is_zero(&self) -> bool {
        *self == Self::zeroed()
    }
}

impl AddAssign for ComparisonInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.bit_comparisons += rhs.bit_comparisons;
        self.node_accesses += rhs.node_accesses;
        self.string_comparisons += rhs.string_comparisons;
    }
}

/// Formats as `b{bit} n{node} s{string}`.
impl fmt::Display for ComparisonInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "b{} n{} s{}",
            self.bit_comparisons, self.node_accesses, self.string_comparisons
        )
    }
}
