use crate::{
    visitor::{Visitable, Visitor},
    Node,
};
use std::{
    fmt, mem,
    ops::{Range, RangeInclusive},
};

/// A visitor of the trie which collects statistics about the tree, like
/// how many split nodes and how many records it holds.
#[derive(Debug)]
pub struct TreeStatsCollector {
    stats: TreeStats,
    current_depth: usize,
}

impl TreeStatsCollector {
    /// Run the tree stats collection on the given root node, then return the
    /// accumulated stats.
    pub fn collect<V>(root: &Node<V>) -> TreeStats {
        let mut collector = TreeStatsCollector {
            stats: TreeStats::new(),
            current_depth: 0,
        };

        root.visit_with(&mut collector);

        collector.stats
    }

    /// Iterate through the given tree and return the number of nodes holding
    /// a record.
    pub fn count_records<V>(root: &Node<V>) -> usize {
        struct RecordCounter;

        impl<V> Visitor<V> for RecordCounter {
            type Output = usize;

            fn default_output(&self) -> Self::Output {
                0
            }

            fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
                o1 + o2
            }

            fn visit_terminal(&mut self, t: &Node<V>) -> Self::Output {
                t.super_visit_with(self) + 1
            }

            fn visit_leaf(&mut self, _t: &Node<V>) -> Self::Output {
                1
            }
        }

        root.visit_with(&mut RecordCounter)
    }

    fn record_node<V>(&mut self, t: &Node<V>) {
        self.current_depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.current_depth);
        t.super_visit_with(self);
        self.current_depth -= 1;

        self.stats.num_children_dist.record(t.num_children() as u64);
        self.stats.total_node_bytes += mem::size_of_val(t) + t.prefix().len();
    }
}

/// Collection of stats about the shape of a trie.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    split_count: u64,
    terminal_count: u64,
    leaf_count: u64,
    num_children_dist: ExactHistogram<3>,
    max_depth: usize,
    total_key_bytes: usize,
    total_split_prefix_bytes: usize,
    total_node_bytes: usize,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DisplayAsDebug<'a, T>(&'a T);

        impl<T: fmt::Display> fmt::Debug for DisplayAsDebug<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                <T as fmt::Display>::fmt(self.0, f)
            }
        }

        f.debug_struct("TreeStats")
            .field("split_count", &self.split_count)
            .field("terminal_count", &self.terminal_count)
            .field("leaf_count", &self.leaf_count)
            .field("num_children", &DisplayAsDebug(&self.num_children_dist))
            .field("max_depth", &self.max_depth)
            .field("total_key_bytes", &self.total_key_bytes)
            .field("total_split_prefix_bytes", &self.total_split_prefix_bytes)
            .field("total_node_bytes", &self.total_node_bytes)
            .finish()
    }
}

impl TreeStats {
    /// Create an empty collection of tree statistics.
    fn new() -> Self {
        Self {
            split_count: 0,
            terminal_count: 0,
            leaf_count: 0,
            num_children_dist: ExactHistogram::new(0..3),
            max_depth: 0,
            total_key_bytes: 0,
            total_split_prefix_bytes: 0,
            total_node_bytes: 0,
        }
    }

    /// Number of split nodes present in the tree.
    pub fn split_count(&self) -> u64 {
        self.split_count
    }

    /// Number of record nodes that also have children.
    pub fn terminal_count(&self) -> u64 {
        self.terminal_count
    }

    /// Number of childless record nodes.
    pub fn leaf_count(&self) -> u64 {
        self.leaf_count
    }

    /// Number of records stored in the tree.
    pub fn record_count(&self) -> u64 {
        self.terminal_count + self.leaf_count
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> u64 {
        self.num_children_dist.total_count()
    }

    /// Number of nodes on the longest path from the root, counting both ends.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The total number of bytes of keys stored in the tree.
    pub fn total_key_bytes(&self) -> usize {
        self.total_key_bytes
    }

    /// The total number of prefix bytes held by split nodes.
    pub fn total_split_prefix_bytes(&self) -> usize {
        self.total_split_prefix_bytes
    }

    /// The total number of bytes used by nodes and their prefix buffers.
    pub fn total_node_bytes(&self) -> usize {
        self.total_node_bytes
    }

    /// The number of missing children across all nodes, out of the two each
    /// node could hold.
    pub fn empty_capacity(&self) -> u64 {
        self.num_children_dist
            .entries()
            .map(|(value, count)| count * (2 - value))
            .sum()
    }

    /// Returns the number of bytes of overhead per byte of key stored in the
    /// tree.
    ///
    /// Overhead in this case is every node byte that is not a key byte.
    pub fn overhead_per_key_byte(&self) -> f64 {
        ((self.total_node_bytes - self.total_key_bytes) as f64) / (self.total_key_bytes as f64)
    }
}

impl<V> Visitor<V> for TreeStatsCollector {
    type Output = ();

    fn default_output(&self) -> Self::Output {}

    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {}

    fn visit_split(&mut self, t: &Node<V>) -> Self::Output {
        self.record_node(t);
        self.stats.split_count += 1;
        self.stats.total_split_prefix_bytes += t.prefix().len();
    }

    fn visit_terminal(&mut self, t: &Node<V>) -> Self::Output {
        self.record_node(t);
        self.stats.terminal_count += 1;
        self.stats.total_key_bytes += t.prefix().len();
    }

    fn visit_leaf(&mut self, t: &Node<V>) -> Self::Output {
        self.record_node(t);
        self.stats.leaf_count += 1;
        self.stats.total_key_bytes += t.prefix().len();
    }
}

/// This represents a discrete distribution of data with exactly `NUM_VALUES`
/// unique values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExactHistogram<const NUM_VALUES: usize> {
    value_range: Range<u64>,
    counts: [u64; NUM_VALUES],
    total_count: u64,
}

impl<const NUM_VALUES: usize> fmt::Display for ExactHistogram<NUM_VALUES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();

        let mut zeros: Vec<RangeInclusive<u64>> = vec![];
        map.entries(self.entries().filter(|(value, count)| {
            let is_zero = *count == 0;

            if is_zero {
                match zeros.last_mut() {
                    Some(last) if *last.end() + 1 == *value => {
                        *last = (*last.start())..=(*value);
                    },
                    _ => zeros.push(*value..=*value),
                }
            }

            !is_zero
        }));

        if !zeros.is_empty() {
            map.entry(
                &"zeros",
                &zeros
                    .into_iter()
                    .map(|range| {
                        if range.start() == range.end() {
                            range.start().to_string()
                        } else {
                            format!("{}..={}", range.start(), range.end())
                        }
                    })
                    .collect::<Vec<_>>(),
            );
        }

        map.entry(&"total", &self.total_count());

        map.finish()
    }
}

impl<const NUM_VALUES: usize> ExactHistogram<NUM_VALUES> {
    /// Create a new histogram that will accept the given range of values.
    const fn new(value_range: Range<u64>) -> ExactHistogram<NUM_VALUES> {
        assert!((value_range.end - value_range.start) as usize == NUM_VALUES);

        Self {
            value_range,
            counts: [0; NUM_VALUES],
            total_count: 0,
        }
    }

    /// Record a value in the histogram, incrementing its count by 1.
    ///
    /// # Panics
    ///
    /// This method will panic if the given value is not in the `value_range`
    /// that this histogram was created with.
    fn record(&mut self, value: u64) {
        assert!(
            self.value_range.contains(&value),
            "Value was not in expected range [{}, {}): {value}",
            self.value_range.start,
            self.value_range.end,
        );

        self.counts[(value - self.value_range.start) as usize] += 1;
        self.total_count += 1;
    }

    /// Return an iterator over the pairs of `(value, count)`, including
    /// `count`s of 0.
    fn entries(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(idx, count)| (idx as u64 + self.value_range.start, *count))
    }

    /// Return the total number of recorded values
    fn total_count(&self) -> u64 {
        self.total_count
    }
}
