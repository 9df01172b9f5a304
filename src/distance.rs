//! Levenshtein edit distance between byte strings.

use std::mem;

/// Compute one row of the edit distance table.
///
/// `old` is the row for the previous byte of the left-hand string, `new` is
/// filled with the row for `c`. Both rows are `key.len() + 1` long.
fn edit_distance_row(key: &[u8], c: u8, old: &[usize], new: &mut [usize]) {
    debug_assert_eq!(old.len(), new.len());
    debug_assert_eq!(key.len() + 1, old.len());

    new[0] = old[0] + 1;
    for idx in 1..new.len() {
        new[idx] = if key[idx - 1] == c {
            (old[idx] + 1).min(new[idx - 1] + 1).min(old[idx - 1])
        } else {
            1 + old[idx].min(new[idx - 1]).min(old[idx - 1])
        };
    }
}

/// Return the Levenshtein distance between `a` and `b`: the minimum number of
/// single byte insertions, deletions and substitutions turning `a` into `b`.
///
/// Runs in `O(a.len() * b.len())` time using two rows of
/// `b.len() + 1` entries.
///
/// # Examples
///
/// ```rust
/// use patricia_dict::edit_distance;
///
/// assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
/// assert_eq!(edit_distance(b"", b"abc"), 3);
/// assert_eq!(edit_distance(b"abc", b"abc"), 0);
/// ```
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let mut old_row: Vec<usize> = (0..=b.len()).collect();
    let mut new_row = vec![0usize; b.len() + 1];

    for c in a {
        edit_distance_row(b, *c, &old_row, &mut new_row);
        mem::swap(&mut old_row, &mut new_row);
    }

    old_row[b.len()]
}
