//! Trie node lookup and manipulation

use crate::{bits::get_bit, Key};

mod closest;
pub use closest::*;

mod deallocate;
pub use deallocate::*;

mod insert;
pub use insert::*;

mod lookup;
pub use lookup::*;

/// Return the first bit index below `prefix_bits` at which `prefix` and `key`
/// disagree, or `prefix_bits` if every one of those bits matches.
///
/// All `prefix_bits` positions are inspected before a full match is
/// reported. Positions past the end of the key (including its terminator)
/// count as a mismatch.
///
/// # Panics
///
///  - Panics if `prefix` holds fewer than `prefix_bits` bits.
///
/// # Examples
///
/// ```rust
/// use patricia_dict::{find_mismatch_bit, Key};
///
/// // 'E' = 0b0100_0101, 'W' = 0b0101_0111
/// assert_eq!(find_mismatch_bit(b"East", &Key::new("West"), 32), 3);
/// assert_eq!(find_mismatch_bit(b"East", &Key::new("Easy"), 24), 24);
/// ```
pub fn find_mismatch_bit(prefix: &[u8], key: &Key, prefix_bits: usize) -> usize {
    let key_bits = key.readable_bits();
    for bit_index in 0..prefix_bits {
        if bit_index >= key_bits || get_bit(prefix, bit_index) != key.bit(bit_index) {
            return bit_index;
        }
    }

    prefix_bits
}
