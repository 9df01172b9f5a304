//! Bit level access to byte strings.
//!
//! Bytes are read as one continuous bit stream, starting at the most
//! significant bit of byte 0.

/// Number of bits in a single key byte.
pub const BITS_PER_BYTE: usize = 8;

/// Number of bytes needed to hold `num_bits` bits.
pub const fn bytes_for_bits(num_bits: usize) -> usize {
    num_bits.div_ceil(BITS_PER_BYTE)
}

/// Return the bit (`0` or `1`) at the global `bit_index` of `bytes`.
///
/// # Panics
///
///  - Panics if `bytes` is empty.
///  - Panics if `bit_index` addresses a byte past the end of `bytes`.
///
/// # Examples
///
/// ```rust
/// use patricia_dict::get_bit;
///
/// // 'B' = 0b0100_0010
/// assert_eq!(get_bit(b"B", 1), 1);
/// assert_eq!(get_bit(b"B", 6), 1);
/// assert_eq!(get_bit(b"B", 7), 0);
/// ```
#[inline]
pub fn get_bit(bytes: &[u8], bit_index: usize) -> u8 {
    assert!(!bytes.is_empty(), "cannot read a bit from an empty buffer");

    let byte_index = bit_index / BITS_PER_BYTE;
    assert!(
        byte_index < bytes.len(),
        "bit index [{bit_index}] is past the end of a [{}] byte buffer",
        bytes.len()
    );

    let offset = BITS_PER_BYTE - 1 - (bit_index % BITS_PER_BYTE);
    (bytes[byte_index] >> offset) & 1
}

/// Copy `num_bits` bits of `source`, starting from `start_bit`, into a new
/// buffer that is exactly large enough to hold them.
///
/// Bit `i` of the stem is bit `start_bit + i` of the source. Unused bits in
/// the final byte are zero.
///
/// # Panics
///
///  - Panics if `num_bits` is zero.
///  - Panics if the requested range reads past the end of `source`.
///
/// # Examples
///
/// ```rust
/// use patricia_dict::extract_stem;
///
/// // "AB" = 0b0100_0001 0b0100_0010
/// assert_eq!(&*extract_stem(b"AB", 0, 6), &[0b0100_0000]);
/// assert_eq!(&*extract_stem(b"AB", 4, 8), &[0b0001_0100]);
/// ```
pub fn extract_stem(source: &[u8], start_bit: usize, num_bits: usize) -> Box<[u8]> {
    assert!(num_bits > 0, "a stem must contain at least one bit");

    let mut stem = vec![0u8; bytes_for_bits(num_bits)].into_boxed_slice();
    for idx in 0..num_bits {
        if get_bit(source, start_bit + idx) == 1 {
            let offset = BITS_PER_BYTE - 1 - (idx % BITS_PER_BYTE);
            stem[idx / BITS_PER_BYTE] |= 1 << offset;
        }
    }

    stem
}
