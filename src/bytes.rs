use crate::bits::{get_bit, BITS_PER_BYTE};
use std::{
    ffi::{CStr, CString},
    fmt,
};

/// Any type implementing `AsBytes` can be decomposed into bytes.
///
/// The primary purpose of this trait is to allow different types to be used as
/// keys on the [`crate::PatriciaTrie`] type.
pub trait AsBytes {
    /// View the current value as a byte array.
    fn as_bytes(&self) -> &[u8];
}

impl AsBytes for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> AsBytes for [u8; N] {
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsBytes for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

/// C `char` buffers, as produced by FFI record loaders.
impl AsBytes for [i8] {
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self)
    }
}

impl<const N: usize> AsBytes for [i8; N] {
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl AsBytes for Vec<i8> {
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl AsBytes for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl AsBytes for String {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl AsBytes for CStr {
    fn as_bytes(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl AsBytes for CString {
    fn as_bytes(&self) -> &[u8] {
        CString::as_bytes(self)
    }
}

impl AsBytes for Key {
    fn as_bytes(&self) -> &[u8] {
        Key::as_bytes(self)
    }
}

impl<'a, T> AsBytes for &'a T
where
    T: AsBytes + ?Sized,
{
    fn as_bytes(&self) -> &[u8] {
        <T as AsBytes>::as_bytes(self)
    }
}

impl<T> AsBytes for Box<T>
where
    T: AsBytes + ?Sized,
{
    fn as_bytes(&self) -> &[u8] {
        <T as AsBytes>::as_bytes(self)
    }
}

/// An owned trie key with C string semantics.
///
/// The key ends at the first NUL byte of the source bytes (if any), and the
/// stored buffer always carries a trailing NUL terminator. Reading the bit
/// directly after the last key byte therefore yields `0`, which is what the
/// trie relies on when a query key runs out while descending.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Box<[u8]>);

impl Key {
    /// Copy the given bytes into a new key, truncating at the first NUL.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patricia_dict::Key;
    ///
    /// let key = Key::new("Carlton\0North");
    /// assert_eq!(key.as_bytes(), b"Carlton");
    /// assert_eq!(key.bit_len(), 56);
    /// ```
    pub fn new<Q: AsBytes + ?Sized>(source: &Q) -> Self {
        let bytes = source.as_bytes();
        let len = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());

        let mut buffer = Vec::with_capacity(len + 1);
        buffer.extend_from_slice(&bytes[..len]);
        buffer.push(0);

        Key(buffer.into_boxed_slice())
    }

    /// The key bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..self.0.len() - 1]
    }

    /// The key bytes, including the NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.0
    }

    /// Number of key bytes, not counting the terminator.
    pub fn len(&self) -> usize {
        self.0.len() - 1
    }

    /// Returns true if the key has no bytes before its terminator.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of significant bits in the key.
    pub fn bit_len(&self) -> usize {
        self.len() * BITS_PER_BYTE
    }

    /// Number of readable bits, including the terminator byte.
    pub fn readable_bits(&self) -> usize {
        self.0.len() * BITS_PER_BYTE
    }

    /// Read the bit at `bit_index`, most significant bit of each byte first.
    ///
    /// # Panics
    ///
    /// Panics if `bit_index` is past the terminator byte.
    pub fn bit(&self, bit_index: usize) -> u8 {
        get_bit(&self.0, bit_index)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::new(value)
    }
}

impl From<&[u8]> for Key {
    fn from(value: &[u8]) -> Self {
        Key::new(value)
    }
}
