//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or
//! 256 bits. The key length fixes the round count used by the cipher.

use crate::aesmode::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// A validated AES key. Built from a byte slice that is 16, 24, or 32 bytes
/// long; any other length is rejected at construction so the key schedule
/// itself never fails.
///
/// ## Examples
/// ```
/// # fn main() -> aesmode::Result<()> {
/// use aesmode::Key;
///
/// let bytes: [u8; 32] = [
///     0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///     0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///     0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///     0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E,
/// ];
/// let k128 = Key::try_from_slice(&bytes[..16])?;
/// let k192 = Key::try_from_slice(&bytes[..24])?;
/// let k256 = Key::try_from_slice(&bytes[..32])?;
///
/// assert_eq!(k128.as_bytes(), &bytes[..16]);
/// assert_eq!(k192.as_bytes(), &bytes[..24]);
/// assert_eq!(k256.as_bytes(), &bytes[..32]);
///
/// // Anything other than 16, 24, or 32 bytes is an InvalidKeyLength error.
/// assert!(Key::try_from_slice(&bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Returns an
    /// [`InvalidKeyLength`](Error::InvalidKeyLength) error unless the slice
    /// is exactly 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().unwrap()), // match condition guarantees safe unwrap
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().unwrap()),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().unwrap()),
            },
            _ => return Err(Error::InvalidKeyLength { len: bytes.len() }),
        })
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Number of cipher rounds for this key size (10, 12, or 14).
    pub fn rounds(&self) -> usize {
        self.as_bytes().len() / 4 + 6
    }
}
