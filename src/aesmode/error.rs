use thiserror::Error;

use crate::aesmode::mode::Mode;

/// Crate-wide Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised during session construction or a single encrypt/decrypt
/// call. None of these are transient; they all indicate a caller mistake.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build a key from a slice that is not 16, 24, or 32 bytes.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Mode string did not name one of the five supported modes.
    #[error("unsupported cipher mode: {0:?}")]
    InvalidMode(String),

    /// No IV was supplied for a mode that requires one.
    #[error("{mode} mode requires a 16-byte IV")]
    MissingIv { mode: Mode },

    /// An IV was supplied but is not exactly 16 bytes.
    #[error("IV for {mode} mode must be 16 bytes, got {len}")]
    InvalidIv { mode: Mode, len: usize },

    /// ECB and CBC process whole blocks only; the offending call left the
    /// session state untouched.
    #[error("buffer length {len} is not a multiple of 16 bytes ({mode} mode)")]
    UnalignedBuffer { mode: Mode, len: usize },
}
