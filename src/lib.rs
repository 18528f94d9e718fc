//! AES (128/192/256-bit keys) with five modes of operation (ECB, CBC,
//! CFB-128, OFB, CTR) exposed through a stateful [`Session`] that can be fed
//! data chunk by chunk and [`reset`](Session::reset) back to its initial IV.
//! The crate is a pure transform: key/IV generation, padding, and
//! authentication are caller concerns.

mod aesmode;

pub use aesmode::{BLOCK_SIZE, Error, Key, Mode, Result, Session};
