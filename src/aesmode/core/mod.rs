//! Reference implementation of the 16-byte AES block transform. Exports
//! `encrypt_block` and `decrypt_block`; the hardware fast path lives in
//! `accel` and is selected by [`BlockCipher`](crate::aesmode::cipher).

pub(crate) mod constants;
mod decryption;
mod encryption;
mod util;

#[cfg(target_arch = "x86_64")]
pub(crate) mod accel;

pub(crate) use decryption::decrypt_block;
pub(crate) use encryption::encrypt_block;

/// Size in bytes of the atomic unit the cipher operates on.
pub const BLOCK_SIZE: usize = 16;
