//! The five mode-of-operation state machines. Each one drives the block
//! transform through [`BlockCipher`](crate::aesmode::cipher::BlockCipher)
//! and advances the caller-owned [`ChainState`].

pub(crate) mod cbc;
pub(crate) mod cfb;
pub(crate) mod ctr;
pub(crate) mod ecb;
pub(crate) mod ofb;

use crate::aesmode::core::BLOCK_SIZE;

/// Mutable chaining state carried between calls on one session.
///
/// `chain` is the mode-specific 16-byte feedback value (previous ciphertext
/// for CBC/CFB, previous keystream for OFB, current counter for CTR). For
/// the keystream modes, `ks` buffers the most recent keystream block and
/// `pos` counts how many of its bytes have been consumed, so a call can
/// resume mid-block and chunking never changes the output.
#[derive(Debug)]
pub(crate) struct ChainState {
    pub(crate) chain: [u8; 16],
    pub(crate) ks: [u8; 16],
    pub(crate) pos: usize,
}

impl ChainState {
    pub(crate) fn new(iv: [u8; 16]) -> Self {
        Self {
            chain: iv,
            ks: [0u8; 16],
            pos: BLOCK_SIZE, // no buffered keystream yet
        }
    }
}
