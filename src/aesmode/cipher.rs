use crate::aesmode::core::{decrypt_block, encrypt_block};
use crate::aesmode::key::Key;

use crate::aesmode::core::constants::{RCON, SBOX};

#[cfg(target_arch = "x86_64")]
use crate::aesmode::core::accel::AesNi;

/// AES key schedule. Returns Nr+1 round keys (11, 13, or 15 for AES-128,
/// AES-192, and AES-256); the extra one is the initial whitening key.
///
/// Variable names follow FIPS-197: Nk is the key size in 32-bit words, Nr
/// the round count, w the expanded word array.
pub(crate) fn expand_key(key: &Key) -> Vec<[u8; 16]> {
    let key = key.as_bytes();
    let nk = key.len() / 4;
    let nr = nk + 6;
    let nw = (nr + 1) * 4;

    let mut w: Vec<[u8; 4]> = Vec::with_capacity(nw);
    for chunk in key.chunks_exact(4) {
        w.push(chunk.try_into().unwrap()); // chunks_exact guarantees 4 bytes
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            // RotWord, SubWord, and the round-constant XOR on the first byte
            temp = [
                SBOX[temp[1] as usize] ^ RCON[i / nk],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
                SBOX[temp[0] as usize],
            ];
        } else if nk == 8 && i % nk == 4 {
            // AES-256 applies an extra SubWord mid-cycle
            temp = [
                SBOX[temp[0] as usize],
                SBOX[temp[1] as usize],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
            ];
        }
        let prev = w[i - nk];
        w.push([
            temp[0] ^ prev[0],
            temp[1] ^ prev[1],
            temp[2] ^ prev[2],
            temp[3] ^ prev[3],
        ]);
    }

    // regroup words into 16-byte round keys
    let mut round_keys = vec![[0u8; 16]; nr + 1];
    for (round, rk) in round_keys.iter_mut().enumerate() {
        for col in 0..4 {
            rk[col * 4..col * 4 + 4].copy_from_slice(&w[round * 4 + col]);
        }
    }
    round_keys
}

/// The block transform behind every mode: a forward/inverse pair over one
/// 16-byte block, backed either by the reference tables or by AES-NI.
///
/// The backend is chosen once at construction; the mode engine depends only
/// on `forward`/`inverse` and never sees which implementation answers.
#[derive(Debug)]
pub(crate) struct BlockCipher {
    round_keys: Vec<[u8; 16]>,
    #[cfg(target_arch = "x86_64")]
    ni: Option<AesNi>,
}

impl BlockCipher {
    /// Expands the schedule and probes for hardware support.
    pub(crate) fn new(key: &Key) -> Self {
        let round_keys = expand_key(key);
        #[cfg(target_arch = "x86_64")]
        let ni = AesNi::detect(&round_keys);
        Self {
            round_keys,
            #[cfg(target_arch = "x86_64")]
            ni,
        }
    }

    /// Reference-tables-only construction; used to verify that acceleration
    /// is observationally transparent.
    #[cfg(test)]
    pub(crate) fn software_only(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
            #[cfg(target_arch = "x86_64")]
            ni: None,
        }
    }

    #[inline]
    pub(crate) fn forward(&self, block: &[u8; 16]) -> [u8; 16] {
        #[cfg(target_arch = "x86_64")]
        if let Some(ni) = &self.ni {
            return ni.encrypt_block(block);
        }
        encrypt_block(block, &self.round_keys)
    }

    #[inline]
    pub(crate) fn inverse(&self, block: &[u8; 16]) -> [u8; 16] {
        #[cfg(target_arch = "x86_64")]
        if let Some(ni) = &self.ni {
            return ni.decrypt_block(block);
        }
        decrypt_block(block, &self.round_keys)
    }
}
