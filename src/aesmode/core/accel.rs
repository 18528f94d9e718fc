//! AES-NI fast path for the block transform. The schedule is expanded in
//! software once and loaded into SIMD registers here; decryption uses the
//! equivalent inverse schedule (AESIMC applied to the middle round keys) so
//! AESDEC can consume it directly. Output is byte-identical to the
//! reference tables.

use core::arch::x86_64::*;

#[derive(Debug)]
pub(crate) struct AesNi {
    enc: [__m128i; 15],
    dec: [__m128i; 15],
    rounds: usize,
}

impl AesNi {
    /// Probes the CPU once; returns `None` when AES-NI is unavailable so the
    /// caller falls back to the reference transform.
    pub(crate) fn detect(round_keys: &[[u8; 16]]) -> Option<Self> {
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
            // Safety: guarded by the feature probe above.
            Some(unsafe { Self::load(round_keys) })
        } else {
            None
        }
    }

    #[target_feature(enable = "aes,sse2")]
    unsafe fn load(round_keys: &[[u8; 16]]) -> Self {
        unsafe {
            let rounds = round_keys.len() - 1;
            let zero = _mm_setzero_si128();
            let mut enc = [zero; 15];
            let mut dec = [zero; 15];

            for (slot, rk) in enc.iter_mut().zip(round_keys) {
                *slot = _mm_loadu_si128(rk.as_ptr() as *const __m128i);
            }

            // Equivalent inverse cipher schedule: reversed order, with
            // InvMixColumns folded into the middle round keys.
            dec[0] = enc[rounds];
            for i in 1..rounds {
                dec[i] = _mm_aesimc_si128(enc[rounds - i]);
            }
            dec[rounds] = enc[0];

            Self { enc, dec, rounds }
        }
    }

    #[inline]
    pub(crate) fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        // Safety: self exists only if `detect` saw AES-NI support.
        unsafe { self.encrypt_inner(block) }
    }

    #[inline]
    pub(crate) fn decrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        // Safety: as above.
        unsafe { self.decrypt_inner(block) }
    }

    #[target_feature(enable = "aes,sse2")]
    unsafe fn encrypt_inner(&self, block: &[u8; 16]) -> [u8; 16] {
        unsafe {
            let mut state = _mm_loadu_si128(block.as_ptr() as *const __m128i);
            state = _mm_xor_si128(state, self.enc[0]);
            for rk in &self.enc[1..self.rounds] {
                state = _mm_aesenc_si128(state, *rk);
            }
            state = _mm_aesenclast_si128(state, self.enc[self.rounds]);

            let mut out = [0u8; 16];
            _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, state);
            out
        }
    }

    #[target_feature(enable = "aes,sse2")]
    unsafe fn decrypt_inner(&self, block: &[u8; 16]) -> [u8; 16] {
        unsafe {
            let mut state = _mm_loadu_si128(block.as_ptr() as *const __m128i);
            state = _mm_xor_si128(state, self.dec[0]);
            for rk in &self.dec[1..self.rounds] {
                state = _mm_aesdec_si128(state, *rk);
            }
            state = _mm_aesdeclast_si128(state, self.dec[self.rounds]);

            let mut out = [0u8; 16];
            _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, state);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aesmode::cipher::expand_key;
    use crate::aesmode::core::{decrypt_block, encrypt_block};
    use crate::aesmode::error::Result;
    use crate::aesmode::key::Key;

    // Hardware and reference paths must agree byte for byte across every key
    // size; skipped silently on CPUs without AES-NI.
    #[test]
    fn matches_reference_transform() -> Result<()> {
        for len in [16usize, 24, 32] {
            let key_bytes: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(17)).collect();
            let schedule = expand_key(&Key::try_from_slice(&key_bytes)?);
            let Some(ni) = AesNi::detect(&schedule) else {
                return Ok(());
            };

            let mut block = [0u8; 16];
            for trial in 0u8..32 {
                for (i, byte) in block.iter_mut().enumerate() {
                    *byte = byte.wrapping_add(trial ^ i as u8).wrapping_mul(31);
                }
                let ct = ni.encrypt_block(&block);
                assert_eq!(ct, encrypt_block(&block, &schedule));
                assert_eq!(ni.decrypt_block(&ct), decrypt_block(&ct, &schedule));
                assert_eq!(ni.decrypt_block(&ct), block);
            }
        }
        Ok(())
    }
}
