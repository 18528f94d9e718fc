use crate::aesmode::cipher::BlockCipher;
use crate::aesmode::core::BLOCK_SIZE;

/// CBC encryption: each plaintext block is XORed with the previous
/// ciphertext block (the IV for the first) before the forward transform.
/// Alignment is verified by the session before any state is touched.
pub(crate) fn encrypt(cipher: &BlockCipher, chain: &mut [u8; 16], input: &[u8]) -> Vec<u8> {
    debug_assert!(input.len() % BLOCK_SIZE == 0);
    let mut output = vec![0u8; input.len()];
    for (src, dst) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut block = *chain;
        for (b, s) in block.iter_mut().zip(src) {
            *b ^= s;
        }
        *chain = cipher.forward(&block);
        dst.copy_from_slice(chain);
    }
    output
}

/// CBC decryption: the inverse transform of each ciphertext block is XORed
/// with the previous ciphertext block; the chaining value is always the
/// ciphertext just consumed.
pub(crate) fn decrypt(cipher: &BlockCipher, chain: &mut [u8; 16], input: &[u8]) -> Vec<u8> {
    debug_assert!(input.len() % BLOCK_SIZE == 0);
    let mut output = vec![0u8; input.len()];
    for (src, dst) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        let ct: &[u8; 16] = src.try_into().unwrap(); // chunks_exact guarantees 16 bytes
        let mut block = cipher.inverse(ct);
        for (b, c) in block.iter_mut().zip(chain.iter()) {
            *b ^= c;
        }
        dst.copy_from_slice(&block);
        *chain = *ct;
    }
    output
}
