use crate::aesmode::cipher::BlockCipher;
use crate::aesmode::core::BLOCK_SIZE;

/// ECB encryption: every block transformed independently, no chaining.
/// The caller (the session) has already verified block alignment.
pub(crate) fn encrypt(cipher: &BlockCipher, input: &[u8]) -> Vec<u8> {
    debug_assert!(input.len() % BLOCK_SIZE == 0);
    let mut output = vec![0u8; input.len()];
    for (src, dst) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        let block: &[u8; 16] = src.try_into().unwrap(); // chunks_exact guarantees 16 bytes
        dst.copy_from_slice(&cipher.forward(block));
    }
    output
}

/// ECB decryption.
pub(crate) fn decrypt(cipher: &BlockCipher, input: &[u8]) -> Vec<u8> {
    debug_assert!(input.len() % BLOCK_SIZE == 0);
    let mut output = vec![0u8; input.len()];
    for (src, dst) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        let block: &[u8; 16] = src.try_into().unwrap(); // chunks_exact guarantees 16 bytes
        dst.copy_from_slice(&cipher.inverse(block));
    }
    output
}
