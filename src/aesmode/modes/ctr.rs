use crate::aesmode::cipher::BlockCipher;
use crate::aesmode::core::BLOCK_SIZE;
use crate::aesmode::modes::ChainState;

/// CTR keystream application, identical for encryption and decryption.
/// The counter advances by one full block even when the trailing bytes only
/// partially consume the keystream; the unused bytes stay buffered for the
/// next call.
pub(crate) fn apply(cipher: &BlockCipher, st: &mut ChainState, input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() && st.pos < BLOCK_SIZE {
        output.push(input[i] ^ st.ks[st.pos]);
        st.pos += 1;
        i += 1;
    }

    while i < input.len() {
        st.ks = cipher.forward(&st.chain);
        ctr_inc(&mut st.chain);
        let n = (input.len() - i).min(BLOCK_SIZE);
        for j in 0..n {
            output.push(input[i + j] ^ st.ks[j]);
        }
        st.pos = n;
        i += n;
    }

    output
}

/// Standard incrementing function from NIST SP 800-38A, Appendix B: the
/// counter block as a 128-bit big-endian integer plus one, wrapping at
/// 2^128.
pub(crate) fn ctr_inc(counter: &mut [u8; 16]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}
