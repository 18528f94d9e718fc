use crate::aesmode::cipher::BlockCipher;
use crate::aesmode::core::BLOCK_SIZE;
use crate::aesmode::modes::ChainState;

/// OFB keystream application, identical for encryption and decryption.
/// The keystream block itself feeds forward, independent of the data, so
/// the chaining value never depends on the input.
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
        st.chain = st.ks;
        let n = (input.len() - i).min(BLOCK_SIZE);
        for j in 0..n {
            output.push(input[i + j] ^ st.ks[j]);
        }
        st.pos = n;
        i += n;
    }

    output
}
