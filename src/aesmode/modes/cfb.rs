use crate::aesmode::cipher::BlockCipher;
use crate::aesmode::core::BLOCK_SIZE;
use crate::aesmode::modes::ChainState;

/// CFB-128 encryption. The keystream is the forward transform of the
/// feedback register, and the *ciphertext* bytes refill the register as
/// they are produced, so a partial block can be resumed on the next call.
pub(crate) fn encrypt(cipher: &BlockCipher, st: &mut ChainState, input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut i = 0;

    // drain keystream left over from a previous call
    while i < input.len() && st.pos < BLOCK_SIZE {
        let c = input[i] ^ st.ks[st.pos];
        st.chain[st.pos] = c;
        output.push(c);
        st.pos += 1;
        i += 1;
    }

    while i < input.len() {
        st.ks = cipher.forward(&st.chain);
        let n = (input.len() - i).min(BLOCK_SIZE);
        for j in 0..n {
            let c = input[i + j] ^ st.ks[j];
            st.chain[j] = c;
            output.push(c);
        }
        st.pos = n;
        i += n;
    }

    output
}

/// CFB-128 decryption. Same keystream, but the register is refilled with
/// the incoming ciphertext rather than the recovered plaintext.
pub(crate) fn decrypt(cipher: &BlockCipher, st: &mut ChainState, input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() && st.pos < BLOCK_SIZE {
        output.push(input[i] ^ st.ks[st.pos]);
        st.chain[st.pos] = input[i];
        st.pos += 1;
        i += 1;
    }

    while i < input.len() {
        st.ks = cipher.forward(&st.chain);
        let n = (input.len() - i).min(BLOCK_SIZE);
        for j in 0..n {
            output.push(input[i + j] ^ st.ks[j]);
            st.chain[j] = input[i + j];
        }
        st.pos = n;
        i += n;
    }

    output
}
