use super::constants::SBOX_INV;
use super::util::{add_round_key, dbl};

/// Inverse AES permutation over one 16-byte block. Walks the forward
/// schedule in reverse, applying the dual of each round operation.
#[inline(always)]
pub(crate) fn decrypt_block(block: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *block;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[last]);

    for round_key in round_keys[1..last].iter().rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_key);
        mix_columns_inv(&mut state);
    }

    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, &round_keys[0]);

    state
}

/// Inverse SubBytes using the inverse S-box.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows: row r of the column-major state rotates right by r.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + 4 - row) & 3) * 4 + row];
        }
    }
}

/// Inverse MixColumns: multiplication by the circulant matrix
/// (0e 0b 0d 09) over GF(2^8), factored into repeated doublings.
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        let x = dbl(a ^ b ^ c ^ d);
        let y = dbl(x ^ a ^ c);
        let z = dbl(x ^ b ^ d);
        state[i] = dbl(y ^ a ^ b) ^ b ^ c ^ d;
        state[i + 1] = dbl(z ^ b ^ c) ^ c ^ d ^ a;
        state[i + 2] = dbl(y ^ c ^ d) ^ d ^ a ^ b;
        state[i + 3] = dbl(z ^ d ^ a) ^ a ^ b ^ c;
    }
}
