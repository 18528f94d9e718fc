use super::constants::SBOX;
use super::util::{add_round_key, dbl};

/// Forward AES permutation over one 16-byte block. The round count is
/// implied by the schedule length (11/13/15 round keys).
#[inline(always)]
pub(crate) fn encrypt_block(block: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *block;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // final round has no MixColumns
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state
}

/// SubBytes: fixed nonlinear substitution of every state byte.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows: row r of the column-major state rotates left by r positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns: each column multiplied by the circulant matrix
/// (02 03 01 01) over GF(2^8).
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = dbl(a ^ b) ^ b ^ c ^ d;
        state[i + 1] = dbl(b ^ c) ^ c ^ d ^ a;
        state[i + 2] = dbl(c ^ d) ^ d ^ a ^ b;
        state[i + 3] = dbl(d ^ a) ^ a ^ b ^ c;
    }
}
