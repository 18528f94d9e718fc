//! Properties of the streaming session contract: chunking transparency for
//! the keystream modes, round trips for every mode and key size, and the
//! counter discipline of CTR, all through the public API with random data.

use rand::Rng;

use aesmode::{Key, Mode, Session};

const ALL_MODES: [Mode; 5] = [Mode::Ecb, Mode::Cbc, Mode::Cfb, Mode::Ofb, Mode::Ctr];
const KEY_LENS: [usize; 3] = [16, 24, 32];

fn random_key(rng: &mut impl Rng, len: usize) -> Key {
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    Key::try_from_slice(&bytes).expect("generated key length is valid")
}

#[test]
fn round_trip_every_mode_and_key_size() {
    let mut rng = rand::rng();
    let mut plaintext = vec![0u8; 1024];
    rng.fill(&mut plaintext[..]);

    let mut iv = [0u8; 16];
    rng.fill(&mut iv[..]);

    for mode in ALL_MODES {
        for key_len in KEY_LENS {
            let key = random_key(&mut rng, key_len);
            let mut session = Session::new(mode, &key, Some(&iv)).unwrap();
            let ct = session.encrypt(&plaintext).unwrap();
            assert_eq!(ct.len(), plaintext.len());
            assert_ne!(ct, plaintext);

            session.reset();
            assert_eq!(
                session.decrypt(&ct).unwrap(),
                plaintext,
                "{mode} with {}-byte key",
                key_len
            );
        }
    }
}

// Keystream modes must produce the same bytes no matter how the input is
// chunked, including splits inside a block.
#[test]
fn chunked_input_matches_whole_input() {
    let mut rng = rand::rng();
    let mut data = vec![0u8; 512];
    rng.fill(&mut data[..]);
    let iv = [0x5au8; 16];

    for mode in [Mode::Cfb, Mode::Ofb, Mode::Ctr] {
        let key = random_key(&mut rng, 32);

        let mut whole = Session::new(mode, &key, Some(&iv)).unwrap();
        let expected = whole.encrypt(&data).unwrap();

        for _ in 0..20 {
            let mut chunked = Session::new(mode, &key, Some(&iv)).unwrap();
            let mut out = Vec::with_capacity(data.len());
            let mut offset = 0;
            while offset < data.len() {
                let take = rng.random_range(1..=data.len() - offset);
                out.extend(chunked.encrypt(&data[offset..offset + take]).unwrap());
                offset += take;
            }
            assert_eq!(out, expected, "{mode} chunking changed the output");
        }
    }
}

// Block-aligned chunking must also be transparent for CBC, where state
// carries across calls but each call must be aligned.
#[test]
fn cbc_block_aligned_chunking_is_transparent() {
    let mut rng = rand::rng();
    let mut data = vec![0u8; 256];
    rng.fill(&mut data[..]);
    let iv = [0x17u8; 16];
    let key = random_key(&mut rng, 16);

    let mut whole = Session::new(Mode::Cbc, &key, Some(&iv)).unwrap();
    let expected = whole.encrypt(&data).unwrap();

    let mut chunked = Session::new(Mode::Cbc, &key, Some(&iv)).unwrap();
    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks(64) {
        out.extend(chunked.encrypt(chunk).unwrap());
    }
    assert_eq!(out, expected);
}

// Decryption may be chunked differently from encryption and still recover
// the plaintext.
#[test]
fn decrypt_chunking_is_independent_of_encrypt_chunking() {
    let mut rng = rand::rng();
    let mut data = vec![0u8; 300];
    rng.fill(&mut data[..]);
    let iv = [0xc3u8; 16];

    for mode in [Mode::Cfb, Mode::Ofb, Mode::Ctr] {
        let key = random_key(&mut rng, 24);

        let mut enc = Session::new(mode, &key, Some(&iv)).unwrap();
        let mut ct = Vec::new();
        for chunk in data.chunks(37) {
            ct.extend(enc.encrypt(chunk).unwrap());
        }

        let mut dec = Session::new(mode, &key, Some(&iv)).unwrap();
        let mut pt = Vec::new();
        for chunk in ct.chunks(11) {
            pt.extend(dec.decrypt(chunk).unwrap());
        }
        assert_eq!(pt, data, "{mode}");
    }
}

// The CTR keystream is the ECB encryption of successive counter values, so
// encrypting zeros exposes it for comparison against an ECB session fed the
// counters directly.
#[test]
fn ctr_keystream_matches_ecb_of_counters() {
    let key = Key::try_from_slice(&[0x42u8; 16]).unwrap();
    let counter0 = [0xffu8; 16]; // first increment wraps to all zeros

    let mut ctr = Session::new(Mode::Ctr, &key, Some(&counter0)).unwrap();
    let keystream = ctr.encrypt(&[0u8; 64]).unwrap();

    let mut counters = Vec::new();
    counters.extend_from_slice(&[0xffu8; 16]);
    counters.extend_from_slice(&[0u8; 16]);
    let mut one = [0u8; 16];
    one[15] = 1;
    counters.extend_from_slice(&one);
    let mut two = [0u8; 16];
    two[15] = 2;
    counters.extend_from_slice(&two);

    let mut ecb = Session::new(Mode::Ecb, &key, None).unwrap();
    assert_eq!(ecb.encrypt(&counters).unwrap(), keystream);
}
