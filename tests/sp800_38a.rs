//! Multi-block known-answer tests from NIST SP 800-38A, Appendix F, driven
//! through the public session API. Each case runs the encrypt direction,
//! resets the same session, and runs the decrypt direction.

use hex_literal::hex;

use aesmode::{Key, Mode, Session};

const PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a
     ae2d8a571e03ac9c9eb76fac45af8e51
     30c81c46a35ce411e5fbc1191a0a52ef
     f69f2445df4f9b17ad2b417be66c3710"
);

const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const KEY_192: [u8; 24] = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
const KEY_256: [u8; 32] = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");

const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
const CTR_INIT: [u8; 16] = hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");

fn run_case(mode: Mode, key: &[u8], iv: Option<&[u8]>, ciphertext: &[u8]) {
    let key = Key::try_from_slice(key).expect("test key");
    let mut session = Session::new(mode, &key, iv).expect("session");

    assert_eq!(session.encrypt(&PLAINTEXT).unwrap(), ciphertext);
    session.reset();
    assert_eq!(session.decrypt(ciphertext).unwrap(), PLAINTEXT.to_vec());
}

// F.1.1 / F.1.2
#[test]
fn ecb_aes128() {
    run_case(
        Mode::Ecb,
        &KEY_128,
        None,
        &hex!(
            "3ad77bb40d7a3660a89ecaf32466ef97
             f5d3d58503b9699de785895a96fdbaaf
             43b1cd7f598ece23881b00e3ed030688
             7b0c785e27e8ad3f8223207104725dd4"
        ),
    );
}

// F.1.3 / F.1.4
#[test]
fn ecb_aes192() {
    run_case(
        Mode::Ecb,
        &KEY_192,
        None,
        &hex!(
            "bd334f1d6e45f25ff712a214571fa5cc
             974104846d0ad3ad7734ecb3ecee4eef
             ef7afd2270e2e60adce0ba2face6444e
             9a4b41ba738d6c72fb16691603c18e0e"
        ),
    );
}

// F.1.5 / F.1.6
#[test]
fn ecb_aes256() {
    run_case(
        Mode::Ecb,
        &KEY_256,
        None,
        &hex!(
            "f3eed1bdb5d2a03c064b5a7e3db181f8
             591ccb10d410ed26dc5ba74a31362870
             b6ed21b99ca6f4f9f153e7b1beafed1d
             23304b7a39f9f3ff067d8d8f9e24ecc7"
        ),
    );
}

// F.2.1 / F.2.2
#[test]
fn cbc_aes128() {
    run_case(
        Mode::Cbc,
        &KEY_128,
        Some(&IV),
        &hex!(
            "7649abac8119b246cee98e9b12e9197d
             5086cb9b507219ee95db113a917678b2
             73bed6b8e3c1743b7116e69e22229516
             3ff1caa1681fac09120eca307586e1a7"
        ),
    );
}

// F.3.15 / F.3.16 (CFB128)
#[test]
fn cfb128_aes192() {
    run_case(
        Mode::Cfb,
        &KEY_192,
        Some(&IV),
        &hex!(
            "cdc80d6fddf18cab34c25909c99a4174
             67ce7f7f81173621961a2b70171d3d7a
             2e1e8a1dd59b88b1c8e60fed1efac4c9
             c05f9f9ca9834fa042ae8fba584b09ff"
        ),
    );
}

// F.4.5 / F.4.6
#[test]
fn ofb_aes256() {
    run_case(
        Mode::Ofb,
        &KEY_256,
        Some(&IV),
        &hex!(
            "dc7e84bfda79164b7ecd8486985d3860
             4febdc6740d20b3ac88f6ad82a4fb08d
             71ab47a086e86eedf39d1c5bba97c408
             0126141d67f37be8538f5a8be740e484"
        ),
    );
}

// F.5.1 / F.5.2
#[test]
fn ctr_aes128() {
    run_case(
        Mode::Ctr,
        &KEY_128,
        Some(&CTR_INIT),
        &hex!(
            "874d6191b620e3261bef6864990db6ce
             9806f66b7970fdff8617187bb9fffdff
             5ae4df3edbd5d35e5b4f09020db03eab
             1e031dda2fbe03d1792170a0f3009cee"
        ),
    );
}

// F.5.3 / F.5.4
#[test]
fn ctr_aes192() {
    run_case(
        Mode::Ctr,
        &KEY_192,
        Some(&CTR_INIT),
        &hex!(
            "1abc932417521ca24f2b0459fe7e6e0b
             090339ec0aa6faefd5ccc2c6f4ce8e94
             1e36b26bd1ebc670d1bd1d665620abf7
             4f78a7f6d29809585a97daec58c6b050"
        ),
    );
}

// F.5.5 / F.5.6
#[test]
fn ctr_aes256() {
    run_case(
        Mode::Ctr,
        &KEY_256,
        Some(&CTR_INIT),
        &hex!(
            "601ec313775789a5b7a7f504bbf3d228
             f443e3ca4d62b59aca84e990cacaf5c5
             2b0930daa23de94ce87017ba2d84988d
             dfc9c58db67aada613c2dd08457941a6"
        ),
    );
}
