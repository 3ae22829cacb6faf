//! Known-answer and key-schedule regression tests.

use present_cipher::cipher::{Cipher, KeySize};

#[test]
fn present_80_all_zero_kat() {
    let mut cipher = Cipher::new(KeySize::Bits80, 31).unwrap();
    cipher.install_key(&[0u8; 10]).unwrap();
    let ciphertext = cipher.encrypt_block(0x0000_0000_0000_0000).unwrap();
    assert_eq!(ciphertext, 0x5579_c138_7b22_8445);
}

#[test]
fn key_schedule_regression_80_bit() {
    let round_keys = present_cipher::key_schedule::generate_round_keys(
        KeySize::Bits80,
        &[0u8; 10],
        31,
    );
    assert_eq!(round_keys[0], 0x0000_0000_0000_0000);
    assert_eq!(round_keys[1], 0xC000_0000_0000_0000);
    assert_eq!(round_keys[2], 0x5000_1800_0000_0001);
}
