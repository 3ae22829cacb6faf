//! Prints the known-answer vectors for PRESENT-80 in the classic
//! per-test-case banner style.

use present_cipher::cipher::{Cipher, KeySize};

struct Vector {
    name: &'static str,
    key: [u8; 10],
    plaintext: u64,
    expected_ciphertext: u64,
}

const VECTORS: &[Vector] = &[Vector {
    name: "PRESENT-80, 31 rounds, all-zero key and plaintext",
    key: [0u8; 10],
    plaintext: 0x0000_0000_0000_0000,
    expected_ciphertext: 0x5579_c138_7b22_8445,
}];

fn main() {
    let mut failures = 0;
    for vector in VECTORS {
        println!("--- Test Case: {} ---", vector.name);
        println!("Input Key:        {}", hex::encode(vector.key));
        println!("Input Plaintext:  {:016x}", vector.plaintext);

        let mut cipher = Cipher::new(KeySize::Bits80, 31).unwrap();
        cipher.install_key(&vector.key).unwrap();
        let actual = cipher.encrypt_block(vector.plaintext).unwrap();

        println!("Expected Ciphertext: {:016x}", vector.expected_ciphertext);
        println!("Actual Ciphertext:   {actual:016x}");

        if actual == vector.expected_ciphertext {
            println!("Test PASSED!");
        } else {
            println!("Test FAILED!");
            failures += 1;
        }
        println!();
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
