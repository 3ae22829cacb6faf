use present_cipher::cipher::{Cipher, KeySize};
use present_cipher::rng::SystemRandomSource;

fn main() {
    let mut cipher = Cipher::new(KeySize::Bits80, 31).expect("31 rounds is a valid round count");
    let key = [0u8; 10];
    cipher.install_key(&key).expect("key length matches KeySize::Bits80");
    let plaintext = 0x0000_0000_0000_0000u64;
    let ciphertext = cipher.encrypt_block(plaintext).unwrap();
    println!("Key:        {}", hex::encode(key));
    println!("Plaintext:  {:016x}", plaintext);
    println!("Ciphertext: {:016x}", ciphertext);

    let mut rng = SystemRandomSource::new();
    let random_key = cipher.generate_random_key(&mut rng);
    let mut cipher2 = Cipher::new(KeySize::Bits80, 31).unwrap();
    cipher2.install_key(&random_key).unwrap();
    let random_plaintext = cipher2.generate_random_block(&mut rng);
    let random_ciphertext = cipher2.encrypt_block(random_plaintext).unwrap();
    println!();
    println!("Random key:        {}", hex::encode(&random_key));
    println!("Random plaintext:  {:016x}", random_plaintext);
    println!("Random ciphertext: {:016x}", random_ciphertext);
}
