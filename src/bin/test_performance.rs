//! CLI performance harness: PRESENT-80 at the full 31 rounds, one random
//! key, a tight encryption loop, reporting encryptions/sec,
//! time/encryption, and throughput in MB/s.
//!
//! Invocation: `test_performance [num_encryptions]`. A non-positive or
//! unparseable argument falls back to the default of 100,000 with a
//! diagnostic on stderr.

use std::time::Instant;

use present_cipher::cipher::{Cipher, KeySize};
use present_cipher::rng::SystemRandomSource;

const DEFAULT_NUM_ENCRYPTIONS: u64 = 100_000;
const ROUNDS: usize = 31;
const BLOCK_BYTES: u64 = 8;

fn main() {
    let num_encryptions = parse_num_encryptions();

    let mut rng = SystemRandomSource::new();
    let mut cipher = Cipher::new(KeySize::Bits80, ROUNDS).expect("31 rounds is a valid round count");
    let key = cipher.generate_random_key(&mut rng);
    cipher
        .install_key(&key)
        .expect("generated key matches KeySize::Bits80");
    let plaintext = cipher.generate_random_block(&mut rng);

    println!("PRESENT-80 performance test");
    println!("Key:              {}", hex::encode(&key));
    println!("Plaintext:        {plaintext:016x}");
    println!("Encryptions:      {num_encryptions}");

    let start = Instant::now();
    let mut acc = plaintext;
    for _ in 0..num_encryptions {
        acc = cipher
            .encrypt_block(acc)
            .expect("cipher is keyed before the timing loop starts");
    }
    let elapsed = start.elapsed();

    // Use the accumulator so the optimizer can't hoist the loop away.
    println!("Final accumulator: {acc:016x}");

    let elapsed_secs = elapsed.as_secs_f64();
    if elapsed_secs == 0.0 || num_encryptions == 0 {
        println!("Elapsed time too small to measure throughput.");
        return;
    }

    let encryptions_per_sec = num_encryptions as f64 / elapsed_secs;
    let time_per_encryption_ns = elapsed.as_nanos() as f64 / num_encryptions as f64;
    let throughput_mb_s =
        (num_encryptions as f64 * BLOCK_BYTES as f64) / elapsed_secs / (1024.0 * 1024.0);

    println!("--------------------------------------------------");
    println!("Elapsed time:          {elapsed:.6?}");
    println!("Encryptions/sec:       {encryptions_per_sec:.2}");
    println!("Time/encryption:       {time_per_encryption_ns:.2} ns");
    println!("Throughput:            {throughput_mb_s:.2} MB/s");
}

fn parse_num_encryptions() -> u64 {
    match std::env::args().nth(1) {
        None => DEFAULT_NUM_ENCRYPTIONS,
        Some(arg) => match arg.parse::<i64>() {
            Ok(n) if n > 0 => n as u64,
            _ => {
                eprintln!(
                    "warning: `{arg}` is not a positive integer, using default of {DEFAULT_NUM_ENCRYPTIONS}"
                );
                DEFAULT_NUM_ENCRYPTIONS
            }
        },
    }
}
