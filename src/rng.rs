//! The process-wide PRNG as an explicit, injectable collaborator, rather
//! than hidden global state on the cipher instance itself.
//!
//! [`Cipher::generate_random_key`](crate::cipher::Cipher::generate_random_key)
//! and
//! [`Cipher::generate_random_block`](crate::cipher::Cipher::generate_random_block)
//! take `&mut impl RandomSource`, so callers that need reproducibility
//! (tests, regression harnesses) can substitute [`SeededRandomSource`] for
//! the default [`SystemRandomSource`].

use rand::{RngCore, SeedableRng};
use std::sync::{Mutex, OnceLock};

/// A source of randomness a [`Cipher`](crate::cipher::Cipher) can draw
/// key bytes and plaintext blocks from.
pub trait RandomSource {
    /// Fill `dest` with uniformly random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Draw a uniformly random 64-bit value.
    fn next_u64(&mut self) -> u64;
}

impl<T: RngCore> RandomSource for T {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(self, dest)
    }

    fn next_u64(&mut self) -> u64 {
        RngCore::next_u64(self)
    }
}

/// Default [`RandomSource`], backed by non-deterministic system entropy.
/// This is what the process-wide singleton ([`shared`]) wraps.
pub struct SystemRandomSource(rand::rngs::StdRng);

impl SystemRandomSource {
    /// Seed a fresh instance from the OS entropy source.
    pub fn new() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

/// A [`RandomSource`] seeded from a fixed 64-bit seed, for reproducible
/// tests and regression runs (mirrors the `StdRng::seed_from_u64` pattern
/// used for deterministic keystream tests elsewhere in this domain).
pub struct SeededRandomSource(rand::rngs::StdRng);

impl SeededRandomSource {
    /// Construct a deterministic source from `seed`. Two instances built
    /// from the same seed draw an identical stream of bytes/values.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

static SHARED: OnceLock<Mutex<SystemRandomSource>> = OnceLock::new();

/// The process-wide PRNG, lazily seeded from system entropy on first use
/// and guarded by a mutex so concurrent callers serialize on it. CLI
/// binaries that have no reason to thread a [`RandomSource`] through
/// their own call graph lock this instead.
pub fn shared() -> &'static Mutex<SystemRandomSource> {
    SHARED.get_or_init(|| Mutex::new(SystemRandomSource::new()))
}
