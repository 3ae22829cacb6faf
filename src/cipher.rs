//! The PRESENT cipher instance: a stateless-per-block transform
//! parameterized by key size and round count, holding a precomputed
//! round-key table once a key is installed.

use crate::key_schedule;
use crate::perm;
use crate::rng::RandomSource;
use crate::sbox;

/// PRESENT's two standardized key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 80-bit master key (10 bytes).
    Bits80,
    /// 128-bit master key (16 bytes).
    Bits128,
}

impl KeySize {
    /// Master key length in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            KeySize::Bits80 => 10,
            KeySize::Bits128 => 16,
        }
    }

    /// Key register width in bits, used by the key schedule.
    pub const fn bit_len(self) -> u32 {
        match self {
            KeySize::Bits80 => 80,
            KeySize::Bits128 => 128,
        }
    }
}

/// Errors reported at the cipher boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// `install_key` was called with a byte slice whose length does not
    /// match the instance's configured [`KeySize`].
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Bytes required by the instance's `KeySize`.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },

    /// `encrypt_block` was called before any key was successfully
    /// installed.
    #[error("encrypt_block called before a key was installed")]
    KeyNotSet,

    /// Construction-time parameters were out of range.
    #[error("invalid cipher parameter: {0}")]
    InvalidParameter(&'static str),
}

/// A PRESENT cipher instance: key size, round count, and (once keyed) its
/// precomputed round-key table.
///
/// Follows a small state machine: `Unkeyed` until
/// [`Cipher::install_key`] succeeds, `Keyed` thereafter. `encrypt_block`
/// takes `&self` and `install_key` takes `&mut self`, so the borrow
/// checker enforces "no concurrent install while encrypting" rather than
/// a runtime lock.
#[derive(Debug, Clone)]
pub struct Cipher {
    key_size: KeySize,
    rounds: usize,
    round_keys: Option<Vec<u64>>,
}

impl Cipher {
    /// Construct an instance with no key installed.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidParameter`] if `rounds` is 0 or
    /// greater than 31.
    pub fn new(key_size: KeySize, rounds: usize) -> Result<Self, CipherError> {
        if rounds == 0 || rounds > 31 {
            return Err(CipherError::InvalidParameter(
                "rounds must satisfy 1 <= rounds <= 31",
            ));
        }
        Ok(Self {
            key_size,
            rounds,
            round_keys: None,
        })
    }

    /// The configured key size.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// The configured round count.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Whether a key has been installed.
    pub fn is_keyed(&self) -> bool {
        self.round_keys.is_some()
    }

    /// Install a master key, deriving and storing the round-key table.
    ///
    /// On success the previous round-key table (if any) is fully
    /// replaced. On failure the instance's prior keyed state, if any, is
    /// left untouched: a failed install never partially mutates state.
    pub fn install_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let expected = self.key_size.byte_len();
        if key.len() != expected {
            return Err(CipherError::InvalidKeyLength {
                expected,
                actual: key.len(),
            });
        }
        self.round_keys = Some(key_schedule::generate_round_keys(
            self.key_size,
            key,
            self.rounds,
        ));
        Ok(())
    }

    /// Encrypt one 64-bit block.
    ///
    /// Pure function of `(plaintext, round keys)` once keyed: the same
    /// plaintext under the same installed key always returns the same
    /// ciphertext.
    pub fn encrypt_block(&self, plaintext: u64) -> Result<u64, CipherError> {
        let round_keys = self.round_keys.as_ref().ok_or(CipherError::KeyNotSet)?;

        let mut state = plaintext;
        for round_key in &round_keys[..self.rounds] {
            state ^= round_key;
            state = sbox::sbox_layer(state);
            state = perm::mask_extract(state);
        }
        state ^= round_keys[self.rounds];
        Ok(state)
    }

    /// Draw `key_size.byte_len()` uniformly random bytes from `source` and
    /// return them as a candidate master key. Does not install the key.
    pub fn generate_random_key(&self, source: &mut impl RandomSource) -> Vec<u8> {
        let mut key = vec![0u8; self.key_size.byte_len()];
        source.fill_bytes(&mut key);
        key
    }

    /// Draw a uniformly random 64-bit plaintext block from `source`.
    pub fn generate_random_block(&self, source: &mut impl RandomSource) -> u64 {
        source.next_u64()
    }
}
