// SPDX-License-Identifier: MIT
//! PRESENT — a lightweight 64-bit block cipher (encryption direction)
//!
//! • Block  : 64 bits, 16 nibbles
//! • Key    : 80 or 128 bits
//! • Rounds : 31 (full cipher); reduced-round configurations (notably 4)
//!            are used for differential-cryptanalysis experiments
//!
//! Each round is `addRoundKey -> sBoxLayer -> pLayer`: XOR in a round key,
//! substitute every nibble through a fixed 4-bit S-box, then apply a fixed
//! bit permutation for diffusion. A final `addRoundKey` whitens the state.
//! Round keys are derived from the master key by a rotating-register
//! key schedule (see [`key_schedule`]).
//!
//! This crate also carries the differential-cryptanalysis experiment this
//! cipher was built to support: [`experiment::run`] drives a reduced-round
//! instance over many independent keys and plaintext pairs, counting how
//! often a fixed input difference produces a fixed output difference.
//!
//! Decryption, cipher modes, padding, and authenticated-encryption
//! constructions are out of scope; this crate implements PRESENT's
//! encryption direction only.

pub mod cipher;
pub mod experiment;
pub mod key_schedule;
pub mod perm;
pub mod rng;
pub mod sbox;

pub use cipher::{Cipher, CipherError, KeySize};
pub use experiment::{ExperimentParams, ExperimentReport};
