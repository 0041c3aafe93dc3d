//! AES-128 block encryption for RFID tag challenge/response.
//!
//! The reader firmware answers a tag challenge by encrypting one 16-byte block
//! under one of two compiled-in keys. This crate provides:
//! - The AES-128 key schedule, recomputed on every encryption.
//! - A fused SubBytes/ShiftRows/MixColumns round and the final round.
//! - A small key store so the engine can be driven with keys other than the
//!   compiled-in pair (used by the known-answer tests).
//!
//! ```
//! let challenge = [0u8; 16];
//! let response = tag_aes::encrypt(0, &challenge);
//! assert_eq!(response, tag_aes::encrypt(0, &challenge));
//! assert_ne!(response, tag_aes::encrypt(1, &challenge));
//! ```
//!
//! Only the forward cipher exists; there is no way back from a response to its
//! challenge:
//!
//! ```compile_fail
//! let _ = tag_aes::decrypt(0, &[0u8; 16]);
//! ```
//!
//! ```compile_fail
//! let cipher = tag_aes::Cipher::new(tag_aes::COMPILED_KEYS);
//! let _ = cipher.decrypt(0, &[0u8; 16]);
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::Block;
pub use crate::cipher::{encrypt, encrypt_block, encrypt_blocks, Cipher};
pub use crate::gf::double_gf;
pub use crate::key::{Aes128Key, KeySlot, KeyStore, StaticKeys, COMPILED_KEYS};
pub use crate::round::{add_round_key, final_transform, round_transform};
pub use crate::sbox::substitute;
pub use crate::schedule::{expand_key, KeySchedule, ROUNDS, SCHEDULE_LEN};
