//! Block encryption driven by a key store.

use crate::block::Block;
use crate::key::{KeySlot, KeyStore, StaticKeys, COMPILED_KEYS};
use crate::round::{add_round_key, final_transform, round_transform};
use crate::schedule::{expand_key, KeySchedule, ROUNDS};

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;
    add_round_key(&mut state, schedule.round_key(0));

    for round in 1..ROUNDS {
        state = round_transform(&state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    final_transform(&mut state);
    add_round_key(&mut state, schedule.round_key(ROUNDS));
    state
}

/// AES-128 encryption engine over a set of root keys.
///
/// Each call selects a root key, expands it afresh and runs the ten rounds;
/// nothing is cached between calls.
#[derive(Clone, Copy, Debug)]
pub struct Cipher<S> {
    keys: S,
}

impl<S: KeyStore> Cipher<S> {
    /// Creates an engine reading root keys from `keys`.
    pub const fn new(keys: S) -> Self {
        Self { keys }
    }

    /// Returns the key store backing this engine.
    pub fn keys(&self) -> &S {
        &self.keys
    }

    /// Expands the root key selected by `key_index` (0 primary, otherwise secondary).
    pub fn round_keys(&self, key_index: u32) -> KeySchedule {
        let slot = KeySlot::from_index(key_index);
        log::trace!("selecting {slot:?} root key for index {key_index}");
        expand_key(&self.keys.root_key(slot))
    }

    /// Encrypts one block under the root key selected by `key_index`.
    pub fn encrypt(&self, key_index: u32, plaintext: &Block) -> Block {
        encrypt_block(plaintext, &self.round_keys(key_index))
    }

    /// Encrypts each block in place, independently, under the same root key.
    pub fn encrypt_blocks(&self, key_index: u32, blocks: &mut [Block]) {
        for block in blocks.iter_mut() {
            *block = self.encrypt(key_index, block);
        }
    }
}

impl Default for Cipher<StaticKeys> {
    fn default() -> Self {
        Self::new(COMPILED_KEYS)
    }
}

/// Encrypts a challenge block with one of the compiled-in keys.
///
/// `key_index` 0 selects the primary key; any other value selects the
/// secondary key.
pub fn encrypt(key_index: u32, plaintext: &Block) -> Block {
    Cipher::new(COMPILED_KEYS).encrypt(key_index, plaintext)
}

/// Encrypts several blocks in place with one of the compiled-in keys.
pub fn encrypt_blocks(key_index: u32, blocks: &mut [Block]) {
    Cipher::new(COMPILED_KEYS).encrypt_blocks(key_index, blocks)
}
