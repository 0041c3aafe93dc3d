//! AES-128 key expansion.

use crate::block::Block;
use crate::gf::double_gf;
use crate::key::Aes128Key;
use crate::sbox::{substitute, substitute_all};

/// Number of cipher rounds for AES-128.
pub const ROUNDS: usize = 10;

/// Length in bytes of an expanded AES-128 key schedule.
pub const SCHEDULE_LEN: usize = (ROUNDS + 1) * 16;

/// Expanded round keys, 0..=10.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeySchedule([Block; ROUNDS + 1]);

impl KeySchedule {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Returns the schedule as one contiguous 176-byte buffer.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_LEN] {
        core::array::from_fn(|i| self.0[i / 16][i % 16])
    }
}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("KeySchedule(..)")
    }
}

fn rot_sub_word(word: [u8; 4]) -> [u8; 4] {
    let mut rotated = word;
    rotated.rotate_left(1);
    substitute_all(&mut rotated);
    rotated
}

/// Expands a 128-bit root key into 11 round keys.
///
/// The schedule is walked one 4-byte word at a time from byte 16; the first
/// word of every round key goes through RotWord/SubWord and picks up the round
/// constant, which is doubled in GF(2^8) after each use.
pub fn expand_key(key: &Aes128Key) -> KeySchedule {
    let mut buf = [0u8; SCHEDULE_LEN];
    buf[..16].copy_from_slice(&key.0);

    let mut rcon = 1u8;
    for offset in (16..SCHEDULE_LEN).step_by(4) {
        let mut word = [buf[offset - 4], buf[offset - 3], buf[offset - 2], buf[offset - 1]];
        if offset % 16 == 0 {
            word = rot_sub_word(word);
            word[0] ^= rcon;
            rcon = double_gf(rcon);
        }
        for (i, byte) in word.iter().enumerate() {
            buf[offset + i] = buf[offset - 16 + i] ^ byte;
        }
    }

    log::trace!("expanded key schedule into {} round keys", ROUNDS + 1);
    KeySchedule(core::array::from_fn(|round| {
        core::array::from_fn(|i| buf[round * 16 + i])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS-197 appendix A.1.
    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn first_round_key_is_root_key() {
        let schedule = expand_key(&Aes128Key::from(FIPS_KEY));
        assert_eq!(schedule.round_key(0), &FIPS_KEY);
    }

    #[test]
    fn matches_fips_expansion() {
        let schedule = expand_key(&Aes128Key::from(FIPS_KEY));
        assert_eq!(
            schedule.round_key(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
                0x76, 0x05
            ]
        );
        assert_eq!(
            schedule.round_key(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6
            ]
        );
    }

    #[test]
    fn zero_key_expansion() {
        let schedule = expand_key(&Aes128Key::from([0u8; 16]));
        // w4..w7 of the all-zero key are all 0x62636363.
        for chunk in schedule.round_key(1).chunks_exact(4) {
            assert_eq!(chunk, &[0x62, 0x63, 0x63, 0x63]);
        }
        assert_eq!(
            schedule.round_key(10),
            &[
                0xb4, 0xef, 0x5b, 0xcb, 0x3e, 0x92, 0xe2, 0x11, 0x23, 0xe9, 0x51, 0xcf, 0x6f, 0x8f,
                0x18, 0x8e
            ]
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Aes128Key::from(FIPS_KEY);
        assert_eq!(expand_key(&key).to_bytes(), expand_key(&key).to_bytes());
    }

    #[test]
    fn flattened_bytes_follow_round_order() {
        let schedule = expand_key(&Aes128Key::from(FIPS_KEY));
        let bytes = schedule.to_bytes();
        assert_eq!(bytes.len(), SCHEDULE_LEN);
        for (round, rk) in schedule.iter().enumerate() {
            assert_eq!(&bytes[round * 16..round * 16 + 16], rk);
        }
        assert_eq!(schedule.iter().count(), ROUNDS + 1);
    }
}
