//! AES round transformations.
//!
//! Middle rounds use a fused SubBytes/ShiftRows/MixColumns pass that reads the
//! shifted bytes straight out of the input state, so neither intermediate
//! state is materialised.

use crate::block::{xor_in_place, Block};
use crate::gf::double_gf;
use crate::sbox::substitute;

/// Applies SubBytes, ShiftRows and MixColumns in a single pass.
///
/// Output column `i` takes row `r` from input column `i + r` (mod 4), i.e.
/// input byte `(4i + 5r) mod 16`.
#[inline]
pub fn round_transform(state: &Block) -> Block {
    let mut out = [0u8; 16];
    for col in (0..16).step_by(4) {
        let a = substitute(state[col]);
        let b = substitute(state[(col + 5) & 15]);
        let c = substitute(state[(col + 10) & 15]);
        let d = substitute(state[(col + 15) & 15]);
        let (a2, b2, c2, d2) = (double_gf(a), double_gf(b), double_gf(c), double_gf(d));

        out[col] = a2 ^ b2 ^ b ^ c ^ d;
        out[col + 1] = a ^ b2 ^ c2 ^ c ^ d;
        out[col + 2] = a ^ b ^ c2 ^ d2 ^ d;
        out[col + 3] = a2 ^ a ^ b ^ c ^ d2;
    }
    out
}

/// Applies SubBytes and ShiftRows in place (the last round has no MixColumns).
#[inline]
pub fn final_transform(state: &mut Block) {
    let input = *state;
    for (i, byte) in state.iter_mut().enumerate() {
        *byte = substitute(input[(i + 4 * (i % 4)) & 15]);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
