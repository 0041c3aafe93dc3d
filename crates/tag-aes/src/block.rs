//! Block representation helpers.

/// AES state: 16 bytes, column-major (bytes 0..4 are column 0).
pub type Block = [u8; 16];

/// XORs `rhs` into `dst` position for position.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
