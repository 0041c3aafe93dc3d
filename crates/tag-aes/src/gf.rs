//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Multiplies `x` by 2 in GF(2^8) ("xtime").
#[inline]
pub fn double_gf(x: u8) -> u8 {
    let shifted = x << 1;
    if x & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

#[cfg(test)]
pub(crate) fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = double_gf(a);
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_without_reduction() {
        assert_eq!(double_gf(0x00), 0x00);
        assert_eq!(double_gf(0x01), 0x02);
        assert_eq!(double_gf(0x57), 0xae);
        assert_eq!(double_gf(0x7f), 0xfe);
    }

    #[test]
    fn doubling_with_reduction() {
        // FIPS-197 section 4.2.1: {57} * {02} = {ae}, {ae} * {02} = {47}.
        assert_eq!(double_gf(0xae), 0x47);
        assert_eq!(double_gf(0x80), 0x1b);
        assert_eq!(double_gf(0xff), 0xe5);
    }

    #[test]
    fn round_constants_follow_doubling() {
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
        let mut rc = 1u8;
        for want in expected {
            assert_eq!(rc, want);
            rc = double_gf(rc);
        }
    }

    #[test]
    fn doubling_composes_into_multiply_by_three() {
        for x in 0..=255u8 {
            assert_eq!(double_gf(x), gmul(x, 2));
            assert_eq!(double_gf(x) ^ x, gmul(x, 3));
        }
    }

    #[test]
    fn fips_multiply_example() {
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }
}
