// sha256_fips - Operations sur les mots de 32 bits
// Reference : FIPS 180-4, sections 2.2.2 et 4.1.2
//
// Toutes les fonctions operent sur `u32` : le masquage a 32 bits est
// donc implicite. Les additions modulo 2^32 se font ailleurs via
// `wrapping_add`.

/// Rotation droite circulaire de `n` bits (0 <= n < 32).
#[inline]
pub const fn rotr(n: u32, x: u32) -> u32 {
    x.rotate_right(n)
}

/// Decalage logique a droite de `n` bits.
#[inline]
pub const fn shr(n: u32, x: u32) -> u32 {
    x >> n
}

/// Fonction Ch(x, y, z) : choisit y ou z selon les bits de x.
#[inline]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ ((!x) & z)
}

/// Fonction Maj(x, y, z) : vote majoritaire bit a bit.
#[inline]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Fonction Sigma majuscule 0 (compression, registre a).
#[inline]
pub const fn big_sigma0(x: u32) -> u32 {
    rotr(2, x) ^ rotr(13, x) ^ rotr(22, x)
}

/// Fonction Sigma majuscule 1 (compression, registre e).
#[inline]
pub const fn big_sigma1(x: u32) -> u32 {
    rotr(6, x) ^ rotr(11, x) ^ rotr(25, x)
}

/// Fonction sigma minuscule 0 (expansion du schedule).
#[inline]
pub const fn small_sigma0(x: u32) -> u32 {
    rotr(7, x) ^ rotr(18, x) ^ shr(3, x)
}

/// Fonction sigma minuscule 1 (expansion du schedule).
#[inline]
pub const fn small_sigma1(x: u32) -> u32 {
    rotr(17, x) ^ rotr(19, x) ^ shr(10, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WORD_BITS;

    #[test]
    fn test_rotr_matches_std() {
        assert_eq!(rotr(0, 0xdead_beef), 0xdead_beef);
        for &x in &[0u32, 1, 0x8000_0001, 0xdead_beef, u32::MAX] {
            for n in 0..WORD_BITS {
                assert_eq!(rotr(n, x), x.rotate_right(n));
            }
        }
    }

    #[test]
    fn test_shr_drops_low_bits() {
        assert_eq!(shr(3, 0xffff_ffff), 0x1fff_ffff);
        assert_eq!(shr(10, 0x0000_03ff), 0);
    }

    #[test]
    fn test_ch_and_maj() {
        assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(maj(0xff00_ff00, 0xf0f0_f0f0, 0x0000_0000), 0xf000_f000);
        assert_eq!(maj(0xff00_ff00, 0xf0f0_f0f0, 0xffff_ffff), 0xfff0_fff0);
    }

    #[test]
    fn test_small_sigma0_first_block_word() {
        // W[0] du bloc "abc"
        let x = 0x6162_6380;
        assert_eq!(small_sigma0(x), 0x00c2_c4c7 ^ 0x98e0_1858 ^ (x >> 3));
        assert_eq!(small_sigma1(0), 0);
    }
}
