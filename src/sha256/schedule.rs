// sha256_fips - Expansion du message schedule
// Reference : FIPS 180-4, section 6.2.2 etape 1
//
// W[t] = M[t]                                                pour t = 0..15
// W[t] = s1(W[t-2]) + W[t-7] + s0(W[t-15]) + W[t-16] mod 2^32 pour t = 16..63

use crate::constants::{BLOCK_WORDS, SCHEDULE_WORDS};
use crate::sha256::blocks::Block;
use crate::sha256::ops::{small_sigma0, small_sigma1};

/// Message schedule W[0..63] d'un bloc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule([u32; SCHEDULE_WORDS]);

impl Schedule {
    /// Etend les 16 mots d'un bloc en 64 mots.
    pub fn expand(block: &Block) -> Self {
        let mut w = [0u32; SCHEDULE_WORDS];
        w[..BLOCK_WORDS].copy_from_slice(&block.words());
        for t in BLOCK_WORDS..SCHEDULE_WORDS {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        if crate::logger::trace_schedule() {
            crate::log_trace!("W[0..16]: {}", format_words(&w[..BLOCK_WORDS]));
        }
        Self(w)
    }

    /// Mots du schedule.
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.0
    }

    /// Mot W[t].
    pub fn word(&self, t: usize) -> u32 {
        self.0[t]
    }
}

fn format_words(words: &[u32]) -> String {
    words
        .iter()
        .map(|w| format!("{:08x}", w))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::blocks::parse_blocks;
    use crate::sha256::padding::pad;

    fn abc_schedule() -> Schedule {
        let blocks = parse_blocks(pad(b"abc").unwrap());
        Schedule::expand(&blocks[0])
    }

    #[test]
    fn test_head_copies_block_words() {
        let blocks = parse_blocks(pad(b"abc").unwrap());
        let s = Schedule::expand(&blocks[0]);
        assert_eq!(&s.words()[..16], &blocks[0].words()[..]);
    }

    #[test]
    fn test_abc_expanded_words() {
        // Valeurs de l'exemple "abc" de FIPS 180-4
        let s = abc_schedule();
        assert_eq!(s.word(16), 0x6162_6380);
        assert_eq!(s.word(17), 0x000f_0000);
        assert_eq!(s.word(18), 0x7da8_6405);
        assert_eq!(s.word(19), 0x6000_03c6);
        assert_eq!(s.word(63), 0x12b1_edeb);
    }

    #[test]
    fn test_zero_block() {
        let s = Schedule::expand(&Block::new([0u8; 64]));
        assert!(s.words().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_format_words() {
        assert_eq!(format_words(&[0x18, 0xdead_beef]), "00000018 deadbeef");
    }
}
