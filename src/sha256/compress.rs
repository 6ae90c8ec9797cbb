// sha256_fips - Fonction de compression
// Reference : FIPS 180-4, section 6.2.2 etapes 2 a 4
//
// L'etat de hash H[0..7] est l'unique accumulateur du pipeline : il est
// initialise depuis H0, puis mis a jour en place une fois par bloc.
// Les 64 tours n'ont aucun branchement dependant des donnees.

use crate::constants::{H0, K, ROUNDS, STATE_WORDS};
use crate::sha256::ops::{big_sigma0, big_sigma1, ch, maj};
use crate::sha256::schedule::Schedule;

/// Etat de hash intermediaire H[0..7].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; STATE_WORDS]);

impl HashState {
    /// Etat initial H0.
    pub const fn initial() -> Self {
        Self(H0)
    }

    /// Construit un etat depuis 8 mots.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Mots de l'etat.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Compresse un bloc (via son schedule) dans l'etat.
    pub fn compress(&mut self, schedule: &Schedule) {
        let w = schedule.words();
        let trace = crate::logger::trace_rounds();

        // Variables de travail
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        for t in 0..ROUNDS {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);

            if trace {
                crate::log_trace!(
                    "t={:02} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x} {:08x}",
                    t, a, b, c, d, e, f, g, h
                );
            }
        }

        // Ajouter au state
        for (word, v) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(v);
        }
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::blocks::{parse_blocks, Block};
    use crate::sha256::padding::pad;

    #[test]
    fn test_initial_state() {
        assert_eq!(HashState::default(), HashState::initial());
        assert_eq!(HashState::initial().words()[0], 0x6a09_e667);
        assert_eq!(HashState::initial().words()[7], 0x5be0_cd19);
    }

    #[test]
    fn test_abc_single_block() {
        // Etat final de l'exemple "abc" de FIPS 180-4
        let blocks = parse_blocks(pad(b"abc").unwrap());
        let mut state = HashState::initial();
        state.compress(&Schedule::expand(&blocks[0]));
        assert_eq!(
            state.words(),
            &[
                0xba78_16bf, 0x8f01_cfea, 0x4141_40de, 0x5dae_2223,
                0xb003_61a3, 0x9617_7a9c, 0xb410_ff61, 0xf200_15ad,
            ]
        );
    }

    #[test]
    fn test_state_threads_across_blocks() {
        // Compresser deux fois le meme bloc ne donne pas le meme etat
        let schedule = Schedule::expand(&Block::new([0u8; 64]));
        let mut state = HashState::initial();
        state.compress(&schedule);
        let first = state;
        state.compress(&schedule);
        assert_ne!(state, first);
        assert_ne!(first, HashState::initial());
    }
}
