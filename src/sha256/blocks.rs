// sha256_fips - Decoupage en blocs de 512 bits
// Reference : FIPS 180-4, section 5.2.1
//
// Le message complete est decoupe en blocs de 64 octets, dans l'ordre.
// Une longueur non multiple de 64 octets est un defaut de programmation
// (le padder la garantit) : on panique au lieu de tenter une reprise.

use crate::constants::{BLOCK_BYTES, BLOCK_WORDS};
use crate::sha256::padding::PaddedMessage;

/// Bloc de 512 bits du message complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block([u8; BLOCK_BYTES]);

impl Block {
    /// Construit un bloc depuis 64 octets.
    pub const fn new(bytes: [u8; BLOCK_BYTES]) -> Self {
        Self(bytes)
    }

    /// Octets du bloc.
    pub fn as_bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.0
    }

    /// Les 16 mots big-endian M[0..15] du bloc.
    pub fn words(&self) -> [u32; BLOCK_WORDS] {
        let mut m = [0u32; BLOCK_WORDS];
        for (word, chunk) in m.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        m
    }
}

/// Decoupe un message complete en blocs ordonnes.
pub fn parse_blocks(padded: PaddedMessage) -> Vec<Block> {
    split_blocks(padded.as_bytes())
}

/// Decoupe une suite d'octets en blocs de 64 octets.
///
/// # Panics
/// Si `bytes.len()` n'est pas multiple de 64.
pub fn split_blocks(bytes: &[u8]) -> Vec<Block> {
    assert!(
        bytes.len() % BLOCK_BYTES == 0,
        "block parser fed {} bytes, not a multiple of {}",
        bytes.len(),
        BLOCK_BYTES
    );
    bytes
        .chunks_exact(BLOCK_BYTES)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_BYTES];
            block.copy_from_slice(chunk);
            Block(block)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::padding::pad;

    #[test]
    fn test_blocks_cover_padded_message() {
        for len in [0usize, 3, 55, 56, 64, 119, 120, 300] {
            let msg: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let padded = pad(&msg).unwrap();
            let expected = padded.as_bytes().to_vec();
            let count = padded.block_count();

            let blocks = parse_blocks(padded);
            assert_eq!(blocks.len(), count);
            let joined: Vec<u8> = blocks.iter().flat_map(|b| b.as_bytes().iter().copied()).collect();
            assert_eq!(joined, expected);
        }
    }

    #[test]
    fn test_block_words_big_endian() {
        let blocks = parse_blocks(pad(b"abc").unwrap());
        let m = blocks[0].words();
        assert_eq!(m[0], 0x6162_6380);
        assert!(m[1..15].iter().all(|&w| w == 0));
        assert_eq!(m[15], 0x0000_0018);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_blocks(&[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "not a multiple of 64")]
    fn test_split_rejects_ragged_input() {
        split_blocks(&[0u8; 65]);
    }
}
