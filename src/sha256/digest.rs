// sha256_fips - Assemblage et representation du digest
// Reference : FIPS 180-4, section 6.2.2 (H0 || H1 || ... || H7)
//
// Le digest est la concatenation big-endian des 8 mots de l'etat final.
// Representation canonique : 64 caracteres hexadecimaux minuscules.

use std::fmt;

use crate::constants::{DIGEST_BITS, DIGEST_BYTES, STATE_WORDS};
use crate::error::{ShaError, ShaResult};
use crate::sha256::compress::HashState;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Digest SHA-256 de 256 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Taille du digest en bits.
    pub const BITS: usize = DIGEST_BITS;

    /// Assemble le digest depuis l'etat final.
    pub fn from_state(state: &HashState) -> Self {
        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(state.words()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(out)
    }

    /// Octets du digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Consomme le digest et rend ses octets.
    pub fn into_bytes(self) -> [u8; DIGEST_BYTES] {
        self.0
    }

    /// Les 8 mots big-endian du digest.
    pub fn words(&self) -> [u32; STATE_WORDS] {
        let mut words = [0u32; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Representation hexadecimale minuscule (64 caracteres).
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_BYTES * 2);
        for &b in &self.0 {
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
        out
    }

    /// Parse une representation hexadecimale (insensible a la casse).
    pub fn from_hex(s: &str) -> ShaResult<Self> {
        let s = s.trim();
        if s.len() != DIGEST_BYTES * 2 {
            return Err(ShaError::InvalidHex(format!(
                "expected {} hex characters, got {}",
                DIGEST_BYTES * 2,
                s.len()
            )));
        }
        let mut out = [0u8; DIGEST_BYTES];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            out[i] = (hex_value(pair[0])? << 4) | hex_value(pair[1])?;
        }
        Ok(Self(out))
    }
}

fn hex_value(c: u8) -> ShaResult<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ShaError::InvalidHex(format!(
            "invalid hex character '{}'",
            c.escape_ascii()
        ))),
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    fn from(d: Digest) -> Self {
        d.0
    }
}
