// sha256_fips - Padding du message
// Reference : FIPS 180-4, section 5.1.1
//
// Le message de `l` bits recoit un bit `1`, puis `k` bits nuls, puis la
// longueur `l` sur 64 bits big-endian, ou `k` est le plus petit entier
// positif ou nul tel que `l + 1 + k = 448 (mod 512)`.
//
// Le message etant une suite d'octets, `l` est multiple de 8 : le bit
// `1` et les 7 premiers zeros forment l'octet 0x80, et `k + 1` est
// toujours multiple de 8.

use crate::constants::*;
use crate::error::{ShaError, ShaResult};

/// Message complete, de longueur multiple de 512 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
    message_bits: u64,
}

impl PaddedMessage {
    /// Octets du message complete.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consomme la structure et rend les octets.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Longueur `l` du message d'origine, en bits.
    pub fn message_bits(&self) -> u64 {
        self.message_bits
    }

    /// Nombre `k` de bits nuls inseres entre le bit `1` et la longueur.
    pub fn zero_bits(&self) -> u64 {
        zero_bit_count(self.message_bits)
    }

    /// Longueur totale en bits (`l + 1 + k + 64`).
    pub fn total_bits(&self) -> u128 {
        self.bytes.len() as u128 * 8
    }

    /// Nombre de blocs de 512 bits.
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_BYTES
    }

    /// Portion correspondant au message d'origine.
    pub fn message(&self) -> &[u8] {
        &self.bytes[..(self.message_bits / 8) as usize]
    }
}

/// Calcule `k`, solution minimale de `l + 1 + k = 448 (mod 512)`.
pub fn zero_bit_count(message_bits: u64) -> u64 {
    let r = message_bits % BLOCK_BITS;
    (PAD_TARGET_BITS + BLOCK_BITS - 1 - r) % BLOCK_BITS
}

/// Longueur `l` en bits d'un message de `len` octets.
///
/// `l` doit tenir sur le champ longueur de 64 bits.
pub fn message_bit_length(len: usize) -> ShaResult<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(ShaError::MessageTooLong { bytes: len })
}

/// Complete le message selon FIPS 180-4.
///
/// Echoue avec `ShaError::MessageTooLong` si `8 * message.len()` ne tient
/// pas sur 64 bits ; aucun calcul n'est alors engage.
pub fn pad(message: &[u8]) -> ShaResult<PaddedMessage> {
    let message_bits = message_bit_length(message.len())?;

    let k = zero_bit_count(message_bits);
    // Octet 0x80 + (k - 7) / 8 octets nuls
    let marker_and_zeros = ((k + 1) / 8) as usize;
    let total = message.len() + marker_and_zeros + LENGTH_FIELD_BYTES;

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(PAD_MARKER);
    bytes.resize(total - LENGTH_FIELD_BYTES, 0);
    bytes.extend_from_slice(&message_bits.to_be_bytes());
    debug_assert_eq!(bytes.len() % BLOCK_BYTES, 0);

    crate::log_debug!(
        "padded {} bits: k={} total={} bits, {} block(s)",
        message_bits,
        k,
        bytes.len() as u128 * 8,
        bytes.len() / BLOCK_BYTES
    );

    Ok(PaddedMessage { bytes, message_bits })
}

/// Verifie qu'une suite d'octets respecte exactement le format de
/// padding FIPS 180-4 et retourne le message d'origine.
///
/// Retourne `None` si la longueur n'est pas multiple de 64 octets, si le
/// champ longueur est incoherent, si le marqueur 0x80 manque, si un
/// octet de bourrage est non nul ou si le bourrage n'est pas minimal.
pub fn strip_padding(padded: &[u8]) -> Option<&[u8]> {
    if padded.is_empty() || padded.len() % BLOCK_BYTES != 0 {
        return None;
    }
    let (body, length_field) = padded.split_at(padded.len() - LENGTH_FIELD_BYTES);
    let mut raw = [0u8; LENGTH_FIELD_BYTES];
    raw.copy_from_slice(length_field);
    let message_bits = u64::from_be_bytes(raw);
    if message_bits % 8 != 0 {
        return None;
    }
    let message_len = usize::try_from(message_bits / 8).ok()?;
    let marker_and_zeros = ((zero_bit_count(message_bits) + 1) / 8) as usize;
    if message_len.checked_add(marker_and_zeros)? != body.len() {
        return None;
    }
    let (message, tail) = body.split_at(message_len);
    match tail.split_first() {
        Some((&PAD_MARKER, zeros)) if zeros.iter().all(|&b| b == 0) => Some(message),
        _ => None,
    }
}
