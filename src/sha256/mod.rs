// sha256_fips - Module sha256
// Pipeline complet SHA-256 conforme FIPS 180-4
//
// Padding -> decoupage en blocs -> (expansion du schedule -> compression)
// par bloc, en propageant l'etat de hash -> assemblage du digest.
//
// # Sous-modules
// - `ops`      : rotations, decalages et fonctions logiques sur 32 bits
// - `padding`  : padding FIPS (bit `1`, zeros, longueur sur 64 bits)
// - `blocks`   : decoupage du message complete en blocs de 512 bits
// - `schedule` : expansion de 16 a 64 mots
// - `compress` : 64 tours de compression, etat de hash
// - `digest`   : assemblage du digest et representation hexadecimale

/// Decoupage en blocs de 512 bits.
pub mod blocks;
/// Fonction de compression et etat de hash.
pub mod compress;
/// Digest de 256 bits.
pub mod digest;
/// Primitives sur les mots de 32 bits.
pub mod ops;
/// Padding du message.
pub mod padding;
/// Expansion du message schedule.
pub mod schedule;

use crate::error::ShaResult;
use blocks::parse_blocks;
use compress::HashState;
use digest::Digest;
use padding::pad;
use schedule::Schedule;

/// Calcule le digest SHA-256 d'un message complet en memoire.
///
/// Seule erreur possible : `ShaError::MessageTooLong`, levee par le
/// padding avant tout calcul.
pub fn hash(message: &[u8]) -> ShaResult<Digest> {
    let padded = pad(message)?;
    let blocks = parse_blocks(padded);

    let mut state = HashState::initial();
    for (i, block) in blocks.iter().enumerate() {
        crate::log_trace!("block[{}]: {}", i, hex_bytes(block.as_bytes()));
        let schedule = Schedule::expand(block);
        state.compress(&schedule);
    }

    let digest = Digest::from_state(&state);
    crate::log_debug!("digest of {} bytes: {}", message.len(), digest);
    Ok(digest)
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
