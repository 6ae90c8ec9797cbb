// sha256_fips - Arbre de modules (crate library)
//
// Ce fichier constitue le point d'entree de la crate. Il expose la
// frontiere fonctionnelle unique `hash(message) -> Digest` et re-exporte
// les etapes du pipeline pour les tests et l'inspection.
//
// # Modules
// - `config`    : configuration du logger (fichier cle-valeur, environnement)
// - `constants` : tables FIPS 180-4 (K, H0) et tailles
// - `error`     : types d'erreur centralises (ShaError, ShaResult)
// - `logger`    : journalisation a niveaux sur stderr
// - `sha256`    : pipeline padding -> blocs -> schedule -> compression -> digest
//
// # Exemple
// ```
// let digest = sha256_fips::hash(b"abc").unwrap();
// assert_eq!(
//     digest.to_string(),
//     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
// );
// ```

/// Configuration de la journalisation et de la trace.
pub mod config;
/// Constantes globales et tables standardisees.
pub mod constants;
/// Types d'erreur centralises.
pub mod error;
/// Journalisation sur stderr.
pub mod logger;
/// Implementation SHA-256 conforme FIPS 180-4.
pub mod sha256;

pub use config::settings::Settings;
pub use error::{ShaError, ShaResult};
pub use sha256::digest::Digest;
pub use sha256::hash;
