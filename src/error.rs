// sha256_fips - Types d'erreur centralises
//
// Ce module definit l'enumeration `ShaError` et le type alias
// `ShaResult<T>` utilises dans toute la crate.
//
// # Categories d'erreurs
// - `MessageTooLong` : longueur en bits >= 2^64 (hors domaine FIPS 180-4)
// - `InvalidHex` : representation hexadecimale de digest invalide
// - `Config` : erreur de lecture ou de parsing de la configuration
// - `Io` : erreur d'I/O generique
//
// Une entree non multiple de 512 bits donnee au decoupage en blocs
// n'est pas une erreur recuperable : c'est un defaut de programmation,
// signale par un panic (voir `sha256::blocks`).
//
// L'implementation de `Display` formate chaque variante avec un
// prefixe entre crochets pour faciliter le diagnostic dans les logs.

use std::fmt;

/// Enumeration de toutes les erreurs possibles dans sha256_fips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaError {
    /// Message trop long : 8 * bytes ne tient pas sur 64 bits
    MessageTooLong { bytes: usize },
    /// Digest hexadecimal invalide
    InvalidHex(String),
    /// Erreur de configuration
    Config(String),
    /// Erreur de lecture/ecriture
    Io(String),
}

impl fmt::Display for ShaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaError::MessageTooLong { bytes } => write!(
                f,
                "[Input] message of {} bytes exceeds the 2^64-bit length limit",
                bytes
            ),
            ShaError::InvalidHex(m) => write!(f, "[Hex] {}", m),
            ShaError::Config(m) => write!(f, "[Config] {}", m),
            ShaError::Io(m) => write!(f, "[Io] {}", m),
        }
    }
}

impl std::error::Error for ShaError {}

impl From<std::io::Error> for ShaError {
    fn from(e: std::io::Error) -> Self {
        ShaError::Io(e.to_string())
    }
}

/// Type Result specialise pour sha256_fips.
pub type ShaResult<T> = Result<T, ShaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let e = ShaError::MessageTooLong { bytes: 42 };
        assert_eq!(
            e.to_string(),
            "[Input] message of 42 bytes exceeds the 2^64-bit length limit"
        );
        assert_eq!(ShaError::Config("bad".into()).to_string(), "[Config] bad");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: ShaError = io.into();
        assert_eq!(e, ShaError::Io("missing".into()));
    }
}
