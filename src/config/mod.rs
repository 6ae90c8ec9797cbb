// sha256_fips - Module config
// Lecture de la configuration de journalisation et de trace
//
// La configuration est un fichier texte au format cle-valeur avec
// sections, designe par la variable d'environnement SHA256_FIPS_CONFIG.
// La variable SHA256_FIPS_LOG surcharge le niveau de log.
//
// # Sous-modules
// - `parser`   : parseur generique cle-valeur avec sections, commentaires
//                et guillemets ; serialisation deterministe.
// - `settings` : structure Settings (niveau de log, drapeaux de trace)
//                avec valeurs par defaut et application globale.
//
// # Utilisation
// ```rust,ignore
// let settings = Settings::from_env()?;
// settings.apply();
// ```

/// Parseur de fichiers de configuration au format cle-valeur avec sections.
pub mod parser;
/// Structure de configuration et valeurs par defaut.
pub mod settings;
