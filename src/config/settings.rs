// sha256_fips - Structure de configuration et valeurs par defaut
//
// `Settings` regroupe le niveau de log et les drapeaux de trace du
// pipeline. Les valeurs manquantes ou invalides du fichier conservent
// leur defaut. Via `from_env`, un fichier SHA256_FIPS_CONFIG illisible
// (`ShaError::Io`) ou un niveau SHA256_FIPS_LOG inconnu
// (`ShaError::Config`) sont des erreurs : l'appelant les a choisis.
//
// # Fichier par defaut
// `default_config_text()` documente toutes les options disponibles.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::parser::{self, ParsedConfig};
use crate::constants::{CONFIG_ENV_VAR, LOG_ENV_VAR};
use crate::error::ShaResult;
use crate::logger::{self, LogLevel};

/// Configuration complete de la crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    // log
    pub log_level: LogLevel,
    // trace
    pub trace_rounds: bool,
    pub trace_schedule: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            trace_rounds: false,
            trace_schedule: false,
        }
    }
}

impl Settings {
    /// Charge la configuration depuis un fichier. Utilise les defauts si illisible.
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            crate::log_warn!("cannot read config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Charge la configuration depuis un fichier, en propageant l'erreur d'I/O.
    pub fn try_load(path: &Path) -> ShaResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Construit la configuration depuis un texte cle-valeur.
    pub fn from_text(text: &str) -> Self {
        let mut settings = Self::default();
        settings.apply_parsed(&parser::parse_config(text));
        settings
    }

    /// Lit SHA256_FIPS_CONFIG puis SHA256_FIPS_LOG.
    pub fn from_env() -> ShaResult<Self> {
        let mut settings = match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::try_load(Path::new(&path))?,
            None => Self::default(),
        };
        if let Ok(level) = env::var(LOG_ENV_VAR) {
            settings.log_level = LogLevel::parse(&level).map_err(|e| {
                crate::log_error!("{}: {}", LOG_ENV_VAR, e);
                e
            })?;
        }
        Ok(settings)
    }

    /// Installe le niveau et les drapeaux de trace dans le logger global.
    pub fn apply(&self) {
        logger::set_level(self.log_level);
        logger::set_trace_rounds(self.trace_rounds);
        logger::set_trace_schedule(self.trace_schedule);
        crate::log_info!(
            "log level {} (trace rounds={}, schedule={})",
            self.log_level,
            self.trace_rounds,
            self.trace_schedule
        );
    }

    /// Serialise la configuration au format du fichier.
    pub fn to_text(&self) -> String {
        let mut config = ParsedConfig::new();
        config
            .entry("log".into())
            .or_default()
            .insert("level".into(), self.log_level.as_str().into());
        let trace = config.entry("trace".into()).or_default();
        trace.insert("rounds".into(), self.trace_rounds.to_string());
        trace.insert("schedule".into(), self.trace_schedule.to_string());
        parser::serialize_config(&config)
    }

    /// Applique les valeurs parsees sur les parametres.
    fn apply_parsed(&mut self, config: &ParsedConfig) {
        if let Some(log) = config.get("log") {
            if let Some(v) = log.get("level") {
                match LogLevel::parse(v) {
                    Ok(level) => self.log_level = level,
                    Err(e) => crate::log_warn!("ignoring config value: {}", e),
                }
            }
        }

        if let Some(trace) = config.get("trace") {
            if let Some(v) = trace.get("rounds").and_then(|v| parser::parse_bool(v)) {
                self.trace_rounds = v;
            }
            if let Some(v) = trace.get("schedule").and_then(|v| parser::parse_bool(v)) {
                self.trace_schedule = v;
            }
        }
    }
}

/// Texte par defaut du fichier de configuration.
pub fn default_config_text() -> String {
    r#"# sha256_fips configuration
# Emplacement : chemin donne par SHA256_FIPS_CONFIG

[log]
# Niveau : off | error | warn | info | debug | trace
level = "warn"

[trace]
# Lignes TRACE supplementaires (niveau trace requis)
# rounds   : registres a..h apres chaque tour
# schedule : W[0..15] de chaque bloc
rounds = false
schedule = false
"#
    .to_string()
}
