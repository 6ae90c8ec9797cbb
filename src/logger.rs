// sha256_fips - Journalisation sur stderr
//
// Logger minimaliste a niveaux, sans dependance externe.
// Le seuil global est un `AtomicU8` : un niveau desactive ne coute
// qu'une lecture atomique, sans formatage des arguments.
//
// # Format
// `[<unix-millis>] [<LEVEL>] sha256_fips: <message>`
//
// # Trace du pipeline
// Deux drapeaux complementaires (`trace_rounds`, `trace_schedule`)
// autorisent les lignes les plus verbeuses du niveau TRACE : registres
// de travail a chaque tour et tete du message schedule par bloc.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ShaError, ShaResult};

/// Niveau de severite d'une ligne de log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Parse depuis une chaine (insensible a la casse).
    pub fn parse(s: &str) -> ShaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(ShaError::Config(format!("unknown log level '{}'", other))),
        }
    }

    /// Serialise en chaine minuscule (format du fichier de configuration).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Off,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        };
        write!(f, "{}", s)
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static TRACE_ROUNDS: AtomicBool = AtomicBool::new(false);
static TRACE_SCHEDULE: AtomicBool = AtomicBool::new(false);

/// Verrou global pour eviter l'entrelacement des lignes entre threads.
static LOGGER_LOCK: Mutex<()> = Mutex::new(());

/// Fixe le seuil global.
pub fn set_level(level: LogLevel) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Retourne le seuil global courant.
pub fn level() -> LogLevel {
    LogLevel::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Indique si une ligne de ce niveau serait emise.
pub fn enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && (level as u8) <= LEVEL.load(Ordering::Relaxed)
}

/// Active ou desactive la trace des registres a chaque tour.
pub fn set_trace_rounds(on: bool) {
    TRACE_ROUNDS.store(on, Ordering::Relaxed);
}

/// Active ou desactive la trace du message schedule.
pub fn set_trace_schedule(on: bool) {
    TRACE_SCHEDULE.store(on, Ordering::Relaxed);
}

/// Trace par tour active (drapeau ET niveau TRACE).
pub fn trace_rounds() -> bool {
    TRACE_ROUNDS.load(Ordering::Relaxed) && enabled(LogLevel::Trace)
}

/// Trace du schedule active (drapeau ET niveau TRACE).
pub fn trace_schedule() -> bool {
    TRACE_SCHEDULE.load(Ordering::Relaxed) && enabled(LogLevel::Trace)
}

/// Ecrit une ligne de log avec le niveau et le message formate.
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    // Un thread ayant panique en tenant le verrou ne doit pas couper les logs
    let _guard = LOGGER_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let millis = ts.as_secs() * 1000 + (ts.subsec_millis() as u64);

    let _ = writeln!(io::stderr(), "[{}] [{}] sha256_fips: {}", millis, level, args);
}

// ------------- Macros -------------

/// Emet une ligne de niveau ERROR.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, format_args!($($arg)*))
    };
}

/// Emet une ligne de niveau WARN.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, format_args!($($arg)*))
    };
}

/// Emet une ligne de niveau INFO.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, format_args!($($arg)*))
    };
}

/// Emet une ligne de niveau DEBUG.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Debug) {
            $crate::logger::log($crate::logger::LogLevel::Debug, format_args!($($arg)*))
        }
    };
}

/// Emet une ligne de niveau TRACE.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Trace) {
            $crate::logger::log($crate::logger::LogLevel::Trace, format_args!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::parse(" DEBUG ").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::parse("off").unwrap(), LogLevel::Off);
        assert!(matches!(LogLevel::parse("loud"), Err(ShaError::Config(_))));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Info.as_str(), "info");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    // Seul test qui modifie l'etat global du logger.
    #[test]
    fn test_tracing_does_not_change_digest() {
        let quiet = crate::hash(b"abc").unwrap();

        crate::Settings::from_text("[log]\nlevel = trace\n[trace]\nrounds = on\nschedule = on\n")
            .apply();
        assert_eq!(level(), LogLevel::Trace);
        assert!(enabled(LogLevel::Debug));
        assert!(trace_rounds());
        let traced = crate::hash(b"abc").unwrap();

        set_level(LogLevel::Off);
        set_trace_rounds(false);
        set_trace_schedule(false);
        assert!(!enabled(LogLevel::Error));
        assert!(!trace_rounds());

        assert_eq!(quiet, traced);
    }
}
