// sha256_fips - Lecture du fichier de configuration
//
// Le fichier regle le niveau de log et la trace du pipeline :
//
//     [log]
//     level = "debug"       # off | error | warn | info | debug | trace
//     [trace]
//     rounds = true
//
// Sections et cles sont normalisees en minuscules. Une ligne sans `=`
// est ignoree ; une cle placee avant toute section va dans `general`.
// `serialize_config` reecrit un fichier trie, donc stable d'un appel
// a l'autre.

use std::collections::HashMap;
use std::fmt::Write;

/// Sections -> (cle -> valeur brute).
pub type ParsedConfig = HashMap<String, HashMap<String, String>>;

/// Section implicite des cles ecrites avant le premier `[nom]`.
const DEFAULT_SECTION: &str = "general";

/// Parse le texte du fichier de configuration.
pub fn parse_config(text: &str) -> ParsedConfig {
    let mut config = ParsedConfig::new();
    let mut section = DEFAULT_SECTION.to_string();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = name.trim().to_lowercase();
            continue;
        }
        let Some((key, raw)) = line.split_once('=') else {
            continue;
        };
        config
            .entry(section.clone())
            .or_default()
            .insert(key.trim().to_lowercase(), unquote(before_comment(raw)).to_string());
    }

    config
}

/// Partie d'une valeur precedant un `#` hors guillemets.
fn before_comment(raw: &str) -> &str {
    let mut quoted = false;
    for (i, c) in raw.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '#' if !quoted => return raw[..i].trim(),
            _ => {}
        }
    }
    raw.trim()
}

/// Retire une paire de guillemets englobante.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Reecrit une configuration, sections et cles triees.
pub fn serialize_config(config: &ParsedConfig) -> String {
    let mut out = String::new();
    let mut sections: Vec<_> = config.iter().collect();
    sections.sort_by_key(|(name, _)| *name);

    for (name, pairs) in sections {
        let _ = writeln!(out, "[{}]", name);
        let mut pairs: Vec<_> = pairs.iter().collect();
        pairs.sort_by_key(|(key, _)| *key);
        for (key, value) in pairs {
            if value.contains(' ') || value.contains('#') {
                let _ = writeln!(out, "{} = \"{}\"", key, value);
            } else {
                let _ = writeln!(out, "{} = {}", key, value);
            }
        }
        out.push('\n');
    }

    out
}

/// Parse une valeur comme booleen.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let text = r#"
[log]
level = debug

[trace]
rounds = true
"#;
        let config = parse_config(text);
        assert_eq!(config["log"]["level"], "debug");
        assert_eq!(config["trace"]["rounds"], "true");
    }

    #[test]
    fn test_parse_comments() {
        let text = "# comment\nkey = value # inline comment\n";
        let config = parse_config(text);
        assert_eq!(config["general"]["key"], "value");
    }

    #[test]
    fn test_parse_quoted_value() {
        let text = "name = \"with # hash\"\n";
        let config = parse_config(text);
        assert_eq!(config["general"]["name"], "with # hash");
    }

    #[test]
    fn test_key_before_section_and_case() {
        let config = parse_config("Level = info\n[LOG]\nLEVEL = trace\nno equals sign\n");
        assert_eq!(config["general"]["level"], "info");
        assert_eq!(config["log"]["level"], "trace");
        assert_eq!(config["log"].len(), 1);
    }

    #[test]
    fn test_unquote_keeps_lone_quote() {
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(before_comment(" on # why "), "on");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" OFF "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let text = "[log]\nlevel = trace\n\n[trace]\nrounds = true\nschedule = false\n\n";
        let config = parse_config(text);
        let serialized = serialize_config(&config);
        assert_eq!(serialized, text);
        assert_eq!(parse_config(&serialized), config);
    }
}
