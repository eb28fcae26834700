/// Config file loading and creation for the swisspair CLI.
///
/// Config lives at ~/.config/swisspair/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default, Debug, PartialEq)]
pub struct SwisspairConfig {
    pub state_file: Option<String>,
    pub max_attempts: Option<usize>,
    pub log: Option<String>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# swisspair configuration
# All values here can be overridden by CLI flags.

# Tournament state (players and match results), stored as JSON
# state_file = \"~/.local/share/swisspair/tournament.json\"

# Repair swaps allowed before pairing gives up
# max_attempts = 100

# Default log filter when RUST_LOG is not set (e.g. \"info\", \"swisspair_core=debug\")
# log = \"warn\"
";

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home)
}

/// Returns the default config path: ~/.config/swisspair/config.toml
pub fn config_path() -> PathBuf {
    home_dir().join(".config").join("swisspair").join("config.toml")
}

/// Returns the default state path: ~/.local/share/swisspair/tournament.json
pub fn default_state_path() -> PathBuf {
    home_dir()
        .join(".local")
        .join("share")
        .join("swisspair")
        .join("tournament.json")
}

/// Expand a leading `~/` against $HOME.
pub fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(raw),
    }
}

pub fn parse_config(content: &str) -> Result<SwisspairConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> SwisspairConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SwisspairConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_empty_config() {
        let cfg = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg, SwisspairConfig::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let cfg = parse_config("state_file = \"/tmp/t.json\"\nmax_attempts = 25\nlog = \"debug\"\n").unwrap();
        assert_eq!(cfg.state_file.as_deref(), Some("/tmp/t.json"));
        assert_eq!(cfg.max_attempts, Some(25));
        assert_eq!(cfg.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_wrong_value_type_rejected() {
        assert!(parse_config("max_attempts = \"lots\"").is_err());
    }

    #[test]
    fn test_create_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        create_default_config(&path);
        assert!(path.exists());
        assert_eq!(load_config(&path), SwisspairConfig::default());
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(&dir.path().join("absent.toml")), SwisspairConfig::default());
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/var/lib/t.json"), PathBuf::from("/var/lib/t.json"));
    }
}
