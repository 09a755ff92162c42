//! Optional `config.toml` under the user config dir. CLI flags override
//! anything set here.

use std::path::{Path, PathBuf};

use neoncode_core_types::{SoundTheme, Theme};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown theme '{0}' (expected one of: cyberpunk, hacker, dark, neon)")]
    UnknownTheme(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: Option<Theme>,
    pub sound_theme: Option<SoundTheme>,
    pub username: Option<String>,
}

impl Config {
    /// Load from the given path, or from the default location. A missing
    /// file is not an error, flags and defaults cover everything.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&raw)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("neoncode").join("config.toml"))
}

/// Parse a `--theme` flag value by its display label.
pub fn parse_theme(value: &str) -> Result<Theme, ConfigError> {
    let lower = value.trim().to_lowercase();
    Theme::ALL
        .iter()
        .copied()
        .find(|theme| theme.label() == lower)
        .ok_or(ConfigError::UnknownTheme(lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config =
            toml::from_str("theme = \"hacker\"\nsound_theme = \"lofi\"\nusername = \"Nova\"")
                .unwrap();
        assert_eq!(config.theme, Some(Theme::Hacker));
        assert_eq!(config.sound_theme, Some(SoundTheme::Lofi));
        assert_eq!(config.username.as_deref(), Some("Nova"));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.theme.is_none());
        assert!(config.sound_theme.is_none());
        assert!(config.username.is_none());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(toml::from_str::<Config>("volume = 3").is_err());
    }

    #[test]
    fn theme_flag_parsing() {
        assert_eq!(parse_theme("Neon").unwrap(), Theme::Neon);
        assert!(matches!(
            parse_theme("solarized"),
            Err(ConfigError::UnknownTheme(_))
        ));
    }
}
