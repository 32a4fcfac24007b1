use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "almanac.toml";

/// Top-level almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Defaults applied when a command flag is not given.
    #[serde(default)]
    pub defaults: DefaultsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    /// IANA zone id; `None` means the system zone.
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            zone: None,
            locale: default_locale(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}
fn default_date_format() -> String {
    "YYYY-MM-DD".to_string()
}
fn default_datetime_format() -> String {
    "YYYY-MM-DD hh:mm:ss".to_string()
}

impl AlmanacConfig {
    /// Loads `path`, or `almanac.toml` if it exists, or the built-in defaults.
    ///
    /// An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AlmanacConfig::from_toml("").unwrap();
        assert_eq!(config.defaults.zone, None);
        assert_eq!(config.defaults.locale, "en");
        assert_eq!(config.defaults.date_format, "YYYY-MM-DD");
        assert_eq!(config.defaults.datetime_format, "YYYY-MM-DD hh:mm:ss");
    }

    #[test]
    fn partial_defaults_section() {
        let config = AlmanacConfig::from_toml(
            r#"
            [defaults]
            zone = "Africa/Cairo"
            locale = "fr"
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.zone.as_deref(), Some("Africa/Cairo"));
        assert_eq!(config.defaults.locale, "fr");
        assert_eq!(config.defaults.date_format, "YYYY-MM-DD");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AlmanacConfig::from_toml("[defaults]\ntimezone = \"UTC\"\n").is_err());
        assert!(AlmanacConfig::from_toml("[output]\n").is_err());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = AlmanacConfig::load(Some(Path::new("/nonexistent/almanac.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
