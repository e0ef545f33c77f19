use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use crate::error::WeatherError;

/// Environment variable consulted when `--api-key` is absent.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk. The lowest-priority API key
/// source, after the `--api-key` flag and the environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self, WeatherError> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|err| {
            WeatherError::Configuration(format!(
                "failed to read config file {}: {err}",
                path.display()
            ))
        })?;

        Self::from_toml(&contents).map_err(|err| {
            WeatherError::Configuration(format!(
                "failed to parse config file {}: {err}",
                path.display()
            ))
        })
    }

    fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, WeatherError> {
        let dirs = ProjectDirs::from("dev", "weather-app", "weather-cli").ok_or_else(|| {
            WeatherError::Configuration(
                "could not determine platform config directory".to_string(),
            )
        })?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Resolve the API key from the explicit flag, the environment, and the
/// config file, in that priority order. Failing all three is an error.
pub fn resolve_api_key(flag: Option<String>, config: &Config) -> Result<String, WeatherError> {
    pick_api_key(flag, env::var(API_KEY_ENV).ok(), config.api_key.clone()).ok_or_else(|| {
        WeatherError::Configuration(format!(
            "API key is required. Pass --api-key, set {API_KEY_ENV}, \
             or add `api_key` to the config file."
        ))
    })
}

/// Priority: flag > environment > config file. Blank values count as unset.
fn pick_api_key(
    flag: Option<String>,
    env: Option<String>,
    file: Option<String>,
) -> Option<String> {
    [flag, env, file]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment_and_file() {
        let key = pick_api_key(
            Some("FLAG_KEY".to_string()),
            Some("ENV_KEY".to_string()),
            Some("FILE_KEY".to_string()),
        );
        assert_eq!(key.as_deref(), Some("FLAG_KEY"));
    }

    #[test]
    fn environment_wins_over_file() {
        let key = pick_api_key(None, Some("ENV_KEY".to_string()), Some("FILE_KEY".to_string()));
        assert_eq!(key.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn file_is_the_last_resort() {
        let key = pick_api_key(None, None, Some("FILE_KEY".to_string()));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn blank_values_are_skipped() {
        let key = pick_api_key(Some("  ".to_string()), None, Some("FILE_KEY".to_string()));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn no_source_yields_nothing() {
        assert_eq!(pick_api_key(None, None, None), None);
    }

    #[test]
    fn parses_api_key_from_toml() {
        let cfg = Config::from_toml("api_key = \"FILE_KEY\"\n").expect("valid toml");
        assert_eq!(cfg.api_key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn empty_config_has_no_key() {
        let cfg = Config::from_toml("").expect("empty toml is valid");
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        // Precedence logic only; resolve_api_key additionally consults the
        // process environment, which tests must not depend on.
        let picked = pick_api_key(None, None, None);
        assert!(picked.is_none());

        let err = picked.ok_or_else(|| {
            WeatherError::Configuration("API key is required".to_string())
        });
        assert!(matches!(err, Err(WeatherError::Configuration(_))));
    }
}
