//! Configuration management.
//!
//! Configuration is read from `~/.config/lectern/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Missing fields fall back to their defaults.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_SPEECH_RATE: f32 = 0.67;
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presentation-only: preferred color scheme.
    pub dark_mode: bool,
    /// Presentation-only: speech rate handed to the playback service,
    /// in 0.0..=1.0.
    pub speech_rate: f32,
    /// Pagination depth cutoff for one fetch chain.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: true,
            speech_rate: DEFAULT_SPEECH_RATE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. If the file exists but is invalid, returns an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        Self::from_toml(&content, &config_path)
    }

    fn from_toml(content: &str, path: &PathBuf) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.speech_rate) {
            return Err(ConfigError::Invalid(format!(
                "speech_rate must be within 0.0..=1.0, got {}",
                self.speech_rate
            )));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Get the default config file path: `~/.config/lectern/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("lectern").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r#"# Lectern configuration

# Preferred color scheme for presentation layers.
dark_mode = true

# Speech rate handed to the text-to-speech service (0.0 to 1.0).
speech_rate = 0.67

# How many "next page" links one fetch may follow before giving up.
max_depth = 30
"#
        .to_string()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::from_toml(content, &PathBuf::from("test.toml"))
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.dark_mode);
        assert_eq!(config.speech_rate, DEFAULT_SPEECH_RATE);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_partial_config() {
        let config = parse("speech_rate = 0.5\n").unwrap();
        assert_eq!(config.speech_rate, 0.5);
        assert!(config.dark_mode);
    }

    #[test]
    fn test_speech_rate_out_of_range_rejected() {
        assert!(parse("speech_rate = 1.5\n").is_err());
        assert!(parse("speech_rate = -0.1\n").is_err());
    }

    #[test]
    fn test_zero_max_depth_rejected() {
        assert!(parse("max_depth = 0\n").is_err());
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config = parse(&Config::default_config_content()).unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.speech_rate, DEFAULT_SPEECH_RATE);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
