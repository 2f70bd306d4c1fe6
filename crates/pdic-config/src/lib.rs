use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::output::OutputConfig;

pub mod dictionary;
pub mod output;

fn default_language() -> String {
    "epo".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language code used when none is given on the command line
    #[serde(default = "default_language")]
    pub language: String,
    pub dictionary: DictionaryConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: DictionaryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults, overridden by `PDIC_*` environment variables
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|name| env::var(name).ok());
    }

    /// Override settings from a variable source such as the environment
    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(language) = var("PDIC_LANGUAGE") {
            self.language = language;
        }
        if let Some(dir) = var("PDIC_DICTIONARY_DIR") {
            self.dictionary.directory = Some(PathBuf::from(dir));
        }
        if let Some(encoding) = var("PDIC_DICTIONARY_ENCODING") {
            self.dictionary.encoding = Some(encoding);
        }
        if let Some(encoding) = var("PDIC_OUTPUT_ENCODING") {
            self.output.encoding = encoding;
        }
        if let Some(errors) = var("PDIC_OUTPUT_ERRORS") {
            self.output.errors = errors;
        }
        if let Some(newline) = var("PDIC_OUTPUT_NEWLINE") {
            self.output.newline = newline;
        }
    }
}
