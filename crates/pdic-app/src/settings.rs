use std::path::PathBuf;

use pdic_config::Config;

use crate::cli::Args;
use crate::output::{ErrorPolicy, Newline};

/// Effective settings for one run: command-line flags first, then the config
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: String,
    pub dictionary: Option<PathBuf>,
    pub directory: PathBuf,
    pub encoding: Option<String>,
    pub output_encoding: String,
    pub errors: ErrorPolicy,
    pub newline: Newline,
}

impl Settings {
    /// `default_dir` is only consulted when the config names no dictionary directory
    pub fn resolve(
        args: &Args,
        config: &Config,
        default_dir: impl FnOnce() -> anyhow::Result<PathBuf>,
    ) -> anyhow::Result<Self> {
        let directory = match &config.dictionary.directory {
            Some(dir) => dir.clone(),
            None => default_dir()?,
        };

        Ok(Self {
            language: args.language.clone().unwrap_or_else(|| config.language.clone()),
            dictionary: args.dictionary.clone(),
            directory,
            encoding: args
                .encoding
                .clone()
                .or_else(|| config.dictionary.encoding.clone()),
            output_encoding: args
                .output_encoding
                .clone()
                .unwrap_or_else(|| config.output.encoding.clone()),
            errors: args
                .output_errors
                .as_deref()
                .unwrap_or(&config.output.errors)
                .parse()?,
            newline: args
                .output_newline
                .as_deref()
                .unwrap_or(&config.output.newline)
                .parse()?,
        })
    }
}
