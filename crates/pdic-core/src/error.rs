use std::io;
use std::path::PathBuf;

use pdic_languages::UnknownLanguage;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),

    #[error("Dictionary not found: {}", .path.display())]
    DictionaryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Unsupported dictionary encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid search pattern for '{word}': {source}")]
    InvalidPattern {
        word: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Output error: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
