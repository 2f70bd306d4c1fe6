use serde::{Deserialize, Serialize};

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_errors() -> String {
    "strict".to_string()
}

fn default_newline() -> String {
    "crlf".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// strict, ignore, replace, xmlcharrefreplace or backslashreplace
    #[serde(default = "default_errors")]
    pub errors: String,
    /// none, cr, lf or crlf
    #[serde(default = "default_newline")]
    pub newline: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            errors: default_errors(),
            newline: default_newline(),
        }
    }
}
