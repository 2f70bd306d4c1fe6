use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding `<code>.dic` files. Defaults to the executable's directory.
    pub directory: Option<PathBuf>,
    /// Overrides the language's default dictionary encoding
    pub encoding: Option<String>,
}
