pub mod esperanto;
pub mod indonesian;
pub mod language;
pub mod lojban;
pub mod registry;
pub mod spanish;

pub use language::Language;
pub use registry::{Registry, UnknownLanguage, list_languages, registry, resolve};

/// Applies each `(from, to)` replacement in order over the whole string
pub(crate) fn translate(s: &str, pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Maps every character found in `table` to its plain counterpart
pub(crate) fn substitute(s: &str, table: &[(char, char)]) -> String {
    s.chars()
        .map(|c| {
            table
                .iter()
                .find(|(accented, _)| *accented == c)
                .map(|(_, plain)| *plain)
                .unwrap_or(c)
        })
        .collect()
}
