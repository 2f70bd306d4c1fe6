use std::fmt;
use std::str::FromStr;

use crate::registry::{self, UnknownLanguage};
use crate::{esperanto, indonesian, lojban, spanish};

/// Dictionary languages known to the lookup tool.
///
/// Each variant carries its own transliteration rules. Transforms that a
/// language does not customize are the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Indonesian,
    English,
    Lojban,
    Esperanto,
    Spanish,
}

impl Language {
    /// Every built-in language, in catalog order
    pub const ALL: [Language; 5] = [
        Language::Indonesian,
        Language::English,
        Language::Lojban,
        Language::Esperanto,
        Language::Spanish,
    ];

    /// Human readable name shown in language listings
    pub fn name(&self) -> &'static str {
        match self {
            Language::Indonesian => "Bahasa Indonesia",
            Language::English => "English",
            Language::Lojban => "Lojban",
            Language::Esperanto => "Esperanto",
            Language::Spanish => "Español",
        }
    }

    /// ISO 639-1 code, if the language has one
    pub fn iso639_1(&self) -> Option<&'static str> {
        match self {
            Language::Indonesian => Some("id"),
            Language::English => Some("en"),
            Language::Lojban => None,
            Language::Esperanto => Some("eo"),
            Language::Spanish => Some("es"),
        }
    }

    /// ISO 639-3 code
    pub fn iso639_3(&self) -> Option<&'static str> {
        match self {
            Language::Indonesian => Some("ind"),
            Language::English => Some("eng"),
            Language::Lojban => Some("jbo"),
            Language::Esperanto => Some("epo"),
            Language::Spanish => Some("spa"),
        }
    }

    /// All codes this language answers to
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        [self.iso639_1(), self.iso639_3()].into_iter().flatten()
    }

    /// File name of the default dictionary for this language
    pub fn dictionary_file(&self) -> &'static str {
        match self {
            Language::Indonesian => "ind.dic",
            Language::English => "eng.dic",
            Language::Lojban => "jbo.dic",
            Language::Esperanto => "epo.dic",
            Language::Spanish => "spa.dic",
        }
    }

    /// Encoding label of the default dictionary
    pub fn encoding(&self) -> &'static str {
        "utf-8"
    }

    /// Replace native accented letters with their ASCII typing convention
    pub fn decompose(&self, s: &str) -> String {
        match self {
            Language::Esperanto => esperanto::decompose(s),
            Language::Spanish => spanish::decompose(s),
            _ => s.to_string(),
        }
    }

    /// Join ASCII typing conventions back into native letters
    pub fn compose(&self, s: &str) -> String {
        match self {
            Language::Esperanto => esperanto::compose(s),
            Language::Spanish => spanish::compose(s),
            Language::Lojban => lojban::compose(s),
            _ => s.to_string(),
        }
    }

    /// Reduce an inflected word to the form used as a search stem.
    ///
    /// A leading or trailing `*` wildcard survives the transform.
    pub fn normalize(&self, s: &str) -> String {
        match self {
            Language::Esperanto => esperanto::normalize(s),
            Language::Indonesian => indonesian::normalize(s),
            _ => s.to_string(),
        }
    }

    /// Strip diacritics down to plain ASCII letters
    pub fn asciify(&self, s: &str) -> String {
        let table = self.ascii_table();
        if table.is_empty() {
            return s.to_string();
        }
        crate::substitute(s, table)
    }

    fn ascii_table(&self) -> &'static [(char, char)] {
        match self {
            Language::Esperanto => esperanto::ASCII,
            Language::Spanish => spanish::ASCII,
            _ => &[],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        registry::resolve(code)
    }
}
