use unicode_normalization::UnicodeNormalization;

use crate::translate;

/// Native letter and the digraph used to type it
const DIGRAPHS: &[(&str, &str)] = &[
    ("á", "a'"),
    ("é", "e'"),
    ("í", "i'"),
    ("ó", "o'"),
    ("ú", "u'"),
    ("ü", "u:"),
    ("ñ", "n~"),
];

/// Opening punctuation, typed as its closing counterpart
const OPENERS: &[(&str, &str)] = &[("¿", "?"), ("¡", "!")];

pub(crate) const ASCII: &[(char, char)] = &[
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ñ', 'n'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
    ('Ü', 'U'),
    ('Ñ', 'N'),
];

pub fn decompose(s: &str) -> String {
    translate(&translate(s, DIGRAPHS), OPENERS)
}

/// `?` and `!` become `¿` and `¡` only at the start of the word
pub fn compose(s: &str) -> String {
    let s: String = s.nfc().collect();
    let s = DIGRAPHS
        .iter()
        .fold(s, |acc, (native, digraph)| acc.replace(digraph, native));

    for (native, typed) in OPENERS {
        if let Some(rest) = s.strip_prefix(typed) {
            return format!("{native}{rest}");
        }
    }
    s
}
