use unicode_normalization::UnicodeNormalization;

/// Accent mark emitted by [`decompose`]
pub const DEFAULT_ACCENT: char = '^';

/// Letters that carry a circumflex (or breve, for ŭ) and their base letters
const LETTERS: [(char, char); 12] = [
    ('ĉ', 'c'),
    ('ĝ', 'g'),
    ('ĥ', 'h'),
    ('ĵ', 'j'),
    ('ŝ', 's'),
    ('ŭ', 'u'),
    ('Ĉ', 'C'),
    ('Ĝ', 'G'),
    ('Ĥ', 'H'),
    ('Ĵ', 'J'),
    ('Ŝ', 'S'),
    ('Ŭ', 'U'),
];

pub(crate) const ASCII: &[(char, char)] = &LETTERS;

/// Words ending in -u or -as/-is/-os/-us that are not verb forms
const INVARIABLE: &[&str] = &[
    "bis", "cis", "ĝis", "ĉiu", "ĉu", "du", "hu", "iu", "ju", "kiu", "mu", "neniu", "unu", "nu",
    "plu", "tiu", "u", "ĵus", "minus", "plus",
];

const VERB_ENDINGS: [&str; 4] = ["as", "is", "os", "us"];

/// `ĉ` → `c^`, using the default accent mark
pub fn decompose(s: &str) -> String {
    decompose_with(s, DEFAULT_ACCENT)
}

/// `ĉ` → `c` followed by `accent`
pub fn decompose_with(s: &str, accent: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match LETTERS.iter().find(|(accented, _)| *accented == c) {
            Some((_, base)) => {
                out.push(*base);
                out.push(accent);
            }
            None => out.push(c),
        }
    }
    out
}

/// `c^`, `cx` and `cX` → `ĉ`. Input is NFC-normalized first.
pub fn compose(s: &str) -> String {
    let s: String = s.nfc().collect();
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let accented = LETTERS
            .iter()
            .find(|(_, base)| *base == c)
            .map(|(accented, _)| *accented);

        match (accented, chars.peek()) {
            (Some(accented), Some('^' | 'x' | 'X')) => {
                chars.next();
                out.push(accented);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Turn a conjugated verb or an -u imperative into its -i infinitive.
///
/// Wildcards at either end are kept in place.
pub fn normalize(s: &str) -> String {
    let stem = s.trim_matches('*');
    if stem.is_empty() || INVARIABLE.contains(&stem) {
        return s.to_string();
    }

    let prefix = if s.starts_with('*') { "*" } else { "" };
    let suffix = if s.ends_with('*') { "*" } else { "" };

    let base = if let Some(root) = stem.strip_suffix('u') {
        format!("{root}i")
    } else if let Some(root) = VERB_ENDINGS.iter().find_map(|e| stem.strip_suffix(e)) {
        format!("{root}i")
    } else {
        stem.to_string()
    };

    format!("{prefix}{base}{suffix}")
}
