// Search pattern construction
// Turns a prepared query word into a regex matched against dictionary lines

use regex::{Regex, RegexBuilder};

use crate::error::{LookupError, Result};
use crate::types::LookupOptions;

/// Regex standing in for the `*` wildcard
const WILDCARD: &str = r"\w*";

/// Optional period, gloss clause and homograph number, then the field separator
const HEADWORD_TAIL: &str = r"[.]?(?:,[^/]+)?(?: #[0-9]+)? /";

/// Where in the comparison text a word may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The whole headword, from the start of the line to ` /`
    Headword,
    /// The word followed by a space, anywhere in the headword
    Phrase,
    /// Anywhere at all
    Anywhere,
}

impl Anchor {
    /// Reverse searches are never anchored, so `phrase` only refines headwords
    pub fn for_options(options: &LookupOptions) -> Self {
        if options.reverse {
            Anchor::Anywhere
        } else if options.phrase {
            Anchor::Phrase
        } else {
            Anchor::Headword
        }
    }
}

/// Translate a word into regex syntax.
///
/// `*` becomes `\w*` and a group such as `(k|g)` becomes an alternation.
/// Everything else is escaped and matched literally.
///
/// Groups come from Indonesian normalization, but a `(a|b)` typed by the
/// user is turned into an alternation just the same.
pub fn word_to_regex(word: &str) -> String {
    let mut regex = String::with_capacity(word.len() * 2);
    let mut rest = word;

    while let Some(ch) = rest.chars().next() {
        if ch == '*' {
            regex.push_str(WILDCARD);
            rest = &rest[1..];
            continue;
        }

        if ch == '(' {
            if let Some((group, tail)) = alternation(rest) {
                regex.push_str(&group);
                rest = tail;
                continue;
            }
        }

        let mut buf = [0u8; 4];
        regex.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        rest = &rest[ch.len_utf8()..];
    }

    regex
}

/// Parse `(a|b|...)` at the start of `s` into a non-capturing group
fn alternation(s: &str) -> Option<(String, &str)> {
    let close = s.find(')')?;
    let inner = &s[1..close];
    if !inner.contains('|') || inner.contains(['(', '*']) {
        return None;
    }

    let branches: Vec<String> = inner.split('|').map(regex::escape).collect();
    Some((format!("(?:{})", branches.join("|")), &s[close + 1..]))
}

/// Full regex source for a word under the given anchoring
pub fn build_pattern(word: &str, anchor: Anchor) -> String {
    let body = word_to_regex(word);
    match anchor {
        Anchor::Headword => format!("^{body}{HEADWORD_TAIL}"),
        Anchor::Phrase => format!("{body} "),
        Anchor::Anywhere => body,
    }
}

/// Compile the case-insensitive regex for a word
pub fn compile(word: &str, anchor: Anchor) -> Result<Regex> {
    let pattern = build_pattern(word, anchor);
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| LookupError::InvalidPattern {
            word: word.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard() {
        assert_eq!(word_to_regex("hund*"), r"hund\w*");
        assert_eq!(word_to_regex("*o"), r"\w*o");
    }

    #[test]
    fn test_escapes_metacharacters() {
        assert_eq!(word_to_regex("a.m."), r"a\.m\.");
        assert_eq!(word_to_regex("c++"), r"c\+\+");
        assert_eq!(word_to_regex("?qué"), r"\?qué");
    }

    #[test]
    fn test_alternation_group() {
        assert_eq!(word_to_regex("*(k|g)irim"), r"\w*(?:k|g)irim");
        assert_eq!(word_to_regex("*(s|ny)apu"), r"\w*(?:s|ny)apu");
    }

    #[test]
    fn test_parenthesis_without_alternation_is_literal() {
        assert_eq!(word_to_regex("(a)"), r"\(a\)");
        assert_eq!(word_to_regex("(a|b"), r"\(a\|b");
    }

    #[test]
    fn test_headword_pattern() {
        let regex = compile("hundo", Anchor::Headword).unwrap();
        assert!(regex.is_match("hundo /"));
        assert!(regex.is_match("Hundo. /"));
        assert!(regex.is_match("hundo, hundino /"));
        assert!(regex.is_match("hundo #2 /"));
        assert!(!regex.is_match("hundodomo /"));
        assert!(!regex.is_match("granda hundo /"));
    }

    #[test]
    fn test_phrase_pattern() {
        let regex = compile("hundo", Anchor::Phrase).unwrap();
        assert!(regex.is_match("granda hundo kaj kato /"));
        assert!(regex.is_match("hundo /"));
        assert!(!regex.is_match("hundoj /"));
    }

    #[test]
    fn test_anywhere_pattern() {
        let regex = compile("dog", Anchor::Anywhere).unwrap();
        assert!(regex.is_match("hundo /a DOG"));
        assert!(!regex.is_match("kato /cat"));
    }

    #[test]
    fn test_anchor_for_options() {
        let mut options = LookupOptions::default();
        assert_eq!(Anchor::for_options(&options), Anchor::Headword);
        options.phrase = true;
        assert_eq!(Anchor::for_options(&options), Anchor::Phrase);
        options.reverse = true;
        assert_eq!(Anchor::for_options(&options), Anchor::Anywhere);
    }
}
