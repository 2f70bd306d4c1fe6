use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use pdic_languages::Language;
use regex::Regex;

use crate::dictionary::DictionaryFile;
use crate::error::{LookupError, Result};
use crate::pattern::{self, Anchor};
use crate::types::{LineSink, LookupOptions, MatchResult, WordCount};

/// Look words up in a dictionary file and stream the matching lines to `sink`.
///
/// `language` is a short code such as `epo`. Without an explicit
/// `dictionary` the language's default file in the working directory is
/// used, and without an `encoding` the language's default encoding.
pub fn lookup<W, S>(
    words: &[W],
    language: &str,
    dictionary: Option<&Path>,
    encoding: Option<&str>,
    options: &LookupOptions,
    sink: &mut S,
) -> Result<MatchResult>
where
    W: AsRef<str>,
    S: LineSink + ?Sized,
{
    let language = pdic_languages::resolve(language)?;
    let path = dictionary
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(language.dictionary_file()));

    let matcher = Matcher::new(language, words, *options)?;
    let file = DictionaryFile::open(&path, encoding.unwrap_or(language.encoding()))?;
    matcher.scan(file.lines(), sink)
}

struct QueryWord {
    /// The word as the user typed it
    raw: String,
    regex: Regex,
}

/// Compiled query, ready to scan any number of dictionaries
pub struct Matcher {
    language: Language,
    options: LookupOptions,
    words: Vec<QueryWord>,
}

impl Matcher {
    pub fn new<W: AsRef<str>>(
        language: Language,
        words: &[W],
        options: LookupOptions,
    ) -> Result<Self> {
        let anchor = Anchor::for_options(&options);

        let words = words
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                let form = Self::search_form(language, raw, &options);
                let regex = pattern::compile(&form, anchor)?;
                tracing::debug!("Search pattern for '{}': {}", raw, regex.as_str());
                Ok(QueryWord {
                    raw: raw.to_string(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            language,
            options,
            words,
        })
    }

    /// The form of `raw` that goes into the pattern: lowercased, composed,
    /// optionally normalized, and asciified unless searching literally
    pub fn search_form(language: Language, raw: &str, options: &LookupOptions) -> String {
        let mut word = language.compose(&raw.to_lowercase());
        if options.normalize {
            word = language.normalize(&word);
        }
        if !options.literal {
            word = language.asciify(&word);
        }
        word
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Text of `line` the patterns are tested against, or `None` if the line
    /// has no headword separator and headwords are being searched
    fn comparison_text<'a>(&self, line: &'a str) -> Option<Cow<'a, str>> {
        let text = if self.options.reverse {
            line
        } else {
            let end = line.find('/')?;
            &line[..=end]
        };

        if self.options.literal {
            Some(Cow::Borrowed(text))
        } else {
            Some(Cow::Owned(self.language.asciify(text)))
        }
    }

    /// Run every word against each line in a single pass
    pub fn scan<I, S>(&self, lines: I, sink: &mut S) -> Result<MatchResult>
    where
        I: IntoIterator<Item = io::Result<String>>,
        S: LineSink + ?Sized,
    {
        let mut output = Output {
            sink,
            doublespace: self.options.doublespace,
            emitted: 0,
        };
        let mut counts = vec![0usize; self.words.len()];
        let mut matched_lines = 0;

        for line in lines {
            let line = line?;
            let Some(text) = self.comparison_text(&line) else {
                continue;
            };

            let mut hit = false;
            for (word, count) in self.words.iter().zip(counts.iter_mut()) {
                if word.regex.is_match(&text) {
                    *count += 1;
                    hit = true;
                }
            }

            if hit {
                output.emit(line.trim_end())?;
                matched_lines += 1;
            }
        }

        let words: Vec<WordCount> = self
            .words
            .iter()
            .zip(counts)
            .map(|(word, matches)| WordCount {
                word: word.raw.clone(),
                matches,
            })
            .collect();

        if self.options.verbose {
            for word in words.iter().filter(|w| w.matches == 0) {
                output.emit(&format!("E: '{}' is not found", word.word))?;
            }
        }

        tracing::debug!(
            "Scan finished: {} lines matched for {} words",
            matched_lines,
            words.len()
        );

        Ok(MatchResult {
            matched_lines,
            words,
        })
    }
}

/// Applies the blank-line policy on top of a sink
struct Output<'s, S: LineSink + ?Sized> {
    sink: &'s mut S,
    doublespace: bool,
    emitted: usize,
}

impl<S: LineSink + ?Sized> Output<'_, S> {
    fn emit(&mut self, line: &str) -> Result<()> {
        if self.doublespace && self.emitted > 0 {
            self.sink.write_line("").map_err(LookupError::Output)?;
        }
        self.sink.write_line(line).map_err(LookupError::Output)?;
        self.emitted += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(language: Language, words: &[&str], options: LookupOptions, dict: &[&str]) -> Vec<String> {
        let matcher = Matcher::new(language, words, options).unwrap();
        let mut out: Vec<String> = Vec::new();
        matcher
            .scan(dict.iter().map(|l| Ok(l.to_string())), &mut out)
            .unwrap();
        out
    }

    #[test]
    fn test_search_form() {
        let options = LookupOptions::default();
        assert_eq!(
            Matcher::search_form(Language::Esperanto, "Cxevalo", &options),
            "cevalo"
        );

        let literal = LookupOptions {
            literal: true,
            ..Default::default()
        };
        assert_eq!(
            Matcher::search_form(Language::Esperanto, "Cxevalo", &literal),
            "ĉevalo"
        );

        let normalize = LookupOptions {
            normalize: true,
            literal: true,
            ..Default::default()
        };
        assert_eq!(
            Matcher::search_form(Language::Esperanto, "sxangxas", &normalize),
            "ŝanĝi"
        );
    }

    #[test]
    fn test_headword_match_ignores_diacritics() {
        let dict = ["ĉevalo /horse", "cevalo /not a word"];
        let out = scan(Language::Esperanto, &["cxevalo"], LookupOptions::default(), &dict);
        assert_eq!(out, dict);
    }

    #[test]
    fn test_literal_keeps_diacritics() {
        let dict = ["ĉevalo /horse", "cevalo /not a word"];
        let options = LookupOptions {
            literal: true,
            ..Default::default()
        };
        let out = scan(Language::Esperanto, &["cxevalo"], options, &dict);
        assert_eq!(out, ["ĉevalo /horse"]);
    }

    #[test]
    fn test_line_without_separator_is_skipped() {
        let dict = ["hundo", "hundo /dog"];
        let out = scan(Language::Esperanto, &["hundo"], LookupOptions::default(), &dict);
        assert_eq!(out, ["hundo /dog"]);
    }

    #[test]
    fn test_reverse_reads_lines_without_separator() {
        let dict = ["hundo dog"];
        let options = LookupOptions {
            reverse: true,
            ..Default::default()
        };
        let out = scan(Language::Esperanto, &["dog"], options, &dict);
        assert_eq!(out, ["hundo dog"]);
    }

    #[test]
    fn test_line_matched_by_two_words_is_emitted_once() {
        let dict = ["hundo /dog", "kato /cat"];
        let matcher = Matcher::new(
            Language::Esperanto,
            &["hundo", "hund*"],
            LookupOptions::default(),
        )
        .unwrap();
        let mut out: Vec<String> = Vec::new();
        let result = matcher
            .scan(dict.iter().map(|l| Ok(l.to_string())), &mut out)
            .unwrap();

        assert_eq!(out, ["hundo /dog"]);
        assert_eq!(result.matched_lines, 1);
        assert_eq!(result.words[0].matches, 1);
        assert_eq!(result.words[1].matches, 1);
    }

    #[test]
    fn test_verbose_names_each_missing_word() {
        let dict = ["hundo /dog"];
        let options = LookupOptions {
            verbose: true,
            ..Default::default()
        };
        let out = scan(
            Language::Esperanto,
            &["birdo", "hundo", "fiŝo"],
            options,
            &dict,
        );
        assert_eq!(
            out,
            [
                "hundo /dog",
                "E: 'birdo' is not found",
                "E: 'fiŝo' is not found"
            ]
        );
    }

    #[test]
    fn test_diagnostics_follow_doublespace() {
        let dict = ["hundo /dog"];
        let options = LookupOptions {
            verbose: true,
            doublespace: true,
            ..Default::default()
        };
        let out = scan(Language::Esperanto, &["hundo", "birdo"], options, &dict);
        assert_eq!(out, ["hundo /dog", "", "E: 'birdo' is not found"]);
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let dict = ["hundo /dog   \t"];
        let out = scan(Language::Esperanto, &["hundo"], LookupOptions::default(), &dict);
        assert_eq!(out, ["hundo /dog"]);
    }

    #[test]
    fn test_normalized_indonesian_prefix() {
        let dict = ["mengirim /to send", "kirim /send"];
        let options = LookupOptions {
            normalize: true,
            ..Default::default()
        };
        let out = scan(Language::Indonesian, &["*kirim"], options, &dict);
        assert_eq!(out, dict);
    }

    #[test]
    fn test_read_error_propagates() {
        let matcher =
            Matcher::new(Language::English, &["dog"], LookupOptions::default()).unwrap();
        let lines = vec![
            Ok("dog /hund".to_string()),
            Err(io::Error::other("disk gone")),
        ];
        let mut out: Vec<String> = Vec::new();
        let err = matcher.scan(lines, &mut out).unwrap_err();
        assert!(matches!(err, LookupError::Io(_)));
        assert_eq!(out, ["dog /hund"]);
    }
}
