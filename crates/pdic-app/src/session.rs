use std::path::{Path, PathBuf};

use pdic_core::dictionary::dictionary_path;
use pdic_core::{Language, LineSink, LookupOptions, MatchResult};

/// Lookup state that outlives a single query: the current language and where
/// its dictionary lives
#[derive(Debug, Clone)]
pub struct Session {
    /// Code the language was selected with, shown in the prompt
    code: String,
    language: Language,
    /// Fixed dictionary file, used for every language
    dictionary: Option<PathBuf>,
    /// Directory holding per-language dictionaries
    directory: PathBuf,
    encoding: Option<String>,
    options: LookupOptions,
}

impl Session {
    pub fn new(
        code: &str,
        dictionary: Option<PathBuf>,
        directory: PathBuf,
        encoding: Option<String>,
        options: LookupOptions,
    ) -> pdic_core::Result<Self> {
        let language: Language = code.parse()?;

        Ok(Self {
            code: code.to_lowercase(),
            language,
            dictionary,
            directory,
            encoding,
            options,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Dictionary file for the current language
    pub fn dictionary(&self) -> PathBuf {
        match &self.dictionary {
            Some(path) => path.clone(),
            None => dictionary_path(&self.directory, self.language),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Select another language. Leaves the session unchanged if `code` is unknown.
    pub fn switch_language(&mut self, code: &str) -> pdic_core::Result<()> {
        self.language = code.parse()?;
        self.code = code.to_lowercase();
        tracing::debug!("Switched language to {}", self.language);
        Ok(())
    }

    pub fn lookup<W, S>(&self, words: &[W], sink: &mut S) -> pdic_core::Result<MatchResult>
    where
        W: AsRef<str>,
        S: LineSink + ?Sized,
    {
        self.lookup_with(words, self.options, sink)
    }

    /// Look up with the session's options flipped to the opposite search side
    pub fn lookup_reversed<W, S>(&self, words: &[W], sink: &mut S) -> pdic_core::Result<MatchResult>
    where
        W: AsRef<str>,
        S: LineSink + ?Sized,
    {
        let options = LookupOptions {
            reverse: !self.options.reverse,
            ..self.options
        };
        self.lookup_with(words, options, sink)
    }

    fn lookup_with<W, S>(
        &self,
        words: &[W],
        options: LookupOptions,
        sink: &mut S,
    ) -> pdic_core::Result<MatchResult>
    where
        W: AsRef<str>,
        S: LineSink + ?Sized,
    {
        let dictionary = self.dictionary();
        pdic_core::lookup(
            words,
            &self.code,
            Some(dictionary.as_path()),
            self.encoding.as_deref(),
            &options,
            sink,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pdic_core::LookupError;

    use super::*;

    fn session_in(dir: &Path) -> Session {
        Session::new("epo", None, dir.to_path_buf(), None, LookupOptions::default()).unwrap()
    }

    #[test]
    fn test_unknown_language() {
        let err = Session::new("xx", None, PathBuf::new(), None, LookupOptions::default())
            .unwrap_err();
        assert!(matches!(err, LookupError::UnknownLanguage(_)));
    }

    #[test]
    fn test_dictionary_follows_language() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        assert_eq!(session.dictionary(), dir.path().join("epo.dic"));

        session.switch_language("ES").unwrap();
        assert_eq!(session.code(), "es");
        assert_eq!(session.language(), Language::Spanish);
        assert_eq!(session.dictionary(), dir.path().join("spa.dic"));

        assert!(session.switch_language("xx").is_err());
        assert_eq!(session.code(), "es");
    }

    #[test]
    fn test_fixed_dictionary_survives_switch() {
        let fixed = PathBuf::from("/tmp/mine.dic");
        let mut session = Session::new(
            "epo",
            Some(fixed.clone()),
            PathBuf::from("/srv"),
            None,
            LookupOptions::default(),
        )
        .unwrap();
        session.switch_language("eng").unwrap();
        assert_eq!(session.dictionary(), fixed);
    }

    #[test]
    fn test_lookup_and_reversed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("epo.dic"),
            "hundo /dog\nkato /cat, not a dog\n",
        )
        .unwrap();
        let session = session_in(dir.path());

        let mut out: Vec<String> = Vec::new();
        let result = session.lookup(&["hundo"], &mut out).unwrap();
        assert_eq!(result.matched_lines, 1);
        assert_eq!(out, ["hundo /dog"]);

        let mut out: Vec<String> = Vec::new();
        session.lookup_reversed(&["dog"], &mut out).unwrap();
        assert_eq!(out, ["hundo /dog", "kato /cat, not a dog"]);
    }

    #[test]
    fn test_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        let mut out: Vec<String> = Vec::new();
        let err = session.lookup(&["hundo"], &mut out).unwrap_err();
        assert!(matches!(err, LookupError::DictionaryNotFound { .. }));
    }
}
