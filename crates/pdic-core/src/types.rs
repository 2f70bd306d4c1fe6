use std::io;

/// Switches that shape a lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Search descriptions instead of headwords
    pub reverse: bool,
    /// Also match the word as the start of a multi-word headword
    pub phrase: bool,
    /// Compare without folding diacritics to ASCII
    pub literal: bool,
    /// Search the normalized (stemmed) form of each word
    pub normalize: bool,
    /// Report words that matched nothing
    pub verbose: bool,
    /// Put a blank line between emitted lines
    pub doublespace: bool,
}

/// Destination for lookup output, one line at a time without terminators
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// How many dictionary lines a single query word matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub matches: usize,
}

/// Summary of one lookup. The lines themselves go to the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Dictionary lines emitted
    pub matched_lines: usize,
    /// Per-word counts, in query order
    pub words: Vec<WordCount>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matched_lines == 0
    }

    /// Query words that matched no line
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(|w| w.matches == 0)
            .map(|w| w.word.as_str())
    }
}
