use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use pdic_languages::Language;

use crate::error::{LookupError, Result};

/// A PDIC 1-line text dictionary, read front to back without indexing
pub struct DictionaryFile {
    path: PathBuf,
    reader: BufReader<File>,
    encoding: &'static Encoding,
}

impl DictionaryFile {
    /// Open a dictionary decoded with the encoding named by `label`
    pub fn open(path: impl AsRef<Path>, label: &str) -> Result<Self> {
        let path = path.as_ref();
        let encoding = resolve_encoding(label)?;
        let file = File::open(path).map_err(|source| LookupError::DictionaryNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            "Opened dictionary {} ({})",
            path.display(),
            encoding.name()
        );

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            encoding,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Decoded lines without their terminators
    pub fn lines(self) -> Lines {
        Lines {
            reader: self.reader,
            encoding: self.encoding,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

/// Iterator over the decoded lines of a [`DictionaryFile`]
pub struct Lines {
    reader: BufReader<File>,
    encoding: &'static Encoding,
    buf: Vec<u8>,
    line_no: usize,
}

impl Iterator for Lines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
                    self.buf.pop();
                }

                let (text, had_errors) = self.encoding.decode_without_bom_handling(&self.buf);
                if had_errors {
                    tracing::warn!(
                        "Line {} is not valid {}, undecodable bytes replaced",
                        self.line_no,
                        self.encoding.name()
                    );
                }

                let mut text = text.into_owned();
                if self.line_no == 1 && text.starts_with('\u{feff}') {
                    text.remove(0);
                }
                Some(Ok(text))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Resolve an encoding label such as `utf-8` or `latin1`.
///
/// Only ASCII-compatible encodings can be scanned line by line.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| LookupError::UnknownEncoding(label.to_string()))?;

    if !encoding.is_ascii_compatible() {
        return Err(LookupError::UnsupportedEncoding(encoding.name().to_string()));
    }

    Ok(encoding)
}

/// Default dictionary location for a language inside `dir`
pub fn dictionary_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(language.dictionary_file())
}
