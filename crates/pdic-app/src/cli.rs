use std::path::PathBuf;

use clap::Parser;
use pdic_core::LookupOptions;

/// A simple lookup tool for PDIC dictionaries.
///
/// Dictionaries must be in PDIC 1-line text format.
#[derive(Parser, Debug)]
#[command(name = "pdic")]
#[command(version)]
#[command(about = "A simple lookup tool for PDIC dictionaries")]
pub struct Args {
    /// Words to look up. A quoted phrase is looked up as one word.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Show supported languages
    #[arg(long)]
    pub list: bool,

    /// Target language code, e.g. epo
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Use this dictionary file
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Encoding of the dictionary file
    #[arg(short, long, value_name = "ENC")]
    pub encoding: Option<String>,

    /// Keep reading queries from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Search descriptions
    #[arg(short, long)]
    pub reverse: bool,

    /// Search phrases also
    #[arg(short, long)]
    pub phrase: bool,

    /// Search literally, without folding diacritics
    #[arg(short = 'A', long)]
    pub literal: bool,

    /// Search normalized form (experimental)
    #[arg(short, long)]
    pub normalize: bool,

    /// Report words that are not found
    #[arg(short, long)]
    pub verbose: bool,

    /// Put a blank line between descriptions
    #[arg(short = '2', long = "double-space")]
    pub double_space: bool,

    /// Output file, `-` for stdout
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: String,

    /// Output encoding [default: utf-8]
    #[arg(long, value_name = "ENC")]
    pub output_encoding: Option<String>,

    /// strict, ignore, replace, xmlcharrefreplace or backslashreplace [default: strict]
    #[arg(long, value_name = "METHOD")]
    pub output_errors: Option<String>,

    /// none, cr, lf or crlf [default: crlf]
    #[arg(long, value_name = "NL")]
    pub output_newline: Option<String>,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> LookupOptions {
        LookupOptions {
            reverse: self.reverse,
            phrase: self.phrase,
            literal: self.literal,
            normalize: self.normalize,
            verbose: self.verbose,
            doublespace: self.double_space,
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output == "-"
    }
}
