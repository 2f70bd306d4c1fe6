pub mod dictionary;
pub mod error;
pub mod lookup;
pub mod pattern;
pub mod types;

pub use dictionary::DictionaryFile;
pub use error::{LookupError, Result};
pub use lookup::{Matcher, lookup};
pub use pdic_languages::{Language, list_languages};
pub use types::{LineSink, LookupOptions, MatchResult, WordCount};
