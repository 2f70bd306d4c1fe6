use std::io::{self, BufRead, Write};

use pdic_core::LineSink;

use crate::query::join_quoted;
use crate::session::Session;

const HELP: [&str; 3] = [
    "Enter any words to look up in dictionary.",
    "-WORD to search words in descriptions.",
    "? / help to show this, q / quit to exit.",
];

/// One line of interactive input
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// Switch to the language with this code
    Switch(String),
    /// Look words up; `flip` inverts the headword/description side for this query only
    Lookup { words: Vec<String>, flip: bool },
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Command::Quit;
        }

        let folded = line.trim().to_lowercase();
        match folded.as_str() {
            "q" | "quit" | "bye" => return Command::Quit,
            "?" | "help" => return Command::Help,
            _ => {}
        }

        let code = line.trim();
        if code.parse::<pdic_core::Language>().is_ok() {
            return Command::Switch(code.to_string());
        }

        let (flip, rest) = match line.strip_prefix('-') {
            Some(_) => (true, line.trim_start_matches('-')),
            None => (false, line),
        };
        let tokens: Vec<&str> = rest.split_whitespace().collect();

        Command::Lookup {
            words: join_quoted(&tokens),
            flip,
        }
    }
}

/// Read queries from `input` until EOF or a quit command.
///
/// A failed query is reported on stderr and the session carries on.
pub fn run<R, S, P>(
    session: &mut Session,
    input: R,
    sink: &mut S,
    mut prompt: Option<P>,
) -> io::Result<()>
where
    R: BufRead,
    S: LineSink + ?Sized,
    P: Write,
{
    let mut lines = input.lines();

    loop {
        if let Some(out) = prompt.as_mut() {
            write!(out, "{}> ", session.code())?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                for line in HELP {
                    sink.write_line(line)?;
                }
            }
            Command::Switch(code) => {
                if let Err(e) = session.switch_language(&code) {
                    eprintln!("E: {e}");
                }
            }
            Command::Lookup { words, flip } => {
                if words.is_empty() {
                    continue;
                }
                let result = if flip {
                    session.lookup_reversed(&words, sink)
                } else {
                    session.lookup(&words, sink)
                };
                match result {
                    Ok(result) => tracing::debug!("{} lines matched", result.matched_lines),
                    Err(e) => {
                        tracing::debug!("Query {:?} failed: {e:?}", words);
                        eprintln!("E: {e}");
                    }
                }
            }
        }
    }

    Ok(())
}
