use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pdic_config::Config;
use tracing_subscriber::EnvFilter;

use self::cli::Args;
use self::output::OutputSink;
use self::query::join_quoted;
use self::session::Session;
use self::settings::Settings;

pub mod cli;
pub mod output;
pub mod query;
pub mod repl;
pub mod session;
pub mod settings;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();

    if args.list {
        for (name, codes) in pdic_core::list_languages() {
            println!("{name}: {}", codes.join(", "));
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };

    let settings = Settings::resolve(&args, &config, exe_dir)?;
    let mut session = Session::new(
        &settings.language,
        settings.dictionary,
        settings.directory,
        settings.encoding,
        args.options(),
    )?;
    tracing::debug!(
        "Language {} with dictionaries in {}",
        session.language(),
        session.directory().display()
    );

    let writer: Box<dyn Write> = if args.writes_to_stdout() {
        Box::new(io::stdout())
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Cannot create output file {}", args.output))?;
        Box::new(BufWriter::new(file))
    };
    let sink = OutputSink::new(
        writer,
        &settings.output_encoding,
        settings.errors,
        settings.newline,
    )?;
    let mut sink = sink.autoflush(args.writes_to_stdout());

    let words = join_quoted(&args.words);
    if !words.is_empty() {
        let result = session.lookup(&words, &mut sink)?;
        tracing::debug!("{} lines matched", result.matched_lines);
    }

    if args.interactive {
        if args.writes_to_stdout() {
            let prompt = atty::is(atty::Stream::Stdin).then(io::stdout);
            repl::run(&mut session, io::stdin().lock(), &mut sink, prompt)?;
        } else {
            tracing::warn!("Interactive mode needs output on stdout, ignoring -i");
        }
    }

    sink.flush()?;
    Ok(())
}

/// Logs go to stderr so stdout carries only lookup output.
///
/// `RUST_LOG` sets the filter, `PDIC_LOG_FORMAT=json` switches to JSON lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if env::var("PDIC_LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Directory of the running executable, where dictionaries live by default
fn exe_dir() -> anyhow::Result<PathBuf> {
    let exe = env::current_exe().context("Cannot locate the executable")?;
    Ok(exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}
