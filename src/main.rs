//! Command-line interface for the slugline binary.
//!
//! Each positional argument is converted into a slug and printed on its own
//! line. Without arguments, lines are read from standard input instead.

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{ArgAction, Parser};
use slugline::{Error, SlugOptions, StopWords, parse_options, slugify_all};
use tracing_subscriber::EnvFilter;

/// Command line interface for converting text into slugs.
#[derive(Debug, Parser,)]
#[command(name = "slugline", version, about = "Convert text into URL-safe slugs")]
struct Cli
{
    /// Text to convert. Reads lines from stdin when omitted.
    #[arg(value_name = "TEXT")]
    text: Vec<String,>,

    /// Inline YAML or JSON options document; flags below override it.
    #[arg(long = "options", value_name = "DOC")]
    options: Option<String,>,

    /// String used to join words.
    #[arg(long = "separator", value_name = "SEP", allow_hyphen_values = true)]
    separator: Option<String,>,

    /// Keep the original letter case.
    #[arg(long = "keep-case", action = ArgAction::SetTrue)]
    keep_case: bool,

    /// Disable the locale transliteration table.
    #[arg(long = "no-locale", action = ArgAction::SetTrue)]
    no_locale: bool,

    /// Treat underscores as disallowed characters.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Maximum slug length in characters.
    #[arg(long = "max-length", value_name = "N")]
    max_length: Option<usize,>,

    /// Remove common English stop words.
    #[arg(long = "remove-stop-words", action = ArgAction::SetTrue)]
    remove_stop_words: bool,

    /// Remove this word instead of the default stop words. Repeatable.
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String,>,

    /// Custom replacement in FROM=TO form. Repeatable.
    #[arg(long = "replace", value_name = "FROM=TO")]
    replacements: Vec<String,>,

    /// Print a JSON array instead of one slug per line.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),),
        )
        .with_writer(io::stderr,)
        .init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates option decoding failures and I/O errors on the standard
/// streams.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let options = resolve_options(&cli,)?;

    let inputs = if cli.text.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<String,>, _,>>()
            .map_err(|error| Error::invalid_argument(format!("failed to read stdin: {error}"),),)?
    } else {
        cli.text.clone()
    };

    let slugs = slugify_all(&inputs, &options,);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_slugs(&mut handle, &slugs, cli.json,)
}

/// Merges the inline options document with explicit flags.
fn resolve_options(cli: &Cli,) -> Result<SlugOptions, Error,>
{
    let mut options = match cli.options.as_deref() {
        Some(document,) => parse_options(document,)?,
        None => SlugOptions::default(),
    };

    if let Some(separator,) = cli.separator.as_ref() {
        options.separator = separator.clone();
    }
    if cli.keep_case {
        options.lowercase = false;
    }
    if cli.no_locale {
        options.locale = false;
    }
    if cli.strict {
        options.strict = true;
    }
    if let Some(limit,) = cli.max_length {
        options.max_length = Some(limit,);
    }
    if !cli.stop_words.is_empty() {
        options.remove_stop_words = StopWords::Custom(cli.stop_words.clone(),);
    } else if cli.remove_stop_words {
        options.remove_stop_words = StopWords::Enabled(true,);
    }
    for pair in &cli.replacements {
        let (pattern, replacement,) = pair.split_once('=',).ok_or_else(|| {
            Error::invalid_argument(format!("replacement '{pair}' must use FROM=TO form"),)
        },)?;
        options.custom_replacements.push(pattern, replacement,);
    }

    Ok(options,)
}

fn write_slugs<W: Write,>(writer: &mut W, slugs: &[String], json: bool,) -> Result<(), Error,>
{
    let io_error = |error: io::Error| Error::invalid_argument(format!("failed to write output: {error}"),);

    if json {
        let encoded = serde_json::to_string(slugs,)
            .map_err(|error| Error::invalid_argument(format!("failed to encode output: {error}"),),)?;
        writeln!(writer, "{encoded}").map_err(io_error,)?;
    } else {
        for slug in slugs {
            writeln!(writer, "{slug}").map_err(io_error,)?;
        }
    }

    Ok((),)
}
