use clap::{Parser, ValueEnum}; // clap crate for CLI argument parsing
use entry::{Entry, FORMAT_HINT};
use model::Token;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

/*
Without INPUT_PATH the tokens are typed in one per line and a malformed
line just re-prompts. With a path, the same `<TYPE, value>` lines are read
from the file and malformed lines are reported with their line number.
*/

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File of `<TYPE, value>` token lines; prompts on stdin when omitted
    input_path: Option<PathBuf>,

    /// Print the received tokens and stop
    #[arg(short, long)]
    tokens: bool,

    /// How to print the tree
    #[arg(short, long, value_enum, default_value_t = Format::Tuple)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// ("Function", "main", ("Block", [...]))
    Tuple,
    /// Rust pretty debug output
    Debug,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

const SYNTAX_ERROR: u8 = 1;
const IO_ERROR: u8 = 2;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(IO_ERROR)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, DriverError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let tokens = match &args.input_path {
        Some(path) => read_token_file(path)?,
        None => {
            writeln!(out, "=== Simple C Parser ===")?;
            let stdin = io::stdin();
            prompt_tokens(stdin.lock(), &mut out)?
        }
    };

    writeln!(out, "\n Received Tokens:")?;
    for tok in &tokens {
        writeln!(out, "{tok}")?;
    }

    // --tokens: stop before parsing
    if args.tokens {
        return Ok(ExitCode::SUCCESS);
    }

    match parser::parse_tokens(&tokens) {
        Ok(function) => {
            writeln!(out, "\n AST Output:")?;
            match args.format {
                Format::Tuple => writeln!(out, "{function}")?,
                Format::Debug => writeln!(out, "{function:#?}")?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            out.flush()?;
            eprintln!("\n Syntax Error:");
            eprintln!("{err}");
            Ok(ExitCode::from(SYNTAX_ERROR))
        }
    }
}

fn read_token_file(path: &Path) -> Result<Vec<Token>, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let collected = entry::collect_entries(text.lines());
    for rejected in &collected.rejected {
        tracing::warn!(line = rejected.line_no, error = %rejected.error, "skipping malformed token line");
        eprintln!(
            "{}:{}: {} (expected {FORMAT_HINT})",
            path.display(),
            rejected.line_no,
            rejected.error
        );
    }
    Ok(collected.tokens)
}

/// Read tokens one line at a time until `done` or end of input, re-prompting
/// after each malformed line.
fn prompt_tokens<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<Vec<Token>> {
    writeln!(out, "\n Enter Tokens 1 By 1 : ")?;
    writeln!(out, "{FORMAT_HINT}")?;
    writeln!(out, "If You Finished Write : {}\n", entry::DONE)?;

    let mut tokens = Vec::new();
    let mut line = String::new();
    loop {
        write!(out, "Token: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match entry::parse_entry(&line) {
            Ok(Entry::Token(tok)) => tokens.push(tok),
            Ok(Entry::Done) => break,
            Err(err) => {
                tracing::debug!(error = %err, "rejected token line");
                writeln!(out, "Syntax Error Must Be : {FORMAT_HINT}")?;
            }
        }
    }
    Ok(tokens)
}
