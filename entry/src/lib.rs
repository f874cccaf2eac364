// Token entry: reads the `<TYPE, value>` line format produced by a user or a
// lexer dump and turns each line into a model::Token. No classification is
// checked here; tags are passed through as given.

mod pair;

use model::{Token, TokenKind};
use thiserror::Error;

/// The line that ends entry, matched case-insensitively.
pub const DONE: &str = "done";

/// Hint shown to the user and in malformed-line reports.
pub const FORMAT_HINT: &str = "<TYPE, value>";

#[derive(Debug, PartialEq, Eq)]
pub enum Entry {
    Token(Token),
    Done,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("missing ',' between type and value in {line:?}")]
    MissingComma { line: String },
    #[error("empty token type in {line:?}")]
    EmptyType { line: String },
}

/// Parse one line of token entry.
pub fn parse_entry(line: &str) -> Result<Entry, EntryError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case(DONE) {
        return Ok(Entry::Done);
    }

    let (kind, value) = pair::split_pair(line).ok_or_else(|| EntryError::MissingComma {
        line: line.to_string(),
    })?;
    if kind.is_empty() {
        return Err(EntryError::EmptyType {
            line: line.to_string(),
        });
    }

    let kind = TokenKind::from_tag(kind);
    if let TokenKind::Other(tag) = &kind {
        tracing::debug!(tag = %tag, "token type outside the grammar's vocabulary");
    }
    Ok(Entry::Token(Token::new(kind, value)))
}

/// A line that could not be turned into a token.
#[derive(Debug, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based line number within the input
    pub line_no: usize,
    pub error: EntryError,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Collected {
    pub tokens: Vec<Token>,
    pub rejected: Vec<Rejected>,
}

/// Collect tokens from a sequence of entry lines, stopping at `done`.
///
/// Malformed lines are recorded in `rejected` and skipped; they never end
/// collection early.
pub fn collect_entries<'a, I>(lines: I) -> Collected
where
    I: IntoIterator<Item = &'a str>,
{
    let mut collected = Collected::default();
    for (idx, line) in lines.into_iter().enumerate() {
        match parse_entry(line) {
            Ok(Entry::Token(tok)) => collected.tokens.push(tok),
            Ok(Entry::Done) => break,
            Err(error) => collected.rejected.push(Rejected {
                line_no: idx + 1,
                error,
            }),
        }
    }
    tracing::debug!(
        tokens = collected.tokens.len(),
        rejected = collected.rejected.len(),
        "collected token entries"
    );
    collected
}
