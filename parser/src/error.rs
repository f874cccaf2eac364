use model::{Token, TokenKind};
use thiserror::Error;

/// Syntax error raised at the first unmet expectation. `found: None` means the
/// token stream was exhausted.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Expected type {expected}, got {} at position {position}", kind_or_eof(.found))]
    UnexpectedType {
        expected: TokenKind,
        found: Option<TokenKind>,
        position: usize,
    },
    #[error("Expected value '{expected}', got '{}' at position {position}", value_or_eof(.found))]
    UnexpectedValue {
        expected: String,
        found: Option<String>,
        position: usize,
    },
    #[error("Invalid expression token: {} at position {position}", token_or_eof(.found))]
    InvalidExpression {
        found: Option<Token>,
        position: usize,
    },
}

impl ParseError {
    /// Index into the token slice where the failure was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedType { position, .. }
            | ParseError::UnexpectedValue { position, .. }
            | ParseError::InvalidExpression { position, .. } => *position,
        }
    }
}

const EOF: &str = "EOF";

fn kind_or_eof(found: &Option<TokenKind>) -> &str {
    found.as_ref().map_or(EOF, TokenKind::as_str)
}

fn value_or_eof(found: &Option<String>) -> &str {
    found.as_deref().unwrap_or(EOF)
}

fn token_or_eof(found: &Option<Token>) -> String {
    match found {
        Some(tok) => format!("{}, {}", tok.kind, tok.value),
        None => EOF.to_string(),
    }
}
