use model::{Function, TokenKind};

use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::statements::StatementParser;

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) cursor: TokenCursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [model::Token]) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
        }
    }

    /// Parse exactly one function. Tokens after its closing brace are left
    /// unread.
    pub fn parse_program(&mut self) -> Result<Function, ParseError> {
        let function = self.parse_function()?;
        if let Some(extra) = self.cursor.lookahead() {
            tracing::debug!(
                position = self.cursor.position(),
                token = %extra,
                "ignoring input after function body"
            );
        }
        Ok(function)
    }

    fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.cursor.expect(TokenKind::Keyword, "int")?;
        let name = self.cursor.expect_kind(TokenKind::Identifier)?.value.clone();
        self.cursor.expect(TokenKind::SpecialCharacter, "(")?;
        self.cursor.expect(TokenKind::SpecialCharacter, ")")?;
        let body = self.parse_block()?;
        tracing::trace!(name = %name, statements = body.statements.len(), "parsed function");
        Ok(Function { name, body })
    }

    /// Next non-trivia token is a keyword with this spelling
    pub(crate) fn at_keyword(&self, word: &str) -> bool {
        self.cursor.check(&TokenKind::Keyword, word)
    }
}
