use model::{Token, TokenKind};

use crate::error::ParseError;

/// Read position over a borrowed token sequence.
///
/// Exhaustion is reported as `None` rather than a sentinel token, so a real
/// token whose value happens to be `"EOF"` is never mistaken for the end.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Token at the current position, trivia included.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Moves forward by one. Past the end this is a no-op.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Next non-trivia token, without moving.
    pub fn lookahead(&self) -> Option<&'a Token> {
        self.tokens.get(self.lookahead_position())
    }

    /// Index of the token `lookahead` returns, or the slice length at the end.
    pub fn lookahead_position(&self) -> usize {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .position(|tok| !tok.is_trivia())
            .map_or(self.tokens.len(), |offset| self.pos + offset)
    }

    /// True when the next non-trivia token has this value, whatever its type.
    pub fn check_value(&self, value: &str) -> bool {
        self.lookahead().is_some_and(|tok| tok.value == value)
    }

    pub fn check(&self, kind: &TokenKind, value: &str) -> bool {
        self.lookahead()
            .is_some_and(|tok| tok.kind == *kind && tok.value == value)
    }

    /// Skip trivia, check the current token against the expectations and step
    /// past it. Type is checked before value. `Ok(None)` only comes back from
    /// an unconstrained consume at the end of input.
    pub fn consume(
        &mut self,
        expected_kind: Option<&TokenKind>,
        expected_value: Option<&str>,
    ) -> Result<Option<&'a Token>, ParseError> {
        self.pos = self.lookahead_position();
        let current = self.peek();

        if let Some(expected) = expected_kind {
            if current.map(|tok| &tok.kind) != Some(expected) {
                return Err(ParseError::UnexpectedType {
                    expected: expected.clone(),
                    found: current.map(|tok| tok.kind.clone()),
                    position: self.pos,
                });
            }
        }

        if let Some(expected) = expected_value {
            if current.map(|tok| tok.value.as_str()) != Some(expected) {
                return Err(ParseError::UnexpectedValue {
                    expected: expected.to_string(),
                    found: current.map(|tok| tok.value.clone()),
                    position: self.pos,
                });
            }
        }

        self.advance();
        Ok(current)
    }

    pub fn expect(&mut self, kind: TokenKind, value: &str) -> Result<&'a Token, ParseError> {
        self.consume_typed(kind, Some(value))
    }

    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.consume_typed(kind, None)
    }

    fn consume_typed(&mut self, kind: TokenKind, value: Option<&str>) -> Result<&'a Token, ParseError> {
        // A type check never passes at the end of input, so `None` cannot occur here
        self.consume(Some(&kind), value)?
            .ok_or_else(|| ParseError::UnexpectedType {
                expected: kind,
                found: None,
                position: self.pos,
            })
    }
}
