use model::{BinaryOp, Expr, TokenKind};

use crate::error::ParseError;
use crate::parser::Parser;

/// Expression parsing: one primary, optionally followed by a single `==` or
/// `-` and a second primary. Operators do not chain, so in `a - b - c` only
/// `a - b` is consumed.
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, ParseError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_primary()?;

        let op = match self.cursor.lookahead() {
            Some(tok) if tok.kind == TokenKind::Operator => BinaryOp::from_symbol(&tok.value),
            _ => None,
        };
        let Some(op) = op else {
            return Ok(left);
        };

        self.cursor.expect_kind(TokenKind::Operator)?;
        let right = self.parse_primary()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl<'a> Parser<'a> {
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.lookahead() {
            Some(tok) if tok.kind == TokenKind::Identifier => {
                let tok = self.cursor.expect_kind(TokenKind::Identifier)?;
                Ok(Expr::Var(tok.value.clone()))
            }
            Some(tok) if tok.kind == TokenKind::NumericConstant => {
                let tok = self.cursor.expect_kind(TokenKind::NumericConstant)?;
                Ok(Expr::Num(tok.value.clone()))
            }
            other => Err(ParseError::InvalidExpression {
                found: other.cloned(),
                position: self.cursor.lookahead_position(),
            }),
        }
    }
}
