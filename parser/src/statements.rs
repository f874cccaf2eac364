use model::{Block, Stmt, TokenKind};

use crate::error::ParseError;
use crate::expressions::ExpressionParser;
use crate::parser::Parser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_block(&mut self) -> Result<Block, ParseError>;
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.cursor.expect(TokenKind::SpecialCharacter, "{")?;
        let mut statements = Vec::new();
        // Only the value is compared here; the closing consume checks the type
        while !self.cursor.check_value("}") {
            statements.push(self.parse_stmt()?);
        }
        self.cursor.expect(TokenKind::SpecialCharacter, "}")?;
        Ok(Block { statements })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.at_keyword("int") {
            return self.parse_declaration();
        }
        if self.at_keyword("if") {
            return self.parse_if_stmt();
        }
        if self.at_keyword("return") {
            return self.parse_return_stmt();
        }
        // Anything else must be an assignment; a bad leading token fails there
        self.parse_assignment()
    }
}

impl<'a> Parser<'a> {
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::Keyword, "int")?;
        let mut names = vec![self.cursor.expect_kind(TokenKind::Identifier)?.value.clone()];
        while self.cursor.check_value(",") {
            self.cursor.expect(TokenKind::SpecialCharacter, ",")?;
            names.push(self.cursor.expect_kind(TokenKind::Identifier)?.value.clone());
        }
        self.cursor.expect(TokenKind::SpecialCharacter, ";")?;
        tracing::trace!(count = names.len(), "parsed declaration");
        Ok(Stmt::Declaration(names))
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::Keyword, "if")?;
        self.cursor.expect(TokenKind::SpecialCharacter, "(")?;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::SpecialCharacter, ")")?;
        let then_block = self.parse_block()?;
        // `else` is mandatory in this grammar
        self.cursor.expect(TokenKind::Keyword, "else")?;
        let else_block = self.parse_block()?;
        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
        })
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::Keyword, "return")?;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::SpecialCharacter, ";")?;
        Ok(Stmt::Return(value))
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.cursor.expect_kind(TokenKind::Identifier)?.value.clone();
        self.cursor.expect(TokenKind::Operator, "=")?;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::SpecialCharacter, ";")?;
        tracing::trace!(name = %name, "parsed assignment");
        Ok(Stmt::Assign { name, value })
    }
}
