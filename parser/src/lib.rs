// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - cursor.rs: Token cursor (peek, advance, trivia-skipping consume)
// - parser.rs: Core Parser struct and top-level parsing (the function)
// - statements.rs: Block and statement parsing (declaration, if, return, assignment)
// - expressions.rs: Primary and single-operator expression parsing
// - error.rs: Syntax error kinds

mod cursor;
mod error;
mod expressions;
mod parser;
mod statements;

pub use cursor::TokenCursor;
pub use error::ParseError;

use model::{Function, Token};
use parser::Parser;

/// Parse a list of tokens into a Function AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the token producer, trivia included
///
/// # Returns
/// * `Ok(Function)` - The single `int name() { ... }` function
/// * `Err(ParseError)` - The first unmet expectation; nothing is recovered
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_tokens(tokens: &[Token]) -> Result<Function, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program().inspect_err(|err| {
        tracing::debug!(position = err.position(), error = %err, "parse failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{BinaryOp, Block, Expr, Stmt, TokenKind};

    // Whitespace-separated test source. `~` is a NEWLINE token and `/*..*/`
    // words are COMMENT tokens.
    fn toks(src: &str) -> Vec<Token> {
        src.split_whitespace()
            .map(|word| {
                let kind = match word {
                    "int" | "if" | "else" | "return" => TokenKind::Keyword,
                    "(" | ")" | "{" | "}" | "," | ";" => TokenKind::SpecialCharacter,
                    "=" | "==" | "-" | "+" => TokenKind::Operator,
                    "~" => TokenKind::Newline,
                    w if w.starts_with("/*") => TokenKind::Comment,
                    w if w.chars().all(|c| c.is_ascii_digit()) => TokenKind::NumericConstant,
                    _ => TokenKind::Identifier,
                };
                Token::new(kind, word)
            })
            .collect()
    }

    fn parse(src: &str) -> Result<Function, ParseError> {
        parse_tokens(&toks(src))
    }

    fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    fn num(literal: &str) -> Expr {
        Expr::Num(literal.to_string())
    }

    #[test]
    fn parse_declare_assign_return() {
        let func = parse("int main ( ) { int x ; x = 1 ; return x ; }").unwrap();
        assert_eq!(
            func,
            Function {
                name: "main".to_string(),
                body: Block {
                    statements: vec![
                        Stmt::Declaration(vec!["x".to_string()]),
                        Stmt::Assign {
                            name: "x".to_string(),
                            value: num("1"),
                        },
                        Stmt::Return(var("x")),
                    ],
                },
            }
        );
    }

    #[test]
    fn parse_if_else_with_comparison() {
        let func = parse("int f ( ) { if ( x == 1 ) { return 1 ; } else { return 0 ; } }").unwrap();
        assert_eq!(func.name, "f");
        assert_eq!(
            func.body.statements,
            vec![Stmt::If {
                cond: Expr::Binary {
                    op: BinaryOp::Equal,
                    left: Box::new(var("x")),
                    right: Box::new(num("1")),
                },
                then_block: Block {
                    statements: vec![Stmt::Return(num("1"))],
                },
                else_block: Block {
                    statements: vec![Stmt::Return(num("0"))],
                },
            }]
        );
    }

    #[test]
    fn if_without_else_expects_else() {
        let err = parse("int f ( ) { if ( x ) { return 1 ; } return 0 ; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedValue {
                expected: "else".to_string(),
                found: Some("return".to_string()),
                position: 14,
            }
        );
        assert!(err.to_string().contains("'else'"));
    }

    #[test]
    fn if_at_end_of_input_expects_else() {
        let err = parse("int f ( ) { if ( x ) { }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Keyword,
                found: None,
                ..
            }
        ));
    }

    #[test]
    fn stray_operator_is_invalid_expression() {
        let err = parse("int f ( ) { x = = 1 ; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidExpression {
                found: Some(Token::new(TokenKind::Operator, "=")),
                position: 7,
            }
        );
    }

    #[test]
    fn expression_missing_at_end_is_invalid_expression() {
        let err = parse("int f ( ) { return").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidExpression {
                found: None,
                position: 6,
            }
        );
        assert_eq!(err.to_string(), "Invalid expression token: EOF at position 6");
    }

    #[test]
    fn chained_subtraction_stops_after_one_operator() {
        // `a - b` is taken, the leftover `- c` breaks the `;` expectation
        let err = parse("int f ( ) { x = a - b - c ; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::SpecialCharacter,
                found: Some(TokenKind::Operator),
                position: 10,
            }
        );
    }

    #[test]
    fn unsupported_operator_is_not_binary() {
        let err = parse("int f ( ) { return a + b ; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::SpecialCharacter,
                found: Some(TokenKind::Operator),
                ..
            }
        ));
    }

    #[test]
    fn subtraction_of_two_primaries() {
        let func = parse("int f ( ) { return a - 2 ; }").unwrap();
        assert_eq!(
            func.body.statements,
            vec![Stmt::Return(Expr::Binary {
                op: BinaryOp::Subtract,
                left: Box::new(var("a")),
                right: Box::new(num("2")),
            })]
        );
    }

    #[test]
    fn declaration_lists_every_name() {
        let func = parse("int f ( ) { int a , b , c ; }").unwrap();
        assert_eq!(
            func.body.statements,
            vec![Stmt::Declaration(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ])]
        );
    }

    #[test]
    fn declaration_needs_a_name() {
        let err = parse("int f ( ) { int ; }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Identifier,
                found: Some(TokenKind::SpecialCharacter),
                position: 6,
            }
        );
    }

    #[test]
    fn declaration_trailing_comma_needs_a_name() {
        let err = parse("int f ( ) { int a , ; }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Identifier,
                ..
            }
        ));
    }

    #[test]
    fn empty_body() {
        let func = parse("int noop ( ) { }").unwrap();
        assert_eq!(func.name, "noop");
        assert!(func.body.statements.is_empty());
    }

    #[test]
    fn nested_if_blocks() {
        let func = parse(
            "int f ( ) { if ( a ) { if ( b == c ) { x = 1 ; } else { } } else { return 0 ; } }",
        )
        .unwrap();
        let Stmt::If { then_block, .. } = &func.body.statements[0] else {
            panic!("Expected If, got {:?}", func.body.statements[0]);
        };
        assert!(matches!(then_block.statements[0], Stmt::If { .. }));
    }

    #[test]
    fn comment_right_before_closing_brace() {
        let func = parse("int f ( ) { return 0 ; /*done*/ }").unwrap();
        assert_eq!(func.body.statements, vec![Stmt::Return(num("0"))]);

        let func = parse("int f ( ) { /*empty*/ ~ }").unwrap();
        assert!(func.body.statements.is_empty());
    }

    #[test]
    fn trivia_between_every_token_is_ignored() {
        let plain = "int main ( ) { int x , y ; x = 1 ; if ( x == y ) { return x - 1 ; } else { return 0 ; } }";
        let noisy = plain
            .split_whitespace()
            .map(|w| format!("/*c*/ ~ {w} ~"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(parse(&noisy).unwrap(), parse(plain).unwrap());
    }

    #[test]
    fn leaves_reproduce_source_literals() {
        let src = "int main ( ) { int x , y ; x = y - 3 ; if ( x == 0 ) { return y ; } else { return x ; } }";
        let func = parse(src).unwrap();
        assert_eq!(
            func.leaves(),
            vec!["main", "x", "y", "x", "y", "-", "3", "x", "==", "0", "y", "x"]
        );
    }

    #[test]
    fn unknown_statement_start_fails_in_assignment() {
        let err = parse("int f ( ) { else { } }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Identifier,
                found: Some(TokenKind::Keyword),
                position: 5,
            }
        );
    }

    #[test]
    fn unclosed_block_fails_at_end_of_input() {
        let err = parse("int f ( ) { x = 1 ;").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Identifier,
                found: None,
                position: 9,
            }
        );
    }

    #[test]
    fn closing_value_with_wrong_type_ends_block_then_fails() {
        let mut tokens = toks("int f ( ) {");
        tokens.push(Token::new(TokenKind::Identifier, "}"));
        let err = parse_tokens(&tokens).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::SpecialCharacter,
                found: Some(TokenKind::Identifier),
                position: 5,
            }
        );
    }

    #[test]
    fn function_must_start_with_int() {
        let err = parse("void f ( ) { }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Keyword,
                found: Some(TokenKind::Identifier),
                position: 0,
            }
        );

        let err = parse("return f ( ) { }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedValue { ref expected, .. } if expected == "int"));
    }

    #[test]
    fn function_takes_no_parameters() {
        let err = parse("int f ( int a ) { }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::SpecialCharacter,
                found: Some(TokenKind::Keyword),
                position: 3,
            }
        );
    }

    #[test]
    fn empty_input_fails() {
        let err = parse_tokens(&[]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedType {
                expected: TokenKind::Keyword,
                found: None,
                position: 0,
            }
        );
    }

    #[test]
    fn trailing_tokens_are_not_checked() {
        let func = parse("int f ( ) { } garbage = = ;").unwrap();
        assert_eq!(func.name, "f");
    }

    #[test]
    fn tokens_from_entry_lines() {
        let input = "\
<KEYWORD, int>
<IDENTIFIER, main>
<SPECIAL CHARACTER, (>
<SPECIAL CHARACTER, )>
<SPECIAL CHARACTER, {>
<COMMENT, // answer>
<KEYWORD, return>
<NUMERIC CONSTANT, 42>
<SPECIAL CHARACTER, ;>
<NEWLINE, \\n>
<SPECIAL CHARACTER, }>
done";
        let collected = entry::collect_entries(input.lines());
        assert!(collected.rejected.is_empty());
        let func = parse_tokens(&collected.tokens).unwrap();
        assert_eq!(func.body.statements, vec![Stmt::Return(num("42"))]);
    }
}
