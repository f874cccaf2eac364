mod display;

use std::fmt;
use std::str::FromStr;

/// Classification tag a token producer attaches to each token.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    SpecialCharacter,
    NumericConstant,
    Comment,
    Newline,
    // Any tag the producer hands over that the grammar never asks for
    Other(String),
}

impl TokenKind {
    /// Classify a tag exactly as written; unrecognised tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "KEYWORD" => TokenKind::Keyword,
            "IDENTIFIER" => TokenKind::Identifier,
            "OPERATOR" => TokenKind::Operator,
            "SPECIAL CHARACTER" => TokenKind::SpecialCharacter,
            "NUMERIC CONSTANT" => TokenKind::NumericConstant,
            "COMMENT" => TokenKind::Comment,
            "NEWLINE" => TokenKind::Newline,
            other => TokenKind::Other(other.to_string()),
        }
    }

    /// Tag text as it appears in the entry format.
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::SpecialCharacter => "SPECIAL CHARACTER",
            TokenKind::NumericConstant => "NUMERIC CONSTANT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Other(tag) => tag,
        }
    }

    /// Comments and newlines carry no grammatical meaning.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Newline)
    }
}

impl FromStr for TokenKind {
    type Err = std::convert::Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(TokenKind::from_tag(tag))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Function {
    pub name: String,
    pub body: Block,
}

impl Function {
    /// Identifiers, numerals and operators of the tree in source order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str()];
        self.body.collect_leaves(&mut out);
        out
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        for stmt in &self.statements {
            match stmt {
                Stmt::Declaration(names) => out.extend(names.iter().map(String::as_str)),
                Stmt::If {
                    cond,
                    then_block,
                    else_block,
                } => {
                    cond.collect_leaves(out);
                    then_block.collect_leaves(out);
                    else_block.collect_leaves(out);
                }
                Stmt::Return(value) => value.collect_leaves(out),
                Stmt::Assign { name, value } => {
                    out.push(name);
                    value.collect_leaves(out);
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Stmt {
    /// `int a, b, c;` -- never empty
    Declaration(Vec<String>),
    If {
        cond: Expr,
        then_block: Block,
        else_block: Block,
    },
    Return(Expr),
    Assign {
        name: String,
        value: Expr,
    },
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expr {
    Var(String),
    /// Numeral kept as its source text.
    Num(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Var(name) => out.push(name),
            Expr::Num(literal) => out.push(literal),
            Expr::Binary { op, left, right } => {
                left.collect_leaves(out);
                out.push(op.symbol());
                right.collect_leaves(out);
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Equal,
    Subtract,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(BinaryOp::Equal),
            "-" => Some(BinaryOp::Subtract),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Equal => "==",
            BinaryOp::Subtract => "-",
        }
    }
}
