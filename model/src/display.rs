// Tagged-tuple rendering of the AST, e.g.
// ("Function", "main", ("Block", [("Return", ("Num", "0"))]))

use std::fmt;

use crate::{Block, Expr, Function, Stmt};

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"Function\", {:?}, {})", self.name, self.body)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(\"Block\", ")?;
        write_list(f, &self.statements)?;
        f.write_str(")")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Declaration(names) => {
                let quoted: Vec<Quoted<'_>> = names.iter().map(|n| Quoted(n.as_str())).collect();
                f.write_str("(\"Declaration\", ")?;
                write_list(f, &quoted)?;
                f.write_str(")")
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => write!(f, "(\"If\", {cond}, {then_block}, {else_block})"),
            Stmt::Return(value) => write!(f, "(\"Return\", {value})"),
            Stmt::Assign { name, value } => write!(f, "(\"Assign\", {name:?}, {value})"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "(\"Var\", {name:?})"),
            Expr::Num(literal) => write!(f, "(\"Num\", {literal:?})"),
            Expr::Binary { op, left, right } => {
                write!(f, "(\"BinOp\", {:?}, {left}, {right})", op.symbol())
            }
        }
    }
}
