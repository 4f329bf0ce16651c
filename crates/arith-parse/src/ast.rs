use std::fmt;

use arith_lexer::Decimal;

/// A parsed line. Rendering is the `Display` impl.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Assignment(Assignment),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BinaryOp { operator: char, left: Box<Expr>, right: Box<Expr> },
    Identifier { name: String },
    NumberLiteral { value: f64 },
}

impl Expr {
    pub(crate) fn binary(operator: char, left: Self, right: Self) -> Self {
        Self::BinaryOp { operator, left: Box::new(left), right: Box::new(right) }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment(assignment) => fmt::Display::fmt(assignment, f),
            Self::Expr(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.id, self.expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryOp { operator, left, right } => write!(f, "({left} {operator} {right})"),
            Self::Identifier { name } => f.write_str(name),
            Self::NumberLiteral { value } => fmt::Display::fmt(&Decimal(*value), f),
        }
    }
}
