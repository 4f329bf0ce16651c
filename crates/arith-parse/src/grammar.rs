//! Top        := Assignment | Expr
//! Assignment := <id> '=' Expr
//! Expr       := AddExpr
//! AddExpr    := MulExpr (('+' | '-') MulExpr)*
//! MulExpr    := PowExpr (('*' | '/') PowExpr)*
//! PowExpr    := Raw ('^' Raw)*
//! Raw        := <id> | <number> | '(' Expr ')'
//!
//! Every level folds to the left, `^` included.

use arith_lexer::Token;

use crate::ast::{Assignment, Ast, Expr};
use crate::parser::Parser;

/// Binary operators, tightest first.
const LEVELS: [&str; 3] = ["^", "*/", "+-"];

pub(crate) fn top(p: &mut Parser<'_>) -> Option<Ast> {
    assignment(p).map(Ast::Assignment).or_else(|| expr(p).map(Ast::Expr))
}

pub(crate) fn assignment(p: &mut Parser<'_>) -> Option<Assignment> {
    p.attempt(|p| {
        let Token::Identifier(id) = p.next_token() else { return None };
        if !p.next_token().is_operator_in("=") {
            return None;
        }
        let expr = expr(p)?;
        Some(Assignment { id: id.to_owned(), expr })
    })
}

pub(crate) fn expr(p: &mut Parser<'_>) -> Option<Expr> {
    binary(p, LEVELS.len())
}

fn binary(p: &mut Parser<'_>, level: usize) -> Option<Expr> {
    let Some(operators) = level.checked_sub(1).map(|index| LEVELS[index]) else {
        return raw(p);
    };

    let mut lhs = p.attempt(|p| binary(p, level - 1))?;

    while let Some((operator, rhs)) = p.attempt(|p| {
        let Token::Operator(operator) = p.next_token() else { return None };
        if !operators.contains(operator) {
            return None;
        }
        let rhs = binary(p, level - 1)?;
        Some((operator, rhs))
    }) {
        lhs = Expr::binary(operator, lhs, rhs);
    }

    Some(lhs)
}

fn raw(p: &mut Parser<'_>) -> Option<Expr> {
    ident(p).or_else(|| number(p)).or_else(|| paren_expr(p))
}

fn ident(p: &mut Parser<'_>) -> Option<Expr> {
    p.attempt(|p| {
        let Token::Identifier(name) = p.next_token() else { return None };
        Some(Expr::Identifier { name: name.to_owned() })
    })
}

fn number(p: &mut Parser<'_>) -> Option<Expr> {
    p.attempt(|p| {
        let Token::Number(value) = p.next_token() else { return None };
        Some(Expr::NumberLiteral { value })
    })
}

fn paren_expr(p: &mut Parser<'_>) -> Option<Expr> {
    p.attempt(|p| {
        if !p.next_token().is_operator_in("(") {
            return None;
        }
        let expr = expr(p)?;
        p.next_token().is_operator_in(")").then_some(expr)
    })
}
