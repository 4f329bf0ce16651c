mod ast;
mod grammar;
mod parser;
#[cfg(test)]
mod tests;

pub use ast::{Assignment, Ast, Expr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept a line whose prefix parses, ignoring whatever follows it.
    pub allow_trailing_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Parse error")]
pub struct ParseError;

pub fn parse(line: &str) -> Result<Ast, ParseError> {
    parse_with(line, ParseOptions::default())
}

pub fn parse_with(line: &str, options: ParseOptions) -> Result<Ast, ParseError> {
    let mut parser = parser::Parser::new(line);
    let ast = grammar::top(&mut parser).ok_or(ParseError)?;

    if options.allow_trailing_input || parser.eat_end() { Ok(ast) } else { Err(ParseError) }
}
