mod cursor;
mod number;

use std::fmt;
use std::iter::FusedIterator;

use cursor::Cursor;
pub use number::Decimal;
pub use text_size::TextSize;

/// Single-character operators, `=` included for assignments.
const OPERATORS: &str = "+-*/^()=";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Number(f64),
    Identifier(&'a str),
    Operator(char),
    End,
    /// An unrecognized character. The lexer does not move past it.
    Error,
}

impl Token<'_> {
    pub fn is_operator_in(&self, set: &str) -> bool {
        matches!(self, Self::Operator(op) if set.contains(*op))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => fmt::Display::fmt(&Decimal(*value), f),
            Self::Identifier(name) => f.write_str(name),
            Self::Operator(op) => write!(f, "{op}"),
            Self::End => f.write_str("<end>"),
            Self::Error => f.write_str("<error>"),
        }
    }
}

/// A saved scan position. Only meaningful for the lexer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(TextSize);

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { cursor: Cursor::new(text) }
    }

    pub fn offset(&self) -> TextSize {
        self.cursor.offset()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.cursor.offset())
    }

    /// Rewinds (or advances) to `checkpoint`. A checkpoint that is not a
    /// position in this lexer's input moves it to the end of input.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.reset(checkpoint.0);
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.advance_while(|c| matches!(c, ' ' | '\t' | '\n'));

        if self.cursor.is_eof() {
            return Token::End;
        }

        let start = self.cursor.offset();
        match self.cursor.peek() {
            '0'..='9' => self.number(start),
            c if c.is_alphabetic() => self.identifier(start),
            c if OPERATORS.contains(c) => {
                self.cursor.advance();
                Token::Operator(c)
            }
            _ => Token::Error,
        }
    }

    fn number(&mut self, start: TextSize) -> Token<'a> {
        self.cursor.advance();

        let mut saw_period = false;
        self.cursor.advance_while(|c| match c {
            '0'..='9' => true,
            '.' if !saw_period => {
                saw_period = true;
                true
            }
            _ => false,
        });

        if let Ok(value) = self.cursor.slice_from(start).parse() {
            Token::Number(value)
        } else {
            self.cursor.reset(start);
            Token::Error
        }
    }

    fn identifier(&mut self, start: TextSize) -> Token<'a> {
        self.cursor.advance();
        self.cursor.advance_while(|c| c.is_alphabetic() || c.is_numeric() || c == '_');
        Token::Identifier(self.cursor.slice_from(start))
    }
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Token<'a>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Tokens { lexer: self, finished: false }
    }
}

/// Every token of the input, terminated by the first `End` or `Error`.
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    finished: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.lexer.next_token();
        self.finished = matches!(token, Token::End | Token::Error);
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
