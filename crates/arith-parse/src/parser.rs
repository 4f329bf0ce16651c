use arith_lexer::{Lexer, Token};

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { lexer: Lexer::new(text) }
    }

    pub(crate) fn next_token(&mut self) -> Token<'a> {
        self.lexer.next_token()
    }

    #[cfg(test)]
    pub(crate) fn checkpoint(&self) -> arith_lexer::Checkpoint {
        self.lexer.checkpoint()
    }

    /// Runs `rule`, rewinding the lexer to where it started if the rule fails.
    pub(crate) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.lexer.checkpoint();
        let result = rule(self);
        if result.is_none() {
            self.lexer.restore(checkpoint);
        }
        result
    }

    pub(crate) fn eat_end(&mut self) -> bool {
        self.attempt(|p| matches!(p.next_token(), Token::End).then_some(())).is_some()
    }
}
