use std::io::{BufRead, Write};

use anyhow::Context as _;
use arith_lexer::Lexer;
use arith_parse::ParseOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Parse,
    Tokens,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Session {
    pub(crate) mode: Mode,
    pub(crate) lenient: bool,
}

impl Session {
    /// Writes one line of output per line of `input`. A line that fails to
    /// parse is reported in the output and never stops the run.
    pub(crate) fn run(self, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
        let options = ParseOptions { allow_trailing_input: self.lenient };

        for line in input.lines() {
            let line = line.context("failed to read input")?;

            let written = match self.mode {
                Mode::Parse => match arith_parse::parse_with(&line, options) {
                    Ok(ast) => writeln!(output, "{ast}"),
                    Err(err) => writeln!(output, "{err}"),
                },
                Mode::Tokens => {
                    let tokens: Vec<_> =
                        Lexer::new(&line).into_iter().map(|token| token.to_string()).collect();
                    writeln!(output, "{}", tokens.join(" "))
                }
            };
            written.context("failed to write output")?;
        }

        output.flush().context("failed to flush output")
    }
}
