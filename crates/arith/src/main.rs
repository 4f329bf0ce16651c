mod driver;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context as _;
use camino::Utf8PathBuf;
use clap::Parser;
use driver::{Mode, Session};

/// Parses assignments and arithmetic expressions, one per line.
#[derive(Parser)]
#[command(version)]
struct Options {
    /// File to read lines from instead of stdin.
    path: Option<Utf8PathBuf>,

    /// Ignore anything left on a line after a successful parse.
    #[arg(long)]
    lenient: bool,

    /// Print each line's tokens instead of its syntax tree.
    #[arg(long)]
    tokens: bool,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let session = Session {
        mode: if options.tokens { Mode::Tokens } else { Mode::Parse },
        lenient: options.lenient,
    };
    let mut stdout = io::stdout().lock();

    match &options.path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open `{path}`"))?;
            session.run(BufReader::new(file), &mut stdout)
        }
        None => session.run(io::stdin().lock(), &mut stdout),
    }
}
