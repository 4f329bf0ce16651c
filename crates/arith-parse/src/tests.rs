use std::fs;
use std::path::{Path, PathBuf};

use expect_test::{expect, expect_file};

use crate::{Ast, Expr, ParseError, ParseOptions, parse, parse_with};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    text: String,
}

impl TestCase {
    fn list(dir: &str) -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data").join(dir);

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "arith" {
                    let expected = path.with_extension("ast");
                    let text = fs::read_to_string(&path).ok()?;
                    Some(Self { input: path, expected, text })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }

    fn render(&self, options: ParseOptions) -> String {
        self.text
            .lines()
            .map(|line| match parse_with(line, options) {
                Ok(ast) => format!("{ast}\n"),
                Err(err) => format!("{err}\n"),
            })
            .collect()
    }
}

#[test]
fn parse_strict() {
    let cases = TestCase::list("strict");
    assert!(!cases.is_empty());

    for case in cases {
        expect_file![&case.expected].assert_eq(&case.render(ParseOptions::default()));
    }
}

#[test]
fn parse_lenient() {
    let cases = TestCase::list("lenient");
    assert!(!cases.is_empty());

    for case in cases {
        let options = ParseOptions { allow_trailing_input: true };
        expect_file![&case.expected].assert_eq(&case.render(options));
    }
}

#[test]
fn parse_is_deterministic() {
    let line = "y = (a + 2.5) * b ^ 2 - c / 4";
    let first = parse(line);
    let second = parse(line);
    assert_eq!(first, second);
    assert_eq!(
        first.map(|ast| ast.to_string()).as_deref(),
        Ok("y = (((a + 2.5) * (b ^ 2.0)) - (c / 4.0))")
    );
}

#[test]
fn malformed_lines_are_errors() {
    for line in ["1 +", "= 5", ")(", "1.2.3", "", "   ", "x =", "(1", "1)", "x y", "$"] {
        assert_eq!(parse(line), Err(ParseError), "Input: {line:?}");
    }
}

#[test]
fn lenient_mode_ignores_trailing_input() {
    let options = ParseOptions { allow_trailing_input: true };
    assert_eq!(parse_with("1 +", options).map(|ast| ast.to_string()), Ok("1.0".to_owned()));
    assert_eq!(parse_with("1.2.3", options).map(|ast| ast.to_string()), Ok("1.2".to_owned()));
    assert_eq!(parse_with(")(", options), Err(ParseError));
    assert_eq!(parse_with("= 5", options), Err(ParseError));
}

#[test]
fn assignment_structure() {
    let Ok(Ast::Assignment(assignment)) = parse("total = 7") else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.id, "total");
    assert_eq!(assignment.expr, Expr::NumberLiteral { value: 7.0 });
}

#[test]
fn error_display() {
    expect!["Parse error"].assert_eq(&ParseError.to_string());
}
