//! Winnow-based parser for transaction lines.
//!
//! Grammar:
//! ```text
//! input       = (blank | comment | transaction)*
//! comment     = "//" REST_OF_LINE
//! transaction = "(" ID ") " RESULT " :=" EXPRESSION
//! ID          = LETTER
//! RESULT      = LETTER
//! EXPRESSION  = REST_OF_LINE     -- every letter is a read variable
//! ```
//!
//! The header occupies fixed offsets: the identifier is the second
//! character and the result the fifth.

use diekert_core::{Transaction, Transactions};
use winnow::prelude::*;
use winnow::token::{any, literal, rest};
use winnow::ModalResult;

use crate::lexer::variables;

/// `(a) x := ` is the shortest well-formed line.
const MIN_LINE_LENGTH: usize = 9;

// ---------------------------------------------------------------------------
// Public error types
// ---------------------------------------------------------------------------

/// Why a single line was rejected.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Fewer than nine characters.
    TooShort,
    /// The line does not start with `(?) ? :=`.
    MissingDelimiter,
    NonAlphabeticIdentifier(char),
    NonAlphabeticResult(char),
    /// The identifier was already used on an earlier line.
    DuplicateIdentifier(char),
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort => write!(f, "line shorter than {MIN_LINE_LENGTH} characters"),
            Self::MissingDelimiter => write!(f, "expected `(id) result :=`"),
            Self::NonAlphabeticIdentifier(c) => write!(f, "identifier '{c}' is not a letter"),
            Self::NonAlphabeticResult(c) => write!(f, "result '{c}' is not a letter"),
            Self::DuplicateIdentifier(c) => write!(f, "identifier '{c}' is defined twice"),
        }
    }
}

/// A parse error with human-readable location information.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based line number in the input.
    pub line: usize,
    /// 1-based character column where the line stopped matching.
    pub column: usize,
    /// The offending line.
    pub text: String,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {} in `{}`",
            self.line, self.column, self.kind, self.text
        )
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse one `(id) result := expression` line.
///
/// # Errors
///
/// Returns the [`ParseErrorKind`] describing the first violation.
pub fn parse_transaction(line: &str) -> Result<Transaction, ParseErrorKind> {
    parse_line(line).map_err(|(kind, _)| kind)
}

/// Parse a whole input, one transaction per line.
///
/// Blank lines and lines starting with `//` are skipped.
///
/// # Errors
///
/// Returns a [`ParseError`] for the first malformed line, or for the second
/// occurrence of an identifier.
pub fn parse_transactions(input: &str) -> Result<Transactions, ParseError> {
    let mut transactions = Transactions::new();

    for (index, text) in input.lines().enumerate() {
        let trimmed = text.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        let error = |kind, column| ParseError {
            kind,
            line: index + 1,
            column,
            text: text.to_string(),
        };

        let transaction = parse_line(text).map_err(|(kind, column)| error(kind, column))?;
        if transactions.contains_key(&transaction.id) {
            return Err(error(
                ParseErrorKind::DuplicateIdentifier(transaction.id),
                2,
            ));
        }
        transactions.insert(transaction.id, transaction);
    }

    Ok(transactions)
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

struct Header<'i> {
    id: char,
    result: char,
    expression: &'i str,
}

/// `"(" ID ") " RESULT " :=" REST`
fn header<'i>(input: &mut &'i str) -> ModalResult<Header<'i>> {
    literal("(").parse_next(input)?;
    let id = any.parse_next(input)?;
    literal(") ").parse_next(input)?;
    let result = any.parse_next(input)?;
    literal(" :=").parse_next(input)?;
    let expression = rest.parse_next(input)?;
    Ok(Header {
        id,
        result,
        expression,
    })
}

/// Parse a line, reporting failures together with a 1-based column.
fn parse_line(line: &str) -> Result<Transaction, (ParseErrorKind, usize)> {
    if line.chars().count() < MIN_LINE_LENGTH {
        return Err((ParseErrorKind::TooShort, 1));
    }

    let mut stream: &str = line;
    let parsed = match header.parse_next(&mut stream) {
        Ok(parsed) => parsed,
        Err(_) => {
            let consumed = line.len().saturating_sub(stream.len());
            let column = line[..consumed].chars().count() + 1;
            return Err((ParseErrorKind::MissingDelimiter, column));
        }
    };

    if !parsed.id.is_ascii_alphabetic() {
        return Err((ParseErrorKind::NonAlphabeticIdentifier(parsed.id), 2));
    }
    if !parsed.result.is_ascii_alphabetic() {
        return Err((ParseErrorKind::NonAlphabeticResult(parsed.result), 5));
    }

    Ok(Transaction::new(
        parsed.id,
        parsed.result,
        variables(parsed.expression),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: char, result: char, dependencies: &str) -> Transaction {
        Transaction::new(id, result, dependencies.chars())
    }

    // -----------------------------------------------------------------------
    // Happy-path tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_single_transaction() {
        let result = parse_transaction("(a) x := x + y").expect("should parse");
        assert_eq!(result, tx('a', 'x', "xy"));
    }

    #[test]
    fn test_coefficients_and_duplicates() {
        let result = parse_transaction("(b) y := 2y + y*z - 3").expect("should parse");
        assert_eq!(result, tx('b', 'y', "yz"));
    }

    #[test]
    fn test_constant_expression() {
        let result = parse_transaction("(c) z := 42").expect("should parse");
        assert!(result.dependencies.is_empty());
    }

    #[test]
    fn test_minimal_line() {
        let result = parse_transaction("(d) v := ").expect("should parse");
        assert_eq!(result, tx('d', 'v', ""));
    }

    #[test]
    fn test_display_parses_back() {
        let original = tx('a', 'x', "xyz");
        let line = original.to_string();
        assert_eq!(parse_transaction(&line), Ok(original));
    }

    #[test]
    fn test_full_input() {
        let input = "\
// lab example
(a) x := x + y
(b) y := y + 2z

(c) x := 3x + z
(d) z := y - z
";
        let result = parse_transactions(input).expect("should parse full input");
        assert_eq!(result.len(), 4);
        assert_eq!(result[&'a'], tx('a', 'x', "xy"));
        assert_eq!(result[&'b'], tx('b', 'y', "yz"));
        assert_eq!(result[&'c'], tx('c', 'x', "xz"));
        assert_eq!(result[&'d'], tx('d', 'z', "yz"));
    }

    #[test]
    fn test_empty_input() {
        let result = parse_transactions("// nothing\n\n").expect("should parse");
        assert!(result.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = parse_transactions("(a) x := y\r\n(b) y := x\r\n").expect("should parse");
        assert_eq!(result.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Error tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_too_short() {
        assert_eq!(parse_transaction("(a) x :="), Err(ParseErrorKind::TooShort));
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(
            parse_transaction("(a) x = x + y"),
            Err(ParseErrorKind::MissingDelimiter)
        );
        assert_eq!(
            parse_transaction("a) x := x + y"),
            Err(ParseErrorKind::MissingDelimiter)
        );
    }

    #[test]
    fn test_non_alphabetic_identifier() {
        assert_eq!(
            parse_transaction("(1) x := y"),
            Err(ParseErrorKind::NonAlphabeticIdentifier('1'))
        );
    }

    #[test]
    fn test_non_alphabetic_result() {
        assert_eq!(
            parse_transaction("(a) 7 := y"),
            Err(ParseErrorKind::NonAlphabeticResult('7'))
        );
    }

    #[test]
    fn test_duplicate_identifier() {
        let input = "(a) x := y\n(a) y := x\n";
        let err = parse_transactions(input).expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::DuplicateIdentifier('a'));
        assert_eq!(err.line, 2);
        assert_eq!(err.text, "(a) y := x");
    }

    #[test]
    fn test_parse_error_has_line_column() {
        let input = "(a) x := y\n\n(b) y = x + 1\n";
        let err = parse_transactions(input).expect_err("should fail");
        assert_eq!(err.line, 3, "expected error on line 3, got: {err}");
        assert_eq!(err.kind, ParseErrorKind::MissingDelimiter);
        assert_eq!(err.column, 6);
    }

    #[test]
    fn test_parse_error_display() {
        let err = parse_transactions("(a) x\n").expect_err("should fail");
        let msg = err.to_string();
        assert!(
            msg.contains("parse error"),
            "display should contain 'parse error': {msg}"
        );
        assert!(msg.contains("line 1"), "display should contain 'line 1': {msg}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serializes() {
        let err = parse_transactions("(a) 7 := y\n").expect_err("should fail");
        let json = serde_json::to_value(&err).expect("serializable");
        assert_eq!(json["line"], 1);
        assert_eq!(json["kind"]["NonAlphabeticResult"], "7");
    }
}
