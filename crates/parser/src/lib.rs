//! Text format for transaction sets.
//!
//! One transaction per line, `(id) result := expression`:
//!
//! ```text
//! // comments and blank lines are skipped
//! (a) x := x + y
//! (b) y := y + 2z
//! ```
//!
//! Every letter of the expression is a variable the transaction reads.

pub mod lexer;
pub mod parser;

pub use lexer::{tokenize, tokenize_with_text, variables, Token, TokenKind};
pub use parser::{parse_transaction, parse_transactions, ParseError, ParseErrorKind};
