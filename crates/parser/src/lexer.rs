//! Logos-based lexer for the right-hand side of a transaction.
//!
//! In `(a) x := 3x + y*2` the right-hand side is ` 3x + y*2`. Every letter
//! is a variable of its own, so `xy` reads two variables.

use std::ops::Range;

/// All token kinds produced by the expression lexer.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(::logos::Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single-letter variable.
    #[regex(r"[a-zA-Z]")]
    Variable,

    /// An integer or decimal literal.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// An arithmetic operator.
    #[regex(r"[-+*/%^]")]
    Operator,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Spaces or tabs.
    #[regex(r"[ \t]+")]
    Whitespace,
}

/// A single token with its kind and the byte-offset span in the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input` and return all valid tokens.
///
/// Characters the lexer does not recognise are skipped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token::new(kind, span)))
        .collect()
}

/// Tokenize `input` and return tokens paired with their source text slices.
#[must_use]
pub fn tokenize_with_text(input: &str) -> Vec<(Token, &str)> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| {
            result.ok().map(|kind| {
                let text = &input[span.clone()];
                (Token::new(kind, span), text)
            })
        })
        .collect()
}

/// The variables read by an expression, in order of appearance.
#[must_use]
pub fn variables(input: &str) -> Vec<char> {
    tokenize_with_text(input)
        .into_iter()
        .filter(|(token, _)| token.kind == TokenKind::Variable)
        .filter_map(|(_, text)| text.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{tokenize, tokenize_with_text, variables, Token, TokenKind};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_expression() {
        assert_eq!(
            kinds("3x + y"),
            vec![
                TokenKind::Number,
                TokenKind::Variable,
                TokenKind::Whitespace,
                TokenKind::Operator,
                TokenKind::Whitespace,
                TokenKind::Variable,
            ]
        );
    }

    #[test]
    fn test_adjacent_letters_are_separate_variables() {
        let texts: Vec<&str> = tokenize_with_text("xy").into_iter().map(|(_, s)| s).collect();
        assert_eq!(texts, vec!["x", "y"]);
    }

    #[test]
    fn test_parentheses_and_decimals() {
        assert_eq!(
            kinds("(z-1.5)"),
            vec![
                TokenKind::ParenOpen,
                TokenKind::Variable,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::ParenClose,
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        // the skipped `#` splits the surrounding spaces into two runs
        assert_eq!(
            kinds("x # y"),
            vec![
                TokenKind::Variable,
                TokenKind::Whitespace,
                TokenKind::Whitespace,
                TokenKind::Variable,
            ]
        );
        assert_eq!(kinds("x  y").len(), 3);
        assert_eq!(variables("x # y"), vec!['x', 'y']);

        let tokens = tokenize("x # y");
        assert_eq!(tokens[1].span, 1..2);
        assert_eq!(tokens[2].span, 3..4);
    }

    #[test]
    fn test_variables() {
        assert_eq!(variables(" x + 2*z - x"), vec!['x', 'z', 'x']);
        assert!(variables(" 42").is_empty());
    }

    #[test]
    fn test_span_correctness() {
        let input = "y*2";
        let tokens = tokenize(input);
        assert_eq!(tokens[0], Token::new(TokenKind::Variable, 0..1));
        assert_eq!(tokens[1], Token::new(TokenKind::Operator, 1..2));
        assert_eq!(tokens[2].text(input), "2");
    }
}
