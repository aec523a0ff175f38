use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{ast::{Constant, Function}, error::LexError};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `42`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Function and constant names such as `sin`, `pi`, `π` or `√`.
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_owned())]
    #[token("π", |_| "π".to_owned())]
    #[token("√", |_| "√".to_owned())]
    Ident(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `/` or `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Terminal marker appended by [`tokenize`]; never produced by the lexer
    /// itself.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Ident(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token together with the text it was read from and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token kind and payload.
    pub token:    Token,
    /// The exact source text of the token (empty for `EndOfInput`).
    pub text:     String,
    /// The 0-based character offset of the token in the source.
    pub position: usize,
}

impl Lexeme {
    /// Text used when this lexeme is reported in an error.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.text.is_empty() {
            self.token.to_string()
        } else {
            self.text.clone()
        }
    }
}

/// Converts source text into a token sequence terminated by
/// [`Token::EndOfInput`].
///
/// Identifiers are runs of letters, matched greedily, and must name a known
/// function or constant; `esin` is one unknown identifier, not `e` followed by
/// `sin`. Digits end an identifier, so `e2` is `e` followed by `2`.
///
/// # Errors
/// Returns [`LexError::UnknownToken`] for any character or identifier that is
/// not part of the grammar.
///
/// # Example
/// ```
/// use sciexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2×π").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|l| l.token.clone()).collect();
/// assert_eq!(kinds,
///            vec![Token::Number(2.0),
///                 Token::Star,
///                 Token::Ident("π".to_string()),
///                 Token::EndOfInput]);
/// assert_eq!(tokens[2].position, 2);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Lexeme>> {
    let mut lexer = Token::lexer(source);
    let mut offsets = CharOffsets::new(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let position = offsets.at(lexer.span().start);

        let token = match result {
            Ok(Token::Ident(name)) if !is_known_identifier(&name) => {
                return Err(LexError::UnknownToken { position,
                                                    text: name });
            },
            Ok(token) => token,
            Err(()) => {
                return Err(LexError::UnknownToken { position,
                                                    text: text.to_owned() });
            },
        };

        trace!(?token, position, "token");
        lexemes.push(Lexeme { token,
                              text: text.to_owned(),
                              position });
    }

    lexemes.push(Lexeme { token:    Token::EndOfInput,
                          text:     String::new(),
                          position: offsets.at(source.len()), });
    Ok(lexemes)
}

/// Whether an identifier names a supported function or constant.
fn is_known_identifier(name: &str) -> bool {
    Function::from_name(name).is_some() || Constant::from_name(name).is_some()
}

/// Parses a numeric literal from the current token slice.
///
/// A leading dot (`.5`) and a trailing dot (`5.`) are both accepted by Rust's
/// float parser.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Maps byte offsets to character offsets, scanning the source only once as
/// long as lookups are monotonic.
struct CharOffsets<'a> {
    source: &'a str,
    byte:   usize,
    chars:  usize,
}

impl<'a> CharOffsets<'a> {
    const fn new(source: &'a str) -> Self {
        Self { source,
               byte: 0,
               chars: 0 }
    }

    fn at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.source[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|l| l.token)
                        .collect()
    }

    #[test]
    fn numbers_accept_leading_and_trailing_dot() {
        assert_eq!(kinds(".5"), vec![Token::Number(0.5), Token::EndOfInput]);
        assert_eq!(kinds("5."), vec![Token::Number(5.0), Token::EndOfInput]);
        assert_eq!(kinds("12.25"), vec![Token::Number(12.25), Token::EndOfInput]);
    }

    #[test]
    fn second_dot_starts_a_new_number() {
        assert_eq!(kinds("1.2.3"),
                   vec![Token::Number(1.2), Token::Number(0.3), Token::EndOfInput]);
    }

    #[test]
    fn lone_dot_is_unknown() {
        let err = tokenize("1+.").unwrap_err();
        assert_eq!(err,
                   LexError::UnknownToken { position: 2,
                                            text:     ".".to_string(), });
    }

    #[test]
    fn identifiers_are_matched_greedily() {
        assert_eq!(kinds("log(e)"),
                   vec![Token::Ident("log".to_string()),
                        Token::LParen,
                        Token::Ident("e".to_string()),
                        Token::RParen,
                        Token::EndOfInput]);
        let err = tokenize("exp(1)").unwrap_err();
        assert_eq!(err,
                   LexError::UnknownToken { position: 0,
                                            text:     "exp".to_string(), });
    }

    #[test]
    fn digits_end_an_identifier() {
        assert_eq!(kinds("e2"),
                   vec![Token::Ident("e".to_string()), Token::Number(2.0), Token::EndOfInput]);
        assert_eq!(kinds("pi2"),
                   vec![Token::Ident("pi".to_string()), Token::Number(2.0), Token::EndOfInput]);
    }

    #[test]
    fn keypad_symbols_are_aliases() {
        assert_eq!(kinds("6×2÷3"),
                   vec![Token::Number(6.0),
                        Token::Star,
                        Token::Number(2.0),
                        Token::Slash,
                        Token::Number(3.0),
                        Token::EndOfInput]);
        assert_eq!(kinds("√(4)")[0], Token::Ident("√".to_string()));
    }

    #[test]
    fn whitespace_is_skipped_and_positions_are_characters() {
        let tokens = tokenize(" π + 1").unwrap();
        let positions: Vec<_> = tokens.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 3, 5, 6]);
    }

    #[test]
    fn unknown_character_reports_position() {
        let err = tokenize("2@3").unwrap_err();
        assert_eq!(err,
                   LexError::UnknownToken { position: 1,
                                            text:     "@".to_string(), });
    }

    #[test]
    fn empty_input_is_only_end_marker() {
        assert_eq!(kinds(""), vec![Token::EndOfInput]);
    }
}
