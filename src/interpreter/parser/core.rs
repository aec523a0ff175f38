use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexeme, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Tunables for the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth (parentheses, prefix minus chains and power
    /// chains all count). Exceeding it yields [`ParseError::TooComplex`].
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Cursor over a token slice.
///
/// The grammar rules live in `impl Parser` blocks spread over the sibling
/// modules, one per precedence family.
pub struct Parser<'a> {
    tokens:    &'a [Lexeme],
    cursor:    usize,
    depth:     usize,
    max_depth: usize,
}

/// Parses a token sequence with the default [`ParserConfig`].
///
/// # Errors
/// Returns a [`ParseError`] if the tokens do not form exactly one expression.
///
/// # Example
/// ```
/// use sciexpr::{parse, tokenize};
///
/// let expr = parse(&tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
/// ```
pub fn parse(tokens: &[Lexeme]) -> ParseResult<Expr> {
    parse_with(tokens, ParserConfig::default())
}

/// Parses a token sequence into a single expression tree.
///
/// The whole sequence must be consumed: anything left after a complete
/// expression (other than the end marker) is an unexpected token.
///
/// # Errors
/// Returns a [`ParseError`] describing the first grammar violation, or
/// [`ParseError::TooComplex`] when nesting exceeds `config.max_depth`.
pub fn parse_with(tokens: &[Lexeme], config: ParserConfig) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens, config);
    let expr = parser.parse_expression()?;

    match parser.peek() {
        None | Some(Lexeme { token: Token::EndOfInput,
                             .. }) => {},
        Some(lexeme) => {
            return Err(ParseError::UnexpectedToken { position: lexeme.position,
                                                     token:    lexeme.describe(), });
        },
    }

    debug!(nodes = expr.node_count(), depth = expr.depth(), "parsed expression");
    Ok(expr)
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Lexeme], config: ParserConfig) -> Self {
        Self { tokens,
               cursor: 0,
               depth: 0,
               max_depth: config.max_depth }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// Returns the current token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> Option<&'a Lexeme> {
        self.tokens.get(self.cursor)
    }

    /// Returns the current token kind, treating a missing end marker as
    /// [`Token::EndOfInput`].
    pub(in crate::interpreter::parser) fn peek_token(&self) -> &'a Token {
        self.peek().map_or(&Token::EndOfInput, |lexeme| &lexeme.token)
    }

    /// Consumes and returns the current token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<&'a Lexeme> {
        let lexeme = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(lexeme)
    }

    /// Position of the end of input, used when the token slice runs out.
    pub(in crate::interpreter::parser) fn end_position(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |last| last.position + last.text.chars().count())
    }

    /// Builds the error for a token that cannot start or continue an
    /// operand at the current position.
    pub(in crate::interpreter::parser) fn unexpected(&self) -> ParseError {
        match self.peek() {
            None => ParseError::UnexpectedEnd { position: self.end_position() },
            Some(Lexeme { token: Token::EndOfInput,
                          position,
                          .. }) => ParseError::UnexpectedEnd { position: *position },
            Some(lexeme) => ParseError::UnexpectedToken { position: lexeme.position,
                                                          token:    lexeme.describe(), },
        }
    }

    /// Enters one level of nesting.
    pub(in crate::interpreter::parser) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooComplex { limit: self.max_depth });
        }
        Ok(())
    }

    /// Leaves one level of nesting.
    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.depth -= 1;
    }
}
