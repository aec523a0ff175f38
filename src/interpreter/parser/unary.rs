use crate::{
    ast::{BinaryOperator, Constant, Expr, Function, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix `-` is right-associative and binds looser than `^`, so `-2^2`
    /// is `-(2^2)`. Every call counts as one level of nesting; parenthesised
    /// groups, minus chains and power chains all pass through here.
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | power
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        self.enter()?;
        let expr = if matches!(self.peek_token(), Token::Minus) {
            self.advance();
            let operand = self.parse_unary()?;
            Expr::UnaryOp { op:   UnaryOperator::Negate,
                            expr: Box::new(operand), }
        } else {
            self.parse_power()?
        };
        self.leave();
        Ok(expr)
    }

    /// Parses exponentiation.
    ///
    /// The right operand is a full unary expression, which makes `^`
    /// right-associative (`2^3^2` is `2^(3^2)`) and allows a negative
    /// exponent (`2^-1`).
    ///
    /// Grammar: `power := postfix ("^" unary)?`
    fn parse_power(&mut self) -> ParseResult<Expr> {
        let base = self.parse_postfix()?;
        if matches!(self.peek_token(), Token::Caret) {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(Expr::BinaryOp { left:  Box::new(base),
                                       op:    BinaryOperator::Pow,
                                       right: Box::new(exponent), });
        }
        Ok(base)
    }

    /// Parses postfix factorials applied to a primary.
    ///
    /// Each `!` wraps the node built so far, so `3!!` is `(3!)!`.
    ///
    /// Grammar: `postfix := primary "!"*`
    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut node = self.parse_primary()?;
        while matches!(self.peek_token(), Token::Bang) {
            self.advance();
            node = Expr::UnaryOp { op:   UnaryOperator::Factorial,
                                   expr: Box::new(node), };
        }
        Ok(node)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | CONSTANT
    ///              | FUNCTION "(" expression ")"
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEnd` if the input ends where an operand is expected.
    /// - `UnexpectedToken` for an operator, `)` or unknown identifier in
    ///   operand position.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(lexeme) = self.peek() else {
            return Err(self.unexpected());
        };

        match &lexeme.token {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number { value: *value })
            },
            Token::Ident(name) => {
                if let Some(function) = Function::from_name(name) {
                    self.parse_function_call(function)
                } else if let Some(constant) = Constant::from_name(name) {
                    self.advance();
                    Ok(Expr::Constant(constant))
                } else {
                    Err(self.unexpected())
                }
            },
            Token::LParen => self.parse_grouping(),
            _ => Err(self.unexpected()),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Expected form `( expression )`. The group produces no node of its own;
    /// the inner expression is returned as-is.
    ///
    /// # Errors
    /// - `UnclosedParen` (at the `(`) if the input ends before the `)`.
    /// - `UnexpectedToken` for an empty group or a stray token before `)`.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let open = self.advance().map_or(0, |lexeme| lexeme.position);
        let expr = self.parse_expression()?;
        self.expect_closing(open)?;
        Ok(expr)
    }

    /// Parses a function call `name ( expression )`.
    ///
    /// Functions always take exactly one parenthesized argument; a bare
    /// function name is an error at the token that follows it.
    fn parse_function_call(&mut self, function: Function) -> ParseResult<Expr> {
        self.advance();

        let open = match self.peek() {
            Some(Lexeme { token: Token::LParen,
                          position,
                          .. }) => *position,
            _ => return Err(self.unexpected()),
        };
        self.advance();

        let argument = self.parse_expression()?;
        self.expect_closing(open)?;

        Ok(Expr::FunctionCall { function,
                                argument: Box::new(argument) })
    }

    /// Consumes the `)` matching the `(` at `open`.
    fn expect_closing(&mut self, open: usize) -> ParseResult<()> {
        match self.peek() {
            Some(Lexeme { token: Token::RParen,
                          .. }) => {
                self.advance();
                Ok(())
            },
            None
            | Some(Lexeme { token: Token::EndOfInput,
                            .. }) => Err(ParseError::UnclosedParen { position: open }),
            Some(lexeme) => Err(ParseError::UnexpectedToken { position: lexeme.position,
                                                              token:    lexeme.describe(), }),
        }
    }
}
