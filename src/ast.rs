use std::fmt;

/// A mathematical function callable as `name(argument)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// Sine (`sin`), angle-mode aware.
    Sin,
    /// Cosine (`cos`), angle-mode aware.
    Cos,
    /// Tangent (`tan`), angle-mode aware.
    Tan,
    /// Base-10 logarithm (`log`).
    Log,
    /// Natural logarithm (`ln`).
    Ln,
    /// Square root (`sqrt` or `√`).
    Sqrt,
}

impl Function {
    /// Looks up a function by the identifier the tokenizer produced.
    ///
    /// ## Example
    /// ```
    /// use sciexpr::ast::Function;
    ///
    /// assert_eq!(Function::from_name("log"), Some(Function::Log));
    /// assert_eq!(Function::from_name("√"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("exp"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "sqrt" | "√" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// The canonical name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Whether the argument is an angle and therefore depends on the angle
    /// mode.
    #[must_use]
    pub const fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// A named constant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Constant {
    /// π (`π` or `pi`).
    Pi,
    /// Euler's number (`e`).
    E,
}

impl Constant {
    /// Looks up a constant by the identifier the tokenizer produced.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "π" | "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// The numeric value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children; a tree produced by the parser corresponds to
/// exactly one reading of the source tokens. Nodes carry no source positions,
/// so two parses of the same token sequence compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3`, `2.5` or `.5`.
    Number {
        /// The literal value.
        value: f64,
    },
    /// A named constant such as `π`.
    Constant(Constant),
    /// A unary operation (negation or factorial).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, power, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// The function being called.
        function: Function,
        /// The single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Height of the tree; a leaf has depth 1.
    ///
    /// ## Example
    /// ```
    /// use sciexpr::{parse, tokenize};
    ///
    /// let expr = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap();
    /// assert_eq!(expr.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Constant(_) => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.depth(),
            Self::FunctionCall { argument, .. } => 1 + argument.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Constant(_) => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.node_count(),
            Self::FunctionCall { argument, .. } => 1 + argument.node_count(),
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Postfix factorial (e.g. `x!`).
    Factorial,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pi => write!(f, "π"),
            Self::E => write!(f, "e"),
        }
    }
}

/// Renders the tree fully parenthesized, so the grouping chosen by the parser
/// is visible: `2^3^2` displays as `(2 ^ (3 ^ 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Constant(c) => write!(f, "{c}"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => write!(f, "(-{expr})"),
            Self::UnaryOp { op: UnaryOperator::Factorial,
                            expr, } => write!(f, "({expr}!)"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { function, argument } => write!(f, "{function}({argument})"),
        }
    }
}
