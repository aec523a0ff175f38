/// The evaluator module reduces syntax trees to numbers.
///
/// The evaluator walks the AST, applies arithmetic, functions and constants,
/// and reads the caller-owned angle mode for trigonometric functions. It is
/// pure: neither the tree nor the context is modified.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Converts degree arguments exactly once, inside the trig functions.
/// - Reports division by zero, domain errors and factorial overflow, and
///   never returns NaN or an infinity.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a flat
/// sequence of tokens (numbers, operators, parentheses, function and constant
/// names), each with its source text and character position, terminated by an
/// end-of-input marker.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Matches identifiers greedily and rejects unknown ones.
/// - Reports lexical errors for characters outside the grammar.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level. It enforces the precedence table, associativity and parenthesis
/// scoping, and bounds its own recursion depth.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates grammar, reporting errors with position info.
/// - Rejects adversarially deep nesting.
pub mod parser;
