/// The evaluator module computes results directly from expression text.
///
/// The stack evaluator performs a single left-to-right scan over the
/// expression, resolving operator precedence with an operand stack, an
/// operator stack and a function-name stack. No intermediate representation
/// is built or retained.
///
/// # Responsibilities
/// - Evaluates an expression string to a 64-bit floating-point result.
/// - Owns the operator priority table shared with the AST builder.
/// - Reports structural errors such as unmatched parentheses or dangling
///   operators.
pub mod evaluator;
/// The functions module holds the named function table.
///
/// All recognized functions take a single scalar argument. Lookup is
/// case-insensitive, and both evaluation strategies apply functions through
/// this table so they cannot drift apart.
///
/// # Responsibilities
/// - Defines the table of recognized function names and implementations.
/// - Applies a named function to the value produced by its argument.
/// - Reports unknown function names.
pub mod functions;
/// The lexer module tokenizes expressions for the AST builder.
///
/// The lexer reads raw expression text and produces a stream of tokens:
/// numbers, identifiers, operators and parentheses. The stack evaluator does
/// not use it; its scan is fused into the evaluation loop.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric literals with optional fractional parts.
/// - Surfaces unrecognized characters as lexing errors.
pub mod lexer;
/// The parser module builds node trees from tokens.
///
/// The parser consumes the lexer's token stream with the same stacks and
/// the same priority table as the direct evaluator, but folds pending
/// operators into nodes instead of numbers. The resulting tree can be
/// evaluated repeatedly against different variable bindings.
///
/// # Responsibilities
/// - Converts a token stream into a [`crate::ast::Node`] tree.
/// - Distinguishes function names from variable references.
/// - Validates expression structure, rejecting malformed input.
pub mod parser;
