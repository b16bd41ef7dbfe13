/// Parsing errors.
///
/// Defines all error types that can occur while declaring names or parsing
/// the token sequence: duplicate declarations, undeclared identifiers,
/// unmatched parentheses, and tokens the grammar cannot accept.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a syntax
/// tree: malformed number literals, division by zero, unknown operator
/// symbols, and identifier evaluation (which this system does not support).
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
