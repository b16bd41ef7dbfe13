use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a double-precision value.
///
/// The walk dispatches on the node variant with an exhaustive match:
/// - `Number` parses its stored literal text as `f64`.
/// - `Identifier` always fails; declared variables carry no runtime value.
/// - `BinaryOp` evaluates the left child, then the right child, then applies
///   the operator via [`apply_binary_op`].
/// - `Grouping` evaluates to its child's value unchanged.
///
/// # Errors
/// - [`RuntimeError::MalformedNumber`] for unparseable literal text (only
///   reachable from hand-constructed trees).
/// - [`RuntimeError::UnsupportedOperation`] for any identifier node.
/// - [`RuntimeError::DivisionByZero`] and [`RuntimeError::UnknownOperator`]
///   from operator application.
///
/// # Example
/// ```
/// use exprview::interpreter::{evaluator::eval, lexer::tokenize, parser::Parser};
///
/// let mut parser = Parser::new(tokenize("(2+3)*4"));
/// let ast = parser.parse_expression().unwrap();
///
/// assert_eq!(eval(&ast).unwrap(), 20.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { literal } => {
            literal.parse()
                   .map_err(|_| RuntimeError::MalformedNumber { literal: literal.clone() })
        },

        Expr::Identifier { name } => {
            Err(RuntimeError::UnsupportedOperation { name: name.clone() })
        },

        Expr::BinaryOp { op, left, right } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            apply_binary_op(*op, lhs, rhs)
        },

        Expr::Grouping { expr } => eval(expr),
    }
}

/// Applies a binary operator symbol to two evaluated operands.
///
/// The operator field of a binary node is an open `char`, not a closed
/// enumeration, so symbols outside `+ - * /` must be rejected here even
/// though the grammar never produces them.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when dividing by exactly zero.
/// - [`RuntimeError::UnknownOperator`] for a symbol outside `+ - * /`.
pub fn apply_binary_op(op: char, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        '+' => Ok(lhs + rhs),
        '-' => Ok(lhs - rhs),
        '*' => Ok(lhs * rhs),
        '/' => {
            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(lhs / rhs)
        },
        op => Err(RuntimeError::UnknownOperator { op }),
    }
}
