#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A number node carried text that is not a valid numeral.
    ///
    /// Not reachable through the normal pipeline: the scanner only produces
    /// parseable numeric lexemes. Hand-constructed trees can still hit it.
    MalformedNumber {
        /// The literal text that failed to parse.
        literal: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The operator symbol of a binary node is not one of `+ - * /`.
    UnknownOperator {
        /// The operator symbol.
        op: char,
    },
    /// Tried to evaluate an identifier. Declared variables may be referenced
    /// syntactically but carry no runtime value in this system.
    UnsupportedOperation {
        /// The name of the identifier.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { literal } => {
                write!(f, "Malformed number literal '{literal}'.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::UnknownOperator { op } => write!(f, "Unknown operator: {op}."),

            Self::UnsupportedOperation { name } => write!(f,
                                                          "Identifier evaluation is not implemented: '{name}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
