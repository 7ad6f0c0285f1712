// Error handling for the JLISP runtime

use crate::runtime::Value;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Failures raised inside the evaluator and builtins.
///
/// None of these escape evaluation: the dispatcher turns them into
/// `Value::Error` through [`RuntimeError::to_value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Integer literal out of range
    #[error("invalid number")]
    InvalidNumber,

    #[error("Function '{function}' passed incorrect number of arguments! Got {actual}, Expected {expected}.")]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    #[error("Function '{function}' passed incorrect type!")]
    TypeMismatch { function: String },

    #[error("Function '{function}' passed {{}}!")]
    EmptyList { function: String },

    #[error("Cannot operate on non-number")]
    NonNumber,

    #[error("Division by Zero")]
    DivisionByZero,

    #[error("Integer overflow")]
    IntegerOverflow,

    #[error("S-expression does not start with a symbol")]
    BadExpressionHead,

    #[error("Unknown Function")]
    UnknownFunction,

    /// A list operation was applied to a non-list value
    #[error("Expected a list, got {0}")]
    NotAList(&'static str),

    #[error("Index {index} out of bounds for list of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
}

impl RuntimeError {
    pub fn to_value(&self) -> Value {
        Value::Error(self.to_string())
    }
}

impl From<RuntimeError> for Value {
    fn from(err: RuntimeError) -> Self {
        err.to_value()
    }
}
