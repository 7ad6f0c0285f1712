//! JLISP Runtime System
//!
//! High-level entry points. Reading, reduction and the builtins live in the
//! submodules listed below.

pub mod error;
pub mod evaluator;
pub mod reader;
pub mod stdlib;
pub mod values;

pub use error::{RuntimeError, RuntimeResult};
pub use evaluator::Evaluator;
pub use reader::read;
pub use stdlib::StandardLibrary;
pub use values::Value;

use crate::parser::{self, ParseError, SyntaxNode};
use tracing::debug;

/// Reader and evaluator composed behind one handle
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    evaluator: Evaluator,
}

impl Runtime {
    /// Convert a parsed line into a value and reduce it
    pub fn evaluate_line(&self, tree: &SyntaxNode) -> Value {
        let value = read(tree);
        debug!(input = %value, "evaluating line");
        self.evaluator.evaluate(value)
    }

    /// Parse one line of source text and evaluate it.
    /// Only a failed parse is reported as `Err`; evaluation errors are values.
    pub fn evaluate_source(&self, source: &str) -> Result<Value, ParseError> {
        let tree = parser::parse(source)?;
        Ok(self.evaluate_line(&tree))
    }
}

/// Evaluate a parsed line with a default runtime
pub fn evaluate_line(tree: &SyntaxNode) -> Value {
    Runtime::default().evaluate_line(tree)
}

/// Text form of a value, as printed by the REPL
pub fn render(value: &Value) -> String {
    value.to_string()
}
