// JLISP Library
// Value core, reader, evaluator and builtins for a small S-/Q-expression Lisp
pub mod config;
pub mod input_handling;
pub mod parser;
pub mod runtime;

// Re-export the parsing function and the syntax tree.
pub use parser::{parse, NodeTag, ParseError, SyntaxNode};
pub use runtime::{evaluate_line, render, Evaluator, Runtime, RuntimeError, Value};
