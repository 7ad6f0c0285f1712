// JLISP Evaluator
// Reduces a value tree; S-expressions dispatch to the builtin named by their head symbol.

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::stdlib::{BuiltinKind, BuiltinTable, StandardLibrary};
use crate::runtime::values::Value;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Evaluator {
    builtins: &'static BuiltinTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            builtins: StandardLibrary::builtins(),
        }
    }

    /// Reduce a value. Only S-expressions do any work; every other value,
    /// Q-expressions included, evaluates to itself.
    pub fn evaluate(&self, value: Value) -> Value {
        match value {
            Value::SExpr(cells) => self
                .eval_sexpr(cells)
                .unwrap_or_else(|err| err.to_value()),
            other => other,
        }
    }

    fn eval_sexpr(&self, cells: Vec<Value>) -> RuntimeResult<Value> {
        // All children are reduced, left to right, before any error is looked at
        let evaluated = cells.into_iter().map(|cell| self.evaluate(cell)).collect();
        let mut expr = Value::SExpr(evaluated);

        let first_error = expr
            .cells()
            .and_then(|cells| cells.iter().position(Value::is_error));
        if let Some(index) = first_error {
            trace!(index, "s-expression short-circuits on error");
            return expr.take_at(index);
        }

        match expr.len() {
            0 => return Ok(expr),
            1 => return expr.take_at(0),
            _ => {}
        }

        match expr.pop_at(0)? {
            Value::Symbol(name) => self.call_builtin(&name, expr),
            other => {
                debug!(head = other.type_name(), "s-expression head is not a symbol");
                Err(RuntimeError::BadExpressionHead)
            }
        }
    }

    fn call_builtin(&self, name: &str, args: Value) -> RuntimeResult<Value> {
        let builtin = self.builtins.get(name).ok_or_else(|| {
            debug!(function = name, "unknown builtin");
            RuntimeError::UnknownFunction
        })?;

        if !builtin.arity.accepts(args.len()) {
            return Err(RuntimeError::ArityMismatch {
                function: builtin.name.to_string(),
                expected: builtin.arity.to_string(),
                actual: args.len(),
            });
        }

        debug!(function = builtin.name, args = args.len(), "calling builtin");
        match builtin.func {
            BuiltinKind::Pure(func) => func(args),
            BuiltinKind::WithEvaluator(func) => func(self, args),
        }
    }
}
