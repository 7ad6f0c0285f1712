//! JLISP Standard Library
//!
//! The fixed set of builtins an S-expression can name in head position:
//! - List functions: `list`, `head`, `tail`, `join`, `eval`
//! - Arithmetic functions: `+`, `-`, `*`, `/`
//!
//! Every builtin receives its evaluated arguments as one owned S-expression
//! and consumes it, returning exactly one value.

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::evaluator::Evaluator;
use crate::runtime::values::Value;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic(usize), // Minimum number of arguments
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => count == *n,
            Arity::Variadic(min) => count >= *min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic(min) => write!(f, "at least {}", min),
        }
    }
}

pub type PureBuiltin = fn(Value) -> RuntimeResult<Value>;
pub type EvaluatorBuiltin = fn(&Evaluator, Value) -> RuntimeResult<Value>;

#[derive(Clone, Copy)]
pub enum BuiltinKind {
    Pure(PureBuiltin),
    /// Needs the evaluator to reduce its argument (`eval`)
    WithEvaluator(EvaluatorBuiltin),
}

#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: BuiltinKind,
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        // Compare builtin functions by name and arity, not by function pointer
        self.name == other.name && self.arity == other.arity
    }
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltinFunction> = StandardLibrary::table();
}

pub type BuiltinTable = HashMap<&'static str, BuiltinFunction>;

pub struct StandardLibrary;

impl StandardLibrary {
    /// The process-wide builtin table, built on first use
    pub fn builtins() -> &'static BuiltinTable {
        &BUILTINS
    }

    fn table() -> BuiltinTable {
        let mut table = HashMap::new();
        let mut define = |name: &'static str, arity: Arity, func: BuiltinKind| {
            table.insert(name, BuiltinFunction { name, arity, func });
        };

        // List functions
        define("list", Arity::Variadic(0), BuiltinKind::Pure(Self::list));
        define("head", Arity::Fixed(1), BuiltinKind::Pure(Self::head));
        define("tail", Arity::Fixed(1), BuiltinKind::Pure(Self::tail));
        define("join", Arity::Variadic(1), BuiltinKind::Pure(Self::join));
        define("eval", Arity::Fixed(1), BuiltinKind::WithEvaluator(Self::eval));

        // Arithmetic
        define("+", Arity::Variadic(1), BuiltinKind::Pure(Self::add));
        define("-", Arity::Variadic(1), BuiltinKind::Pure(Self::subtract));
        define("*", Arity::Variadic(1), BuiltinKind::Pure(Self::multiply));
        define("/", Arity::Variadic(1), BuiltinKind::Pure(Self::divide));

        table
    }

    // `(list a b c)` - the argument list itself, quoted
    fn list(args: Value) -> RuntimeResult<Value> {
        args.into_qexpr()
    }

    /// Take the only argument, which must be a non-empty Q-expression
    fn single_nonempty_qexpr(function: &str, args: Value) -> RuntimeResult<Value> {
        let arg = args.take_at(0)?;
        if !arg.is_qexpr() {
            return Err(RuntimeError::TypeMismatch {
                function: function.to_string(),
            });
        }
        if arg.is_empty() {
            return Err(RuntimeError::EmptyList {
                function: function.to_string(),
            });
        }
        Ok(arg)
    }

    // `(head {a b c})` -> `{a}`
    fn head(args: Value) -> RuntimeResult<Value> {
        let mut quoted = Self::single_nonempty_qexpr("head", args)?;
        while quoted.len() > 1 {
            quoted.pop_at(1)?;
        }
        Ok(quoted)
    }

    // `(tail {a b c})` -> `{b c}`
    fn tail(args: Value) -> RuntimeResult<Value> {
        let mut quoted = Self::single_nonempty_qexpr("tail", args)?;
        quoted.pop_at(0)?;
        Ok(quoted)
    }

    // `(join {a} {b c})` -> `{a b c}`
    fn join(mut args: Value) -> RuntimeResult<Value> {
        let all_quoted = args
            .cells()
            .map_or(true, |cells| cells.iter().all(Value::is_qexpr));
        if !all_quoted {
            return Err(RuntimeError::TypeMismatch {
                function: "join".to_string(),
            });
        }

        let mut accumulator = args.pop_at(0)?;
        while !args.is_empty() {
            accumulator = accumulator.join(args.pop_at(0)?)?;
        }
        Ok(accumulator)
    }

    // `(eval {+ 1 2})` -> `3`
    fn eval(evaluator: &Evaluator, args: Value) -> RuntimeResult<Value> {
        let arg = args.take_at(0)?;
        if !arg.is_qexpr() {
            return Err(RuntimeError::TypeMismatch {
                function: "eval".to_string(),
            });
        }
        Ok(evaluator.evaluate(arg.into_sexpr()?))
    }

    fn add(args: Value) -> RuntimeResult<Value> {
        Self::arithmetic(Operator::Add, args)
    }

    fn subtract(args: Value) -> RuntimeResult<Value> {
        Self::arithmetic(Operator::Subtract, args)
    }

    fn multiply(args: Value) -> RuntimeResult<Value> {
        Self::arithmetic(Operator::Multiply, args)
    }

    fn divide(args: Value) -> RuntimeResult<Value> {
        Self::arithmetic(Operator::Divide, args)
    }

    /// Fold the numeric arguments left to right with `op`.
    /// A lone argument to `-` is negated.
    fn arithmetic(op: Operator, mut args: Value) -> RuntimeResult<Value> {
        let all_numbers = args
            .cells()
            .map_or(true, |cells| cells.iter().all(|c| matches!(c, Value::Number(_))));
        if !all_numbers {
            return Err(RuntimeError::NonNumber);
        }

        let mut accumulator = expect_number(args.pop_at(0)?)?;
        if op == Operator::Subtract && args.is_empty() {
            accumulator = accumulator
                .checked_neg()
                .ok_or(RuntimeError::IntegerOverflow)?;
        }
        while !args.is_empty() {
            let operand = expect_number(args.pop_at(0)?)?;
            accumulator = op.apply(accumulator, operand)?;
        }
        Ok(Value::Number(accumulator))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn apply(self, x: i64, y: i64) -> RuntimeResult<i64> {
        let result = match self {
            Operator::Add => x.checked_add(y),
            Operator::Subtract => x.checked_sub(y),
            Operator::Multiply => x.checked_mul(y),
            Operator::Divide => {
                if y == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                x.checked_div(y)
            }
        };
        result.ok_or(RuntimeError::IntegerOverflow)
    }
}

fn expect_number(value: Value) -> RuntimeResult<i64> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(RuntimeError::NonNumber),
    }
}
