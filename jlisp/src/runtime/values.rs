// Runtime value system for JLISP
// Represents values during evaluation (different from the syntax tree which represents parsed text)

use crate::runtime::error::{RuntimeError, RuntimeResult};
use std::fmt;

/// A runtime datum.
///
/// List variants own their children outright. `Value` is deliberately not
/// `Clone`: every transfer between lists is a move.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    /// Evaluable list
    SExpr(Vec<Value>),
    /// Quoted list, never evaluated implicitly
    QExpr(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

impl Value {
    pub fn number(n: i64) -> Value {
        Value::Number(n)
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    pub fn symbol(name: impl Into<String>) -> Value {
        Value::Symbol(name.into())
    }

    pub fn sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Value {
        Value::QExpr(Vec::new())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::SExpr(_) => "s-expression",
            Value::QExpr(_) => "q-expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_qexpr(&self) -> bool {
        matches!(self, Value::QExpr(_))
    }

    /// Children of a list value, `None` for atoms
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    fn cells_mut(&mut self) -> RuntimeResult<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Ok(cells),
            other => Err(RuntimeError::NotAList(other.type_name())),
        }
    }

    fn into_cells(self) -> RuntimeResult<Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Ok(cells),
            other => Err(RuntimeError::NotAList(other.type_name())),
        }
    }

    /// Number of children; atoms have none
    pub fn len(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- List operations ---

    /// Place `value` at the end of this list and hand the list back
    pub fn append(mut self, value: Value) -> RuntimeResult<Value> {
        self.cells_mut()?.push(value);
        Ok(self)
    }

    /// Remove the child at `index`; later children shift down by one.
    /// The list itself stays valid and owned by the caller.
    pub fn pop_at(&mut self, index: usize) -> RuntimeResult<Value> {
        let cells = self.cells_mut()?;
        if index >= cells.len() {
            return Err(RuntimeError::IndexOutOfBounds {
                index,
                length: cells.len(),
            });
        }
        Ok(cells.remove(index))
    }

    /// Pop the child at `index` and discard the rest of the list
    pub fn take_at(mut self, index: usize) -> RuntimeResult<Value> {
        self.pop_at(index)
    }

    /// Move every child of `src`, in order, onto the end of this list.
    /// `src` is consumed.
    pub fn join(mut self, src: Value) -> RuntimeResult<Value> {
        let mut moved = src.into_cells()?;
        self.cells_mut()?.append(&mut moved);
        Ok(self)
    }

    /// Reclassify a list as a Q-expression, keeping its children in place
    pub fn into_qexpr(self) -> RuntimeResult<Value> {
        self.into_cells().map(Value::QExpr)
    }

    /// Reclassify a list as an S-expression, keeping its children in place
    pub fn into_sexpr(self) -> RuntimeResult<Value> {
        self.into_cells().map(Value::SExpr)
    }
}
