//! Conversion from a parsed [`SyntaxNode`] tree into a [`Value`] tree.

use crate::parser::{NodeTag, SyntaxNode};
use crate::runtime::error::RuntimeError;
use crate::runtime::values::Value;
use tracing::trace;

const BRACKETS: [&str; 4] = ["(", ")", "{", "}"];

fn read_number(contents: &str) -> Value {
    match contents.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => RuntimeError::InvalidNumber.to_value(),
    }
}

fn is_noise(node: &SyntaxNode) -> bool {
    node.tag == NodeTag::Anchor || BRACKETS.contains(&node.contents.as_str())
}

/// Read a syntax tree node into exactly one value.
///
/// Numbers and symbols become atoms. Every other node becomes a list (a
/// Q-expression for `QExpr` nodes, an S-expression otherwise) holding its
/// children, with bracket punctuation and anchors skipped.
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        NodeTag::Number => read_number(&node.contents),
        NodeTag::Symbol => Value::Symbol(node.contents.clone()),
        tag => {
            let mut cells = Vec::with_capacity(node.children.len());
            for child in node.children.iter().filter(|c| !is_noise(c)) {
                cells.push(read(child));
            }
            trace!(tag = tag.as_str(), cells = cells.len(), "read list node");
            match tag {
                NodeTag::QExpr => Value::QExpr(cells),
                _ => Value::SExpr(cells),
            }
        }
    }
}
