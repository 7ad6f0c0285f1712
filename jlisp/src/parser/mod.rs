use pest::iterators::Pair;
use pest::Parser;
use std::fmt;

pub mod errors;

pub use errors::ParseError;
use errors::unexpected_rule_error;

// Define the parser struct using the grammar file
#[derive(pest_derive::Parser)]
#[grammar = "jlisp.pest"] // Path relative to src/
pub struct JlispParser;

/// Classification of a syntax tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// The whole line
    Root,
    Number,
    Symbol,
    SExpr,
    QExpr,
    /// Bracket punctuation
    Char,
    /// End-of-input marker
    Anchor,
}

impl NodeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeTag::Root => "root",
            NodeTag::Number => "number",
            NodeTag::Symbol => "symbol",
            NodeTag::SExpr => "sexpr",
            NodeTag::QExpr => "qexpr",
            NodeTag::Char => "char",
            NodeTag::Anchor => "anchor",
        }
    }
}

/// A parsed node: a tag, the literal text for leaves, and ordered children.
///
/// This is the only shape the reader consumes, so trees can also be built by
/// hand without going through the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub tag: NodeTag,
    pub contents: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(tag: NodeTag, contents: impl Into<String>) -> Self {
        Self {
            tag,
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(tag: NodeTag, children: Vec<SyntaxNode>) -> Self {
        Self {
            tag,
            contents: String::new(),
            children,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag.as_str(), indent = depth * 2)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

fn build_node(pair: Pair<Rule>) -> Result<SyntaxNode, ParseError> {
    let tag = match pair.as_rule() {
        Rule::sexpr => NodeTag::SExpr,
        Rule::qexpr => NodeTag::QExpr,
        Rule::number => return Ok(SyntaxNode::leaf(NodeTag::Number, pair.as_str())),
        Rule::symbol => return Ok(SyntaxNode::leaf(NodeTag::Symbol, pair.as_str())),
        Rule::lparen | Rule::rparen | Rule::lbrace | Rule::rbrace => {
            return Ok(SyntaxNode::leaf(NodeTag::Char, pair.as_str()))
        }
        Rule::EOI => return Ok(SyntaxNode::leaf(NodeTag::Anchor, "")),
        _ => return Err(unexpected_rule_error(&pair)),
    };

    let children = pair
        .into_inner()
        .map(build_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SyntaxNode::branch(tag, children))
}

/// Parse one line of input into a syntax tree rooted at a `Root` node
pub fn parse(input: &str) -> Result<SyntaxNode, ParseError> {
    let children = JlispParser::parse(Rule::lispy, input)?
        .flat_map(|line| line.into_inner())
        .map(build_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SyntaxNode::branch(NodeTag::Root, children))
}
