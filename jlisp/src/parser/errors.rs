use pest::iterators::Pair;

/// Errors produced while turning a line of text into a syntax tree
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The grammar rejected the input; the pest message carries the position
    #[error("{0}")]
    Syntax(Box<pest::error::Error<super::Rule>>),

    #[error("Unexpected rule {rule} at {line}:{column}: '{text}'")]
    UnexpectedRule {
        rule: String,
        text: String,
        line: usize,
        column: usize,
    },
}

impl From<pest::error::Error<super::Rule>> for ParseError {
    fn from(err: pest::error::Error<super::Rule>) -> Self {
        ParseError::Syntax(Box::new(err))
    }
}

impl ParseError {
    /// Line and column of the failure, when known
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax(err) => match err.line_col {
                pest::error::LineColLocation::Pos(pos) => Some(pos),
                pest::error::LineColLocation::Span(start, _) => Some(start),
            },
            ParseError::UnexpectedRule { line, column, .. } => Some((*line, *column)),
        }
    }
}

pub(super) fn unexpected_rule_error(pair: &Pair<super::Rule>) -> ParseError {
    let (line, column) = pair.as_span().start_pos().line_col();
    ParseError::UnexpectedRule {
        rule: format!("{:?}", pair.as_rule()),
        text: pair.as_str().to_string(),
        line,
        column,
    }
}
