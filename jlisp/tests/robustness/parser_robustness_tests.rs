// JLISP Parser Robustness Tests
// Malformed lines are rejected by the grammar and never reach the evaluator.

use jlisp::parser::{parse, NodeTag, ParseError};
use jlisp::{Runtime, Value};

fn assert_rejected(source: &str) -> ParseError {
    match parse(source) {
        Ok(tree) => panic!("Expected '{}' to be rejected, got tree:\n{}", source, tree),
        Err(err) => err,
    }
}

#[test]
fn test_unclosed_parenthesis() {
    let err = assert_rejected("(+ 1 2");
    assert_eq!(err.location(), Some((1, 7)));
}

#[test]
fn test_mismatched_delimiters() {
    assert_rejected("(+ 1 2}");
    assert_rejected("{1 2)");
    assert_rejected(")");
}

#[test]
fn test_unknown_symbols_are_rejected() {
    assert_rejected("cons 1 {2}");
    assert_rejected("% 4 2");
    assert_rejected("headx {1}");
}

#[test]
fn test_non_integer_literals_are_rejected() {
    assert_rejected("+ 1.5 2");
    assert_rejected("\"text\"");
}

#[test]
fn test_error_message_mentions_position() {
    let err = assert_rejected("+ 1 (");
    let message = err.to_string();
    assert!(message.contains("1:6"), "unexpected message: {}", message);
}

#[test]
fn test_whitespace_is_insignificant() {
    let spaced = parse("  (  +   1\t2 )  ").expect("spaced input");
    let compact = parse("(+ 1 2)").expect("compact input");
    assert_eq!(spaced, compact);
}

#[test]
fn test_deep_nesting_parses() {
    let depth = 64;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let mut node = parse(&source).expect("nested input");
    for _ in 0..depth {
        node = node
            .children
            .into_iter()
            .find(|c| c.tag == NodeTag::SExpr || c.tag == NodeTag::Number)
            .expect("nested child");
    }
    assert_eq!(node.tag, NodeTag::SExpr);
    assert_eq!(node.children[1].contents, "1");
}

fn nested_sum(depth: usize) -> String {
    format!("{}+ 1 1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_moderate_nesting_evaluates() {
    let runtime = Runtime::default();
    let result = runtime.evaluate_source(&nested_sum(500)).expect("500 levels parse");
    assert_eq!(result, Value::Number(2));
}

#[test]
fn test_excessive_nesting_is_a_parse_error() {
    // The grammar gives up somewhere below a thousand levels; it must fail
    // with a positioned error rather than overflow the stack.
    let runtime = Runtime::default();
    for depth in [1_000, 5_000, 50_000] {
        let err = runtime
            .evaluate_source(&nested_sum(depth))
            .expect_err("deep nesting should be rejected");
        assert!(matches!(err, ParseError::Syntax(_)), "depth {}: {:?}", depth, err);
        assert_eq!(err.location().map(|(line, _)| line), Some(1));
    }
}
