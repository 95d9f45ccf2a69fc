//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, checking tree shape, error reports and re-entrancy.

use microml::{
    ast::ast::{Node, NodeType},
    format_error,
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
};
use std::thread;

const SIMPLE_EXPRESSION: &str = "let x = 5 in
let y = 10 in
x + y * 2";

const BASIC_FUNCTION: &str = "let add = fn x y -> x + y in
add 5 10";

const CONDITIONAL: &str = "let max = fn a b ->
  if a > b then a else b
in
max 42 17";

fn node_types(node: &Node) -> Vec<NodeType> {
    let mut types = vec![node.get_node_type()];
    for child in node.children() {
        types.extend(node_types(child));
    }
    types
}

fn labels(node: &Node) -> Vec<String> {
    let mut result = vec![node.label()];
    for child in node.children() {
        result.extend(labels(child));
    }
    result
}

#[test]
fn test_parse_simple_expression_sample() {
    let ast = parse_source(SIMPLE_EXPRESSION).unwrap().unwrap();

    assert_eq!(
        labels(&ast),
        vec![
            "Let: x",
            "Number: 5",
            "Let: y",
            "Number: 10",
            "Op: +",
            "Var: x",
            "Op: *",
            "Var: y",
            "Number: 2",
        ]
    );
}

#[test]
fn test_parse_basic_function_sample() {
    let ast = parse_source(BASIC_FUNCTION).unwrap().unwrap();

    assert_eq!(
        labels(&ast),
        vec![
            "Let: add",
            "Function (2)",
            "Op: +",
            "Var: x",
            "Var: y",
            "Apply (2)",
            "Var: add",
            "Number: 5",
            "Number: 10",
        ]
    );
}

#[test]
fn test_parse_conditional_sample() {
    let ast = parse_source(CONDITIONAL).unwrap().unwrap();

    assert_eq!(
        node_types(&ast),
        vec![
            NodeType::Let,
            NodeType::Function,
            NodeType::If,
            NodeType::BinaryOp,
            NodeType::Identifier,
            NodeType::Identifier,
            NodeType::Identifier,
            NodeType::Identifier,
            NodeType::Application,
            NodeType::Identifier,
            NodeType::Literal,
            NodeType::Literal,
        ]
    );
}

#[test]
fn test_parse_higher_order_functions() {
    let sources = [
        "let apply = fn f x -> f x in apply",
        "let twice = fn f x -> f (f x) in twice",
        "let compose = fn f g x -> f (g x) in compose",
        "let makeAdder = fn n -> fn x -> x + n in makeAdder",
        "let add = fn x y -> x + y in let apply = fn f a -> f a in apply add 5",
        "let add = fn x y -> x + y in let add5 = add 5 in add5",
    ];

    for source in sources {
        let ast = parse_source(source).unwrap().unwrap();
        assert_eq!(ast.get_node_type(), NodeType::Let, "source: {}", source);
    }
}

#[test]
fn test_parse_multiline_conditional() {
    let source = "if x > 10 then\n  x * 2\nelse\n  x / 2";
    let ast = parse_source(source).unwrap().unwrap();

    assert_eq!(ast.get_node_type(), NodeType::If);
    assert!(ast
        .children()
        .iter()
        .all(|child| child.get_node_type() == NodeType::BinaryOp));
}

#[test]
fn test_blank_input_has_no_tree() {
    for source in ["", "   ", "\n\n", "-- comment only", "  -- a\n  -- b\n"] {
        assert!(parse_source(source).unwrap().is_none(), "source: {:?}", source);
    }
}

#[test]
fn test_reparse_is_structurally_equal() {
    let first = parse_source(CONDITIONAL).unwrap();
    let second = parse_source(CONDITIONAL).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_tokenize_then_parse() {
    let tokens = tokenize(BASIC_FUNCTION);
    assert_eq!(tokens.len(), 14);
    assert_eq!(tokens[11].value, "add");
    assert_eq!(tokens[11].line, 2);

    let ast = parse(tokens, BASIC_FUNCTION).unwrap();
    assert!(ast.is_some());
}

#[test]
fn test_error_report_for_invalid_input() {
    let source = "let x = 5 in\nlet y = \n";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_message(), "Unexpected end of input");
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_context(), "let y =");

    let report = format_error(&error);
    assert!(report.contains(&error.get_message()));
    assert!(report.contains(&format!("line {}", error.get_line())));
}

#[test]
fn test_error_on_later_line_has_context() {
    let source = "let f = fn x -> x in\n\nf (x + 1";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_line(), 3);
    assert_eq!(error.get_context(), "f (x + 1");
    assert_eq!(error.get_message(), "Expected closing parenthesis ')'");
}

#[test]
fn test_long_operator_chain_is_rejected_cleanly() {
    let source = format!("1{}", " + 1".repeat(20_000));
    let error = parse_source(&source).unwrap_err();

    assert!(error.is_internal());
    assert!(format_error(&error).starts_with("Error: Internal\n"));
}

#[test]
fn test_long_let_program() {
    let mut source = String::new();
    for i in 0..201 {
        source.push_str(&format!("let x{} = {} in\n", i, i));
    }
    source.push_str("x0");

    let ast = parse_source(&source).unwrap().unwrap();
    assert_eq!(ast.size(), 403);

    let copy = ast.clone();
    assert_eq!(copy, ast);
}

#[test]
fn test_concurrent_parses_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| parse_source(CONDITIONAL).unwrap()))
        .collect();

    let expected = parse_source(CONDITIONAL).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
