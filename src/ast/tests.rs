//! Unit tests for the AST module.
//!
//! Checks the kind tag, the ordered child view and the display labels of
//! every node kind.

use super::{
    ast::{Node, NodeType},
    expressions::{
        ApplicationExpr, BinaryExpr, FunctionExpr, IdentifierExpr, IfExpr, LetExpr, LiteralExpr,
    },
    types::LiteralKind,
};

fn num(value: &str) -> Node {
    Node::Literal(LiteralExpr::new(value.to_string(), LiteralKind::Number))
}

fn ident(name: &str) -> Node {
    Node::Identifier(IdentifierExpr::new(name.to_string()))
}

#[test]
fn test_literal_node() {
    let node = num("42");

    assert_eq!(node.get_node_type(), NodeType::Literal);
    assert!(node.children().is_empty());
    assert_eq!(node.label(), "Number: 42");

    let node = Node::Literal(LiteralExpr::new("true".to_string(), LiteralKind::Boolean));
    assert_eq!(node.label(), "Boolean: true");
}

#[test]
fn test_identifier_node() {
    let node = ident("x");

    assert_eq!(node.get_node_type(), NodeType::Identifier);
    assert!(node.children().is_empty());
    assert_eq!(node.label(), "Var: x");
}

#[test]
fn test_binary_node_children() {
    let node = Node::BinaryOp(BinaryExpr::new("+".to_string(), ident("a"), num("1")));

    assert_eq!(node.get_node_type(), NodeType::BinaryOp);
    assert_eq!(node.children(), vec![&ident("a"), &num("1")]);
    assert_eq!(node.label(), "Op: +");
}

#[test]
fn test_function_node_children() {
    let node = Node::Function(FunctionExpr::new(
        vec!["x".to_string(), "y".to_string()],
        ident("x"),
    ));

    assert_eq!(node.get_node_type(), NodeType::Function);
    assert_eq!(node.children(), vec![&ident("x")]);
    assert_eq!(node.label(), "Function (2)");
}

#[test]
fn test_application_node_children() {
    let node = Node::Application(ApplicationExpr::new(
        ident("add"),
        vec![num("5"), num("10")],
    ));

    assert_eq!(node.get_node_type(), NodeType::Application);
    assert_eq!(node.children(), vec![&ident("add"), &num("5"), &num("10")]);
    assert_eq!(node.label(), "Apply (2)");
}

#[test]
fn test_let_node_children() {
    let node = Node::Let(LetExpr::new("x".to_string(), num("5"), ident("x")));

    assert_eq!(node.get_node_type(), NodeType::Let);
    assert_eq!(node.children(), vec![&num("5"), &ident("x")]);
    assert_eq!(node.label(), "Let: x");
}

#[test]
fn test_if_node_children() {
    let node = Node::If(IfExpr::new(ident("c"), num("1"), num("0")));

    assert_eq!(node.get_node_type(), NodeType::If);
    assert_eq!(node.children(), vec![&ident("c"), &num("1"), &num("0")]);
    assert_eq!(node.label(), "If");
}

#[test]
fn test_node_type_display() {
    assert_eq!(NodeType::BinaryOp.to_string(), "BinaryOp");
    assert_eq!(NodeType::Application.to_string(), "Application");
    assert_eq!(LiteralKind::Number.to_string(), "Number");
}

#[test]
fn test_size_and_depth() {
    let leaf = ident("x");
    assert_eq!(leaf.size(), 1);
    assert_eq!(leaf.depth(), 1);

    // let x = 5 in f (x + 1)
    let node = Node::Let(LetExpr::new(
        "x".to_string(),
        num("5"),
        Node::Application(ApplicationExpr::new(
            ident("f"),
            vec![Node::BinaryOp(BinaryExpr::new(
                "+".to_string(),
                ident("x"),
                num("1"),
            ))],
        )),
    ));

    assert_eq!(node.size(), 7);
    assert_eq!(node.depth(), 4);
}

#[test]
fn test_payload_accessors() {
    let function = FunctionExpr::new(vec!["a".to_string()], ident("a"));
    assert_eq!(function.get_parameters(), ["a".to_string()]);
    assert_eq!(function.get_body(), &ident("a"));

    let literal = LiteralExpr::new("3.14".to_string(), LiteralKind::Number);
    assert_eq!(literal.get_value(), "3.14");
    assert_eq!(literal.get_kind(), LiteralKind::Number);
}
