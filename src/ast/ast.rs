use std::fmt::Display;

use super::expressions::{
    ApplicationExpr, BinaryExpr, FunctionExpr, IdentifierExpr, IfExpr, LetExpr, LiteralExpr,
};

/// Node Types
///
/// The kind tag of every node, for consumers that walk the tree generically.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeType {
    Literal,
    Identifier,
    BinaryOp,
    Function,
    Application,
    Let,
    If,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A MicroML expression.
///
/// The whole program is one expression, so the root of a parse is a `Node`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    BinaryOp(BinaryExpr),
    Function(FunctionExpr),
    Application(ApplicationExpr),
    Let(LetExpr),
    If(IfExpr),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Literal(_) => NodeType::Literal,
            Node::Identifier(_) => NodeType::Identifier,
            Node::BinaryOp(_) => NodeType::BinaryOp,
            Node::Function(_) => NodeType::Function,
            Node::Application(_) => NodeType::Application,
            Node::Let(_) => NodeType::Let,
            Node::If(_) => NodeType::If,
        }
    }

    /// Child nodes in evaluation order. Leaves return an empty list.
    ///
    /// - BinaryOp: left, right
    /// - Function: body
    /// - Application: function, then each argument
    /// - Let: value, body
    /// - If: condition, then-branch, else-branch
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Literal(_) | Node::Identifier(_) => vec![],
            Node::BinaryOp(binary) => vec![binary.get_left(), binary.get_right()],
            Node::Function(function) => vec![function.get_body()],
            Node::Application(application) => {
                let mut children = vec![application.get_function()];
                children.extend(application.get_arguments());
                children
            }
            Node::Let(let_expr) => vec![let_expr.get_value(), let_expr.get_body()],
            Node::If(if_expr) => vec![
                if_expr.get_condition(),
                if_expr.get_then_branch(),
                if_expr.get_else_branch(),
            ],
        }
    }

    /// Display text for a tree diagram box.
    pub fn label(&self) -> String {
        match self {
            Node::Literal(literal) => format!("{}: {}", literal.get_kind(), literal.get_value()),
            Node::Identifier(identifier) => format!("Var: {}", identifier.get_name()),
            Node::BinaryOp(binary) => format!("Op: {}", binary.get_operator()),
            Node::Function(function) => format!("Function ({})", function.get_parameters().len()),
            Node::Application(application) => format!("Apply ({})", application.get_arguments().len()),
            Node::Let(let_expr) => format!("Let: {}", let_expr.get_variable()),
            Node::If(_) => String::from("If"),
        }
    }

    /// Number of nodes in the tree rooted here.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children());
        }

        size
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal(_) | Node::Identifier(_) => 1,
            Node::BinaryOp(binary) => binary.get_depth(),
            Node::Function(function) => function.get_depth(),
            Node::Application(application) => application.get_depth(),
            Node::Let(let_expr) => let_expr.get_depth(),
            Node::If(if_expr) => if_expr.get_depth(),
        }
    }
}
