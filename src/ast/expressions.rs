//! Payload structs for every node kind.
//!
//! Fields are private and constructors are crate-internal so a tree can only
//! be built by the parser, which upholds the arity invariants (a function has
//! at least one parameter, an application at least one argument).
//!
//! Compound payloads record their subtree depth when built, so depth checks
//! while parsing stay constant-time.

use super::{ast::Node, types::LiteralKind};

// LITERALS

/// Literal Expression
/// A number or boolean, kept as its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpr {
    value: String,
    kind: LiteralKind,
}

impl LiteralExpr {
    pub(crate) fn new(value: String, kind: LiteralKind) -> Self {
        LiteralExpr { value, kind }
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }

    pub fn get_kind(&self) -> LiteralKind {
        self.kind
    }
}

/// Identifier Expression
/// A variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpr {
    name: String,
}

impl IdentifierExpr {
    pub(crate) fn new(name: String) -> Self {
        IdentifierExpr { name }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

// COMPOUND

/// Binary Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    operator: String,
    left: Box<Node>,
    right: Box<Node>,
    depth: usize,
}

impl BinaryExpr {
    pub(crate) fn new(operator: String, left: Node, right: Node) -> Self {
        let depth = 1 + left.depth().max(right.depth());

        BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            depth,
        }
    }

    pub(crate) fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_operator(&self) -> &str {
        &self.operator
    }

    pub fn get_left(&self) -> &Node {
        &self.left
    }

    pub fn get_right(&self) -> &Node {
        &self.right
    }
}

/// Function Expression
/// `fn a b -> body`, curried over its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionExpr {
    parameters: Vec<String>,
    body: Box<Node>,
    depth: usize,
}

impl FunctionExpr {
    pub(crate) fn new(parameters: Vec<String>, body: Node) -> Self {
        debug_assert!(!parameters.is_empty());
        let depth = 1 + body.depth();

        FunctionExpr {
            parameters,
            body: Box::new(body),
            depth,
        }
    }

    pub(crate) fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn get_body(&self) -> &Node {
        &self.body
    }
}

/// Application Expression
/// A callee followed by one or more juxtaposed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationExpr {
    function: Box<Node>,
    arguments: Vec<Node>,
    depth: usize,
}

impl ApplicationExpr {
    pub(crate) fn new(function: Node, arguments: Vec<Node>) -> Self {
        debug_assert!(!arguments.is_empty());
        let depth = 1 + arguments
            .iter()
            .map(Node::depth)
            .fold(function.depth(), usize::max);

        ApplicationExpr {
            function: Box::new(function),
            arguments,
            depth,
        }
    }

    pub(crate) fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_function(&self) -> &Node {
        &self.function
    }

    pub fn get_arguments(&self) -> &[Node] {
        &self.arguments
    }
}

/// Let Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetExpr {
    variable: String,
    value: Box<Node>,
    body: Box<Node>,
    depth: usize,
}

impl LetExpr {
    pub(crate) fn new(variable: String, value: Node, body: Node) -> Self {
        let depth = 1 + value.depth().max(body.depth());

        LetExpr {
            variable,
            value: Box::new(value),
            body: Box::new(body),
            depth,
        }
    }

    pub(crate) fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_variable(&self) -> &str {
        &self.variable
    }

    pub fn get_value(&self) -> &Node {
        &self.value
    }

    pub fn get_body(&self) -> &Node {
        &self.body
    }
}

/// If Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpr {
    condition: Box<Node>,
    then_branch: Box<Node>,
    else_branch: Box<Node>,
    depth: usize,
}

impl IfExpr {
    pub(crate) fn new(condition: Node, then_branch: Node, else_branch: Node) -> Self {
        let depth = 1 + condition
            .depth()
            .max(then_branch.depth())
            .max(else_branch.depth());

        IfExpr {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            depth,
        }
    }

    pub(crate) fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_condition(&self) -> &Node {
        &self.condition
    }

    pub fn get_then_branch(&self) -> &Node {
        &self.then_branch
    }

    pub fn get_else_branch(&self) -> &Node {
        &self.else_branch
    }
}
