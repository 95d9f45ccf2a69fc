/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Node` sum type, its kind tag and traversal helpers
/// - expressions: Payload structs for each node kind
/// - types: Literal kinds
pub mod ast;
pub mod expressions;
pub mod types;

#[cfg(test)]
mod tests;
