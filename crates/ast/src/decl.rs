use crate::{expr::Expression, pat::Binding};
use ast_node::ast_node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[ast_node]
pub struct VariableDeclaration {
    pub kind: VariableDeclarationKind,

    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableDeclarationKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

/// `binding = init`
///
/// Whether an initializer is required (`const`, destructuring) is decided by
/// the parser; this node stores what it is given.
#[ast_node]
pub struct VariableDeclarator {
    pub binding: Binding,

    /// Initialization expression.
    pub init: Option<Expression>,
}

impl VariableDeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableDeclarationKind::Var => "var",
            VariableDeclarationKind::Let => "let",
            VariableDeclarationKind::Const => "const",
        }
    }
}

impl fmt::Display for VariableDeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
