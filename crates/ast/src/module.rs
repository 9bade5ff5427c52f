use crate::stmt::Statement;
use ast_node::ast_node;

/// The root of a parsed source text.
#[ast_node]
pub enum Program {
    Script(Script),
}

#[ast_node]
pub struct Script {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn statements(&self) -> &[Statement] {
        match self {
            Program::Script(s) => &s.statements,
        }
    }
}
