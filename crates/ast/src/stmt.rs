use crate::{decl::VariableDeclaration, expr::Expression};
use ast_node::ast_node;

#[ast_node]
pub enum Statement {
    VariableDeclaration(VariableDeclarationStatement),

    Expression(ExpressionStatement),
}

/// `let a = 1;`
#[ast_node]
pub struct VariableDeclarationStatement {
    pub declaration: VariableDeclaration,
}

#[ast_node]
pub struct ExpressionStatement {
    pub expression: Expression,
}
