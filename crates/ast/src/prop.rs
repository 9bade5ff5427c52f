use crate::expr::Expression;
use ast_node::ast_node;
use atoms::JsWord;

#[ast_node]
pub enum PropertyName {
    Static(StaticPropertyName),

    /// `[expression]`
    Computed(ComputedPropertyName),
}

/// An identifier, string or numeric property key, stored as its string value.
#[ast_node]
pub struct StaticPropertyName {
    pub value: JsWord,
}

#[ast_node]
pub struct ComputedPropertyName {
    pub expression: Expression,
}
