use ast_node::ast_node;
use atoms::JsWord;

/// Identifier used as a binding target.
#[ast_node]
pub struct BindingIdentifier {
    pub name: JsWord,
}

/// Identifier used as a value.
#[ast_node]
pub struct IdentifierExpression {
    pub name: JsWord,
}

impl BindingIdentifier {
    pub fn new(name: impl Into<JsWord>) -> Self {
        BindingIdentifier { name: name.into() }
    }
}

impl IdentifierExpression {
    pub fn new(name: impl Into<JsWord>) -> Self {
        IdentifierExpression { name: name.into() }
    }
}

impl AsRef<str> for BindingIdentifier {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for IdentifierExpression {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
