use crate::{expr::Expression, ident::BindingIdentifier, prop::PropertyName};
use ast_node::ast_node;

/// Anything a value can be bound to.
#[ast_node]
pub enum Binding {
    Identifier(BindingIdentifier),

    Pattern(BindingPattern),
}

/// Destructuring targets.
#[ast_node]
pub enum BindingPattern {
    Array(ArrayBinding),

    Object(ObjectBinding),
}

/// An element of an array pattern: a plain binding or one with a default.
#[ast_node]
pub enum BindingBindingWithDefault {
    Binding(Binding),

    WithDefault(BindingWithDefault),
}

#[ast_node]
pub enum BindingProperty {
    /// `{a}` or `{a = 1}`
    Identifier(BindingPropertyIdentifier),

    /// `{a: b}`
    Property(BindingPropertyProperty),
}

/// `[a, , b = 1, ...rest]`
#[ast_node]
pub struct ArrayBinding {
    /// `None` entries are elisions; their position is significant.
    pub elements: Vec<Option<BindingBindingWithDefault>>,

    pub rest: Option<Box<Binding>>,
}

/// `{a, b: c, ...rest}`
#[ast_node]
pub struct ObjectBinding {
    pub properties: Vec<BindingProperty>,

    pub rest: Option<BindingIdentifier>,
}

/// `binding = init`
#[ast_node]
pub struct BindingWithDefault {
    pub binding: Binding,

    /// Stored as given. A producer normally uses a plain `Binding` when there
    /// is no default, but an absent `init` here is kept distinct from that.
    pub init: Option<Expression>,
}

#[ast_node]
pub struct BindingPropertyIdentifier {
    pub binding: BindingIdentifier,

    pub init: Option<Expression>,
}

#[ast_node]
pub struct BindingPropertyProperty {
    pub name: PropertyName,

    pub binding: BindingBindingWithDefault,
}

impl From<ArrayBinding> for Binding {
    fn from(n: ArrayBinding) -> Self {
        Binding::Pattern(BindingPattern::Array(n))
    }
}

impl From<ObjectBinding> for Binding {
    fn from(n: ObjectBinding) -> Self {
        Binding::Pattern(BindingPattern::Object(n))
    }
}

impl From<BindingIdentifier> for BindingBindingWithDefault {
    fn from(n: BindingIdentifier) -> Self {
        BindingBindingWithDefault::Binding(Binding::Identifier(n))
    }
}

impl From<ArrayBinding> for BindingBindingWithDefault {
    fn from(n: ArrayBinding) -> Self {
        BindingBindingWithDefault::Binding(n.into())
    }
}

impl Binding {
    /// The identifier bound directly, without destructuring.
    pub fn as_identifier(&self) -> Option<&BindingIdentifier> {
        match self {
            Binding::Identifier(i) => Some(i),
            Binding::Pattern(_) => None,
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Binding::Pattern(..))
    }
}
