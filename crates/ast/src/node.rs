use crate::*;
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

macro_rules! make_enum {
    ($name:ident, $kind:ident, [$($field:ident,)*]) => {
        /// A borrowed reference to a node of any concrete kind.
        ///
        /// Compares and hashes as the node it refers to.
        #[derive(Copy, Clone, PartialEq, Eq)]
        pub enum $name<'ast> {
            $($field(&'ast $field),)*
        }

        /// The identity of a concrete node kind.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $kind {
            $($field,)*
        }

        impl $kind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$kind] = &[$($kind::$field,)*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($kind::$field => stringify!($field),)*
                }
            }
        }

        impl<'ast> $name<'ast> {
            pub fn kind(self) -> $kind {
                match self {
                    $($name::$field(_) => $kind::$field,)*
                }
            }

            pub fn visit_with<V: ?Sized + Visit<'ast>>(self, v: &mut V) {
                match self {
                    $($name::$field(n) => n.visit_with(v),)*
                }
            }

            pub fn visit_children_with<V: ?Sized + Visit<'ast>>(self, v: &mut V) {
                match self {
                    $($name::$field(n) => n.visit_children_with(v),)*
                }
            }
        }

        $(
            impl<'ast> From<&'ast $field> for $name<'ast> {
                fn from(other: &'ast $field) -> $name<'ast> {
                    $name::$field(other)
                }
            }
        )*

        impl Hash for $name<'_> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                match self {
                    $($name::$field(n) => n.hash(state),)*
                }
            }
        }

        impl<'ast> fmt::Debug for $name<'ast> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.kind().as_str())
            }
        }
    };
}

make_enum!(
    AstNode,
    NodeKind,
    [
        // decl
        VariableDeclaration,
        VariableDeclarator,
        // expr
        Super,
        ThisExpression,
        ArrayExpression,
        SpreadElement,
        StaticMemberExpression,
        ComputedMemberExpression,
        CallExpression,
        UnaryExpression,
        BinaryExpression,
        ConditionalExpression,
        // ident
        BindingIdentifier,
        IdentifierExpression,
        // lit
        LiteralBooleanExpression,
        LiteralNullExpression,
        LiteralNumericExpression,
        LiteralInfinityExpression,
        LiteralStringExpression,
        // module
        Script,
        // pat
        ArrayBinding,
        ObjectBinding,
        BindingWithDefault,
        BindingPropertyIdentifier,
        BindingPropertyProperty,
        // prop
        StaticPropertyName,
        ComputedPropertyName,
        // stmt
        VariableDeclarationStatement,
        ExpressionStatement,
    ]
);

impl Node for AstNode<'_> {
    #[inline]
    fn as_node(&self) -> AstNode<'_> {
        *self
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeKind(pub String);

impl fmt::Display for UnknownNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown node kind `{}`", self.0)
    }
}

impl std::error::Error for UnknownNodeKind {}

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}
