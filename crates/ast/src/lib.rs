//! Immutable, structurally compared syntax tree nodes.
//!
//! Every concrete node kind is a struct declared with `#[ast_node]`; every
//! role a field can be typed by (`Binding`, `Expression`, ...) is a closed enum
//! declared the same way. Equality, hashing, traversal and the JSON form are
//! all derived from that one declaration, so they always agree on the set of
//! fields a node has.
#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

pub use self::{
    branch::{AstPath, Branch, ChildNode},
    de::{deserialize_node, DeserializeNode},
    decl::{
        VariableDeclaration, VariableDeclarationBranch, VariableDeclarationKind,
        VariableDeclarator, VariableDeclaratorBranch,
    },
    expr::{
        ArrayExpression, ArrayExpressionBranch, BinaryExpression, BinaryExpressionBranch,
        CallExpression, CallExpressionBranch, ComputedMemberExpression,
        ComputedMemberExpressionBranch, ConditionalExpression, ConditionalExpressionBranch,
        Expression, ExpressionSuper, MemberExpression, MemberExpressionBase,
        MemberExpressionBaseBranch, SpreadElement, SpreadElementBranch, SpreadElementExpression,
        StaticMemberExpression, StaticMemberExpressionBranch, Super, ThisExpression,
        UnaryExpression, UnaryExpressionBranch,
    },
    field::NodeField,
    flatten::{count_kinds, flatten},
    ident::{BindingIdentifier, IdentifierExpression},
    lit::{
        LiteralBooleanExpression, LiteralInfinityExpression, LiteralNullExpression,
        LiteralNumericExpression, LiteralStringExpression,
    },
    module::{Program, Script, ScriptBranch},
    node::{AstNode, NodeKind, UnknownNodeKind},
    operators::{BinaryOperator, UnaryOperator},
    pat::{
        ArrayBinding, ArrayBindingBranch, Binding, BindingBindingWithDefault, BindingPattern,
        BindingProperty, BindingPropertyIdentifier, BindingPropertyIdentifierBranch,
        BindingPropertyProperty, BindingPropertyPropertyBranch, BindingWithDefault,
        BindingWithDefaultBranch, ObjectBinding, ObjectBindingBranch,
    },
    precedence::Precedence,
    prop::{ComputedPropertyName, ComputedPropertyNameBranch, PropertyName, StaticPropertyName},
    stmt::{
        ExpressionStatement, ExpressionStatementBranch, Statement, VariableDeclarationStatement,
        VariableDeclarationStatementBranch,
    },
    visit::{Fold, FoldWith, Visit, VisitWith},
};
pub use atoms::{js_word, JsWord};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

mod branch;
mod de;
mod decl;
mod expr;
mod field;
mod flatten;
mod ident;
pub mod json;
mod lit;
mod module;
mod node;
mod operators;
mod pat;
mod precedence;
mod prop;
mod stmt;
mod visit;

#[cfg(test)]
mod tests;

/// A value participating in the syntax tree.
///
/// Implemented by every concrete node kind and every role enum. Role values
/// report the kind of the node they currently hold.
pub trait Node {
    /// Borrow this value as the concrete node it is (or holds).
    fn as_node(&self) -> AstNode<'_>;

    #[inline]
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }

    /// Deterministic hash of the whole subtree.
    ///
    /// Equal nodes always produce the same value, and the value does not
    /// change between runs of the program.
    fn structural_hash(&self) -> u64
    where
        Self: Hash,
    {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T> Node for &T
where
    T: ?Sized + Node,
{
    fn as_node(&self) -> AstNode<'_> {
        (**self).as_node()
    }
}

impl<T> Node for Box<T>
where
    T: ?Sized + Node,
{
    fn as_node(&self) -> AstNode<'_> {
        self.as_ref().as_node()
    }
}
