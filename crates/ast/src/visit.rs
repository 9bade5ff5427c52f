//! Read-only traversal (`Visit`) and rebuilding traversal (`Fold`).
//!
//! Every node kind and every role has one method on each trait. The default
//! method recurses into the children, so an implementation only overrides
//! the kinds it cares about and calls `visit_children_with` /
//! `fold_children_with` to keep descending.

use crate::*;

/// Nodes and containers of nodes which can be walked by a [`Visit`].
pub trait VisitWith<'ast> {
    /// Calls the visitor method of this node.
    fn visit_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V);

    /// Visits every child of this node, in field declaration order.
    fn visit_children_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V);
}

/// Nodes and containers of nodes which can be rebuilt by a [`Fold`].
pub trait FoldWith: Sized {
    fn fold_with<F: ?Sized + Fold>(self, f: &mut F) -> Self;

    fn fold_children_with<F: ?Sized + Fold>(self, f: &mut F) -> Self;
}

macro_rules! define {
    ($($ty:ident => $visit:ident, $fold:ident;)*) => {
        pub trait Visit<'ast> {
            /// Called with every concrete node before its own `visit_*`
            /// method, whether or not that method is overridden.
            #[inline]
            fn enter(&mut self, _node: AstNode<'ast>) {}

            $(
                fn $visit(&mut self, n: &'ast $ty) {
                    n.visit_children_with(self)
                }
            )*
        }

        /// Builds a new tree out of an old one. Folding with a `Fold` that
        /// overrides nothing returns a tree equal to its input.
        pub trait Fold {
            $(
                fn $fold(&mut self, n: $ty) -> $ty {
                    n.fold_children_with(self)
                }
            )*
        }
    };
}

define! {
    // roles
    Binding => visit_binding, fold_binding;
    BindingPattern => visit_binding_pattern, fold_binding_pattern;
    BindingBindingWithDefault => visit_binding_binding_with_default, fold_binding_binding_with_default;
    BindingProperty => visit_binding_property, fold_binding_property;
    PropertyName => visit_property_name, fold_property_name;
    Expression => visit_expression, fold_expression;
    ExpressionSuper => visit_expression_super, fold_expression_super;
    MemberExpression => visit_member_expression, fold_member_expression;
    SpreadElementExpression => visit_spread_element_expression, fold_spread_element_expression;
    Statement => visit_statement, fold_statement;
    Program => visit_program, fold_program;

    // decl
    VariableDeclaration => visit_variable_declaration, fold_variable_declaration;
    VariableDeclarator => visit_variable_declarator, fold_variable_declarator;
    // expr
    Super => visit_super, fold_super;
    ThisExpression => visit_this_expression, fold_this_expression;
    ArrayExpression => visit_array_expression, fold_array_expression;
    SpreadElement => visit_spread_element, fold_spread_element;
    StaticMemberExpression => visit_static_member_expression, fold_static_member_expression;
    ComputedMemberExpression => visit_computed_member_expression, fold_computed_member_expression;
    CallExpression => visit_call_expression, fold_call_expression;
    UnaryExpression => visit_unary_expression, fold_unary_expression;
    BinaryExpression => visit_binary_expression, fold_binary_expression;
    ConditionalExpression => visit_conditional_expression, fold_conditional_expression;
    // ident
    BindingIdentifier => visit_binding_identifier, fold_binding_identifier;
    IdentifierExpression => visit_identifier_expression, fold_identifier_expression;
    // lit
    LiteralBooleanExpression => visit_literal_boolean_expression, fold_literal_boolean_expression;
    LiteralNullExpression => visit_literal_null_expression, fold_literal_null_expression;
    LiteralNumericExpression => visit_literal_numeric_expression, fold_literal_numeric_expression;
    LiteralInfinityExpression => visit_literal_infinity_expression, fold_literal_infinity_expression;
    LiteralStringExpression => visit_literal_string_expression, fold_literal_string_expression;
    // module
    Script => visit_script, fold_script;
    // pat
    ArrayBinding => visit_array_binding, fold_array_binding;
    ObjectBinding => visit_object_binding, fold_object_binding;
    BindingWithDefault => visit_binding_with_default, fold_binding_with_default;
    BindingPropertyIdentifier => visit_binding_property_identifier, fold_binding_property_identifier;
    BindingPropertyProperty => visit_binding_property_property, fold_binding_property_property;
    // prop
    StaticPropertyName => visit_static_property_name, fold_static_property_name;
    ComputedPropertyName => visit_computed_property_name, fold_computed_property_name;
    // stmt
    VariableDeclarationStatement => visit_variable_declaration_statement, fold_variable_declaration_statement;
    ExpressionStatement => visit_expression_statement, fold_expression_statement;
}

impl<'ast, T> VisitWith<'ast> for Box<T>
where
    T: VisitWith<'ast>,
{
    #[inline]
    fn visit_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V) {
        (**self).visit_with(v)
    }

    #[inline]
    fn visit_children_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V) {
        (**self).visit_children_with(v)
    }
}

impl<'ast, T> VisitWith<'ast> for Option<T>
where
    T: VisitWith<'ast>,
{
    fn visit_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V) {
        if let Some(n) = self {
            n.visit_with(v)
        }
    }

    fn visit_children_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V) {
        self.visit_with(v)
    }
}

impl<'ast, T> VisitWith<'ast> for Vec<T>
where
    T: VisitWith<'ast>,
{
    fn visit_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V) {
        for n in self {
            n.visit_with(v)
        }
    }

    fn visit_children_with<V: ?Sized + Visit<'ast>>(&'ast self, v: &mut V) {
        self.visit_with(v)
    }
}

impl<T: FoldWith> FoldWith for Box<T> {
    fn fold_with<F: ?Sized + Fold>(self, f: &mut F) -> Self {
        Box::new((*self).fold_with(f))
    }

    fn fold_children_with<F: ?Sized + Fold>(self, f: &mut F) -> Self {
        Box::new((*self).fold_children_with(f))
    }
}

impl<T: FoldWith> FoldWith for Option<T> {
    fn fold_with<F: ?Sized + Fold>(self, f: &mut F) -> Self {
        self.map(|n| n.fold_with(f))
    }

    fn fold_children_with<F: ?Sized + Fold>(self, f: &mut F) -> Self {
        self.fold_with(f)
    }
}

impl<T: FoldWith> FoldWith for Vec<T> {
    fn fold_with<F: ?Sized + Fold>(self, f: &mut F) -> Self {
        self.into_iter().map(|n| n.fold_with(f)).collect()
    }

    fn fold_children_with<F: ?Sized + Fold>(self, f: &mut F) -> Self {
        self.fold_with(f)
    }
}

/// Leaf values have no children.
macro_rules! leaf {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'ast> VisitWith<'ast> for $t {
                #[inline]
                fn visit_with<V: ?Sized + Visit<'ast>>(&'ast self, _: &mut V) {}

                #[inline]
                fn visit_children_with<V: ?Sized + Visit<'ast>>(&'ast self, _: &mut V) {}
            }

            impl FoldWith for $t {
                #[inline]
                fn fold_with<F: ?Sized + Fold>(self, _: &mut F) -> Self {
                    self
                }

                #[inline]
                fn fold_children_with<F: ?Sized + Fold>(self, _: &mut F) -> Self {
                    self
                }
            }
        )*
    };
}

leaf!(
    bool,
    f64,
    JsWord,
    BinaryOperator,
    UnaryOperator,
    VariableDeclarationKind,
);
