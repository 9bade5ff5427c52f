use crate::*;
use pretty_assertions::{assert_eq, assert_ne};
use std::collections::HashSet;

fn ident(name: &str) -> Expression {
    IdentifierExpression::new(name).into()
}

fn num(value: f64) -> Expression {
    LiteralNumericExpression { value }.into()
}

fn with_default(name: &str, init: Option<Expression>) -> BindingBindingWithDefault {
    BindingWithDefault {
        binding: Binding::Identifier(BindingIdentifier::new(name)),
        init,
    }
    .into()
}

/// `let [x] = ...` with the rest slot optionally filled.
fn declarator(rest: Option<&str>) -> VariableDeclarator {
    VariableDeclarator {
        binding: ArrayBinding {
            elements: vec![Some(with_default("x", None))],
            rest: rest.map(|name| Box::new(Binding::Identifier(BindingIdentifier::new(name)))),
        }
        .into(),
        init: None,
    }
}

fn assert_same<T>(a: &T, b: &T)
where
    T: std::fmt::Debug + PartialEq + std::hash::Hash + Node,
{
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn equality_is_reflexive() {
    let d = declarator(Some("y"));
    assert_eq!(d, d);
    assert_eq!(d, d.clone());
}

#[test]
fn rest_absent_vs_present() {
    let absent = declarator(None);
    let present = declarator(Some("y"));

    assert_ne!(absent, present);
    assert_ne!(present, absent);

    // Two independently built trees.
    assert_same(&declarator(None), &absent);
    assert_same(&declarator(Some("y")), &present);
}

#[test]
fn array_binding_is_not_a_variable_declarator() {
    let d = declarator(None);
    let b = match &d.binding {
        Binding::Pattern(BindingPattern::Array(b)) => b,
        _ => unreachable!(),
    };

    assert_ne!(AstNode::from(&d), AstNode::from(b));
    assert_eq!(AstNode::from(&d).kind(), NodeKind::VariableDeclarator);
    assert_eq!(b.kind(), NodeKind::ArrayBinding);
}

#[test]
fn static_and_computed_members_differ() {
    let s: Expression = StaticMemberExpression::new(IdentifierExpression::new("a"), "b").into();
    let c: Expression = ComputedMemberExpression::new(
        IdentifierExpression::new("a"),
        LiteralStringExpression { value: "b".into() },
    )
    .into();

    assert_ne!(s, c);
    assert_ne!(s.structural_hash(), c.structural_hash());
    assert_eq!(s.kind(), NodeKind::StaticMemberExpression);
    assert_eq!(c.kind(), NodeKind::ComputedMemberExpression);
}

#[test]
fn empty_kinds_hash_by_kind() {
    let hashes = [
        Super {}.structural_hash(),
        ThisExpression {}.structural_hash(),
        LiteralNullExpression {}.structural_hash(),
    ];

    assert_ne!(hashes[0], hashes[1]);
    assert_ne!(hashes[1], hashes[2]);
    assert_ne!(hashes[0], hashes[2]);
}

#[test]
fn hole_position_is_significant() {
    let x = Some(BindingBindingWithDefault::from(BindingIdentifier::new("x")));

    let hole_first = ArrayBinding {
        elements: vec![None, x.clone()],
        rest: None,
    };
    let hole_last = ArrayBinding {
        elements: vec![x.clone(), None],
        rest: None,
    };
    let no_hole = ArrayBinding {
        elements: vec![x],
        rest: None,
    };

    assert_ne!(hole_first, hole_last);
    assert_ne!(hole_first, no_hole);
    assert_ne!(hole_last, no_hole);
}

#[test]
fn array_expression_holes() {
    let a = ArrayExpression {
        elements: vec![None],
    };
    let b = ArrayExpression { elements: vec![] };
    assert_ne!(a, b);
    assert_ne!(a.structural_hash(), b.structural_hash());
}

#[test]
fn absent_rest_differs_from_empty_pattern() {
    let absent = ArrayBinding {
        elements: vec![],
        rest: None,
    };
    let empty = ArrayBinding {
        elements: vec![],
        rest: Some(Box::new(
            ArrayBinding {
                elements: vec![],
                rest: None,
            }
            .into(),
        )),
    };

    assert_ne!(absent, empty);
}

#[test]
fn absent_default_is_kept() {
    let without = with_default("x", None);
    let with = with_default("x", Some(num(1.0)));
    let plain = BindingBindingWithDefault::from(BindingIdentifier::new("x"));

    assert_ne!(without, with);
    assert_ne!(without, plain);
}

#[test]
fn deep_member_equality() {
    let build = || StaticMemberExpression::new(IdentifierExpression::new("a"), "b");
    assert_same(&build(), &build());

    let other = StaticMemberExpression::new(IdentifierExpression::new("a"), "c");
    assert_ne!(build(), other);

    let nested = StaticMemberExpression::new(Expression::from(build()), "c");
    assert_same(
        &nested,
        &StaticMemberExpression::new(Expression::from(build()), "c"),
    );
}

#[test]
fn super_object_is_not_an_expression() {
    let on_super = StaticMemberExpression::new(Super {}, "x");
    let on_this = StaticMemberExpression::new(Expression::from(ThisExpression {}), "x");

    assert!(on_super.object().is_super());
    assert_ne!(on_super, on_this);
}

#[test]
fn strings_compare_exactly() {
    let lit = |s: &str| LiteralStringExpression { value: s.into() };

    assert_ne!(lit("a"), lit("A"));
    // Precomposed and decomposed forms of the same character.
    assert_ne!(lit("\u{e9}"), lit("e\u{301}"));
    assert_same(&lit("\u{e9}"), &lit("\u{e9}"));
}

#[test]
fn numbers_compare_by_bits() {
    let lit = |value| LiteralNumericExpression { value };

    assert_same(&lit(f64::NAN), &lit(f64::NAN));
    assert_ne!(lit(0.0), lit(-0.0));
    assert_same(&lit(0.1 + 0.2), &lit(0.1 + 0.2));

    // `f64::eq` disagrees on both.
    assert!(0.0_f64 == -0.0_f64);
    assert!(!0.0_f64.field_eq(&-0.0_f64));
    assert!(f64::NAN.field_eq(&f64::NAN));
}

#[test]
fn operators_are_significant() {
    let bin = |operator| BinaryExpression {
        left: Box::new(ident("a")),
        operator,
        right: Box::new(ident("b")),
    };

    assert_ne!(bin(BinaryOperator::Plus), bin(BinaryOperator::Minus));
    assert_same(&bin(BinaryOperator::Exp), &bin(BinaryOperator::Exp));
}

#[test]
fn declaration_kind_is_significant() {
    let decl = |kind| VariableDeclaration {
        kind,
        declarators: vec![declarator(None)],
    };

    assert_ne!(
        decl(VariableDeclarationKind::Let),
        decl(VariableDeclarationKind::Const)
    );
}

#[test]
fn role_hash_matches_inner_node() {
    let inner = StaticMemberExpression::new(IdentifierExpression::new("a"), "b");
    let outer: Expression = inner.clone().into();

    assert_eq!(inner.structural_hash(), outer.structural_hash());
    assert_eq!(outer.kind(), inner.kind());
}

#[test]
fn dedupe_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(declarator(None));
    set.insert(declarator(Some("y")));
    set.insert(declarator(None));
    set.insert(declarator(Some("y")));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&declarator(Some("y"))));
}

#[test]
fn node_kind_names() {
    assert_eq!(NodeKind::ALL.len(), 29);
    assert_eq!(NodeKind::ArrayBinding.to_string(), "ArrayBinding");
    assert_eq!(
        "ComputedMemberExpression".parse::<NodeKind>(),
        Ok(NodeKind::ComputedMemberExpression)
    );
    assert_eq!(
        "MemberExpression".parse::<NodeKind>(),
        Err(UnknownNodeKind("MemberExpression".into()))
    );
}

#[test]
fn precedence_of_members() {
    let call: Expression = CallExpression {
        callee: IdentifierExpression::new("a").into(),
        arguments: vec![],
    }
    .into();
    let on_call: Expression = StaticMemberExpression::new(call.clone(), "b").into();
    let on_ident: Expression = StaticMemberExpression::new(IdentifierExpression::new("a"), "b").into();
    let on_super: Expression = StaticMemberExpression::new(Super {}, "b").into();

    assert_eq!(call.precedence(), Precedence::Call);
    assert_eq!(on_call.precedence(), Precedence::Call);
    assert_eq!(on_ident.precedence(), Precedence::Member);
    assert_eq!(on_super.precedence(), Precedence::Member);
}

#[test]
fn precedence_of_operators() {
    assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Plus.precedence());
    assert!(BinaryOperator::LogicalAnd.precedence() > BinaryOperator::LogicalOr.precedence());
    assert_eq!(BinaryOperator::In.precedence(), Precedence::Relational);

    let unary: Expression = UnaryExpression {
        operator: UnaryOperator::TypeOf,
        operand: Box::new(ident("a")),
    }
    .into();
    assert_eq!(unary.precedence(), Precedence::Prefix);
    assert_eq!(num(1.0).precedence(), Precedence::Primary);
    assert_eq!(
        Expression::from(LiteralInfinityExpression {}).precedence(),
        Precedence::Primary
    );
}

#[test]
fn numeric_display() {
    assert_eq!(
        LiteralNumericExpression {
            value: f64::INFINITY
        }
        .to_string(),
        "Infinity"
    );
    assert_eq!(LiteralNumericExpression { value: 1.5 }.to_string(), "1.5");
    assert_eq!(LiteralInfinityExpression {}.to_string(), "Infinity");
}

#[test]
fn infinity_is_its_own_kind() {
    let inf: Expression = LiteralInfinityExpression {}.into();

    assert_eq!(inf.kind(), NodeKind::LiteralInfinityExpression);
    assert_ne!(inf, num(f64::INFINITY));
    assert_same(&inf, &LiteralInfinityExpression {}.into());
}

#[test]
fn trees_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Program>();
    assert_send_sync::<AstNode<'static>>();
}

#[test]
fn ast_node_hashes_as_its_node() {
    let d = declarator(Some("y"));
    assert_eq!(AstNode::from(&d).structural_hash(), d.structural_hash());
}
