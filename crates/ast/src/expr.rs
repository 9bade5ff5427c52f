use crate::{
    ident::IdentifierExpression,
    lit::{
        LiteralBooleanExpression, LiteralInfinityExpression, LiteralNullExpression,
        LiteralNumericExpression, LiteralStringExpression,
    },
    operators::{BinaryOperator, UnaryOperator},
};
use ast_node::ast_node;
use atoms::JsWord;

#[ast_node]
pub enum Expression {
    Identifier(IdentifierExpression),

    This(ThisExpression),

    LiteralBoolean(LiteralBooleanExpression),

    LiteralNull(LiteralNullExpression),

    LiteralNumeric(LiteralNumericExpression),

    LiteralInfinity(LiteralInfinityExpression),

    LiteralString(LiteralStringExpression),

    Array(ArrayExpression),

    /// `a.b` or `a[b]`
    Member(MemberExpression),

    Call(CallExpression),

    Unary(UnaryExpression),

    Binary(BinaryExpression),

    /// `test ? consequent : alternate`
    Conditional(ConditionalExpression),
}

/// An expression, or `super` where a member access or call allows it.
#[ast_node]
pub enum ExpressionSuper {
    Expression(Box<Expression>),

    Super(Super),
}

/// `super`. Only valid as the object of a member expression or the callee
/// of a call.
#[ast_node]
pub struct Super {}

#[ast_node]
pub struct ThisExpression {}

/// `[a, , ...b]`
#[ast_node]
pub struct ArrayExpression {
    /// `None` entries are elisions.
    pub elements: Vec<Option<SpreadElementExpression>>,
}

#[ast_node]
pub enum SpreadElementExpression {
    SpreadElement(SpreadElement),

    Expression(Expression),
}

/// `...expression`
#[ast_node]
pub struct SpreadElement {
    pub expression: Expression,
}

#[ast_node]
pub enum MemberExpression {
    Static(StaticMemberExpression),

    Computed(ComputedMemberExpression),
}

/// Fields shared by every member expression.
#[ast_node(base)]
pub struct MemberExpressionBase {
    /// Evaluated before the property.
    pub object: ExpressionSuper,
}

/// `object.property`
#[ast_node]
pub struct StaticMemberExpression {
    #[serde(flatten)]
    pub base: MemberExpressionBase,

    /// Resolved at parse time; never an expression.
    pub property: JsWord,
}

/// `object[expression]`
#[ast_node]
pub struct ComputedMemberExpression {
    #[serde(flatten)]
    pub base: MemberExpressionBase,

    pub expression: Box<Expression>,
}

#[ast_node]
pub struct CallExpression {
    pub callee: ExpressionSuper,

    pub arguments: Vec<SpreadElementExpression>,
}

#[ast_node]
pub struct UnaryExpression {
    pub operator: UnaryOperator,

    pub operand: Box<Expression>,
}

#[ast_node]
pub struct BinaryExpression {
    pub left: Box<Expression>,

    pub operator: BinaryOperator,

    pub right: Box<Expression>,
}

#[ast_node]
pub struct ConditionalExpression {
    pub test: Box<Expression>,

    pub consequent: Box<Expression>,

    pub alternate: Box<Expression>,
}

impl MemberExpression {
    pub fn base(&self) -> &MemberExpressionBase {
        match self {
            MemberExpression::Static(e) => &e.base,
            MemberExpression::Computed(e) => &e.base,
        }
    }

    #[inline]
    pub fn object(&self) -> &ExpressionSuper {
        &self.base().object
    }
}

impl StaticMemberExpression {
    pub fn new(object: impl Into<ExpressionSuper>, property: impl Into<JsWord>) -> Self {
        StaticMemberExpression {
            base: MemberExpressionBase {
                object: object.into(),
            },
            property: property.into(),
        }
    }

    #[inline]
    pub fn object(&self) -> &ExpressionSuper {
        &self.base.object
    }
}

impl ComputedMemberExpression {
    pub fn new(object: impl Into<ExpressionSuper>, expression: impl Into<Expression>) -> Self {
        ComputedMemberExpression {
            base: MemberExpressionBase {
                object: object.into(),
            },
            expression: Box::new(expression.into()),
        }
    }

    #[inline]
    pub fn object(&self) -> &ExpressionSuper {
        &self.base.object
    }
}

impl ExpressionSuper {
    pub fn is_super(&self) -> bool {
        matches!(self, ExpressionSuper::Super(..))
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            ExpressionSuper::Expression(e) => Some(e),
            ExpressionSuper::Super(_) => None,
        }
    }
}

impl From<Expression> for ExpressionSuper {
    fn from(e: Expression) -> Self {
        ExpressionSuper::Expression(Box::new(e))
    }
}

impl From<IdentifierExpression> for ExpressionSuper {
    fn from(e: IdentifierExpression) -> Self {
        Expression::Identifier(e).into()
    }
}

impl From<StaticMemberExpression> for Expression {
    fn from(e: StaticMemberExpression) -> Self {
        Expression::Member(MemberExpression::Static(e))
    }
}

impl From<ComputedMemberExpression> for Expression {
    fn from(e: ComputedMemberExpression) -> Self {
        Expression::Member(MemberExpression::Computed(e))
    }
}
