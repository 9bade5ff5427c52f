use crate::{BinaryOperator, Expression, ExpressionSuper, MemberExpression};

/// Binding strength of an expression, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Sequence,
    Yield,
    Assignment,
    Conditional,
    ArrowFunction,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponential,
    Prefix,
    Postfix,
    New,
    Call,
    Member,
    Primary,
}

impl BinaryOperator {
    pub fn precedence(self) -> Precedence {
        use BinaryOperator::*;

        match self {
            Sequence => Precedence::Sequence,
            LogicalOr => Precedence::LogicalOr,
            LogicalAnd => Precedence::LogicalAnd,
            BitwiseOr => Precedence::BitwiseOr,
            BitwiseXor => Precedence::BitwiseXor,
            BitwiseAnd => Precedence::BitwiseAnd,
            Equal | NotEqual | StrictEqual | StrictNotEqual => Precedence::Equality,
            LessThan | LessThanEqual | GreaterThan | GreaterThanEqual | In | Instanceof => {
                Precedence::Relational
            }
            Left | Right | UnsignedRight => Precedence::Shift,
            Plus | Minus => Precedence::Additive,
            Mul | Div | Rem => Precedence::Multiplicative,
            Exp => Precedence::Exponential,
        }
    }
}

impl Expression {
    pub fn precedence(&self) -> Precedence {
        match self {
            Expression::Identifier(_)
            | Expression::This(_)
            | Expression::LiteralBoolean(_)
            | Expression::LiteralNull(_)
            | Expression::LiteralNumeric(_)
            | Expression::LiteralInfinity(_)
            | Expression::LiteralString(_)
            | Expression::Array(_) => Precedence::Primary,
            Expression::Member(m) => m.precedence(),
            Expression::Call(_) => Precedence::Call,
            Expression::Unary(_) => Precedence::Prefix,
            Expression::Binary(b) => b.operator.precedence(),
            Expression::Conditional(_) => Precedence::Conditional,
        }
    }
}

impl MemberExpression {
    /// `a().b` binds like a call, every other member access like a member.
    pub fn precedence(&self) -> Precedence {
        match self.object() {
            ExpressionSuper::Super(_) => Precedence::Member,
            ExpressionSuper::Expression(e) => match e.precedence() {
                Precedence::Call => Precedence::Call,
                _ => Precedence::Member,
            },
        }
    }
}
