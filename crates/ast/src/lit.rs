use ast_node::ast_node;
use atoms::JsWord;
use serde::{ser::Error, Serializer};
use std::fmt::{self, Display, Formatter};

#[ast_node]
pub struct LiteralBooleanExpression {
    pub value: bool,
}

#[ast_node]
pub struct LiteralNullExpression {}

/// A finite number. Infinity has its own kind, [`LiteralInfinityExpression`].
#[ast_node]
pub struct LiteralNumericExpression {
    /// Compared by bit pattern: `NaN` equals itself and `0.0` differs from
    /// `-0.0`.
    #[serde(serialize_with = "serialize_finite")]
    pub value: f64,
}

/// A numeric literal too large to be finite, like `2e308`.
#[ast_node]
pub struct LiteralInfinityExpression {}

/// The cooked value of a string literal.
#[ast_node]
pub struct LiteralStringExpression {
    pub value: JsWord,
}

impl LiteralStringExpression {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// JSON has no spelling for non-finite numbers, so writing one is an error
/// instead of a silent `null`.
fn serialize_finite<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format_args!(
            "non-finite number `{}` in LiteralNumericExpression",
            value
        )))
    }
}

impl Display for LiteralInfinityExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Infinity")
    }
}

impl Display for LiteralNumericExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.value.is_infinite() {
            if self.value.is_sign_positive() {
                Display::fmt("Infinity", f)
            } else {
                Display::fmt("-Infinity", f)
            }
        } else {
            Display::fmt(&self.value, f)
        }
    }
}
