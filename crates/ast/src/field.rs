use crate::{BinaryOperator, JsWord, UnaryOperator, VariableDeclarationKind};
use std::hash::{Hash, Hasher};

/// Anything that can be stored in a field of a node.
///
/// Both methods must agree: values that are `field_eq` must feed identical
/// input to `field_hash`. Node kinds get this impl from `#[ast_node]`.
///
/// Numbers are compared by their bits, not with `==`. `0.0` and `-0.0` are
/// two different trees even though `0.0 == -0.0`, and a `NaN` literal equals
/// another `NaN` literal. This keeps `Eq` and `Hash` consistent.
pub trait NodeField {
    fn field_eq(&self, other: &Self) -> bool;

    fn field_hash<H: Hasher>(&self, state: &mut H);
}

/// Absent and present are different states, even when the present value is
/// "empty".
impl<T: NodeField> NodeField for Option<T> {
    fn field_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(l), Some(r)) => l.field_eq(r),
            (None, None) => true,
            _ => false,
        }
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(v) => {
                state.write_u8(1);
                v.field_hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

/// Positional: same length, equal elements at every index.
impl<T: NodeField> NodeField for Vec<T> {
    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(l, r)| l.field_eq(r))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for v in self {
            v.field_hash(state);
        }
    }
}

impl<T: ?Sized + NodeField> NodeField for Box<T> {
    #[inline]
    fn field_eq(&self, other: &Self) -> bool {
        (**self).field_eq(other)
    }

    #[inline]
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        (**self).field_hash(state)
    }
}

/// Exact text, no normalization.
impl NodeField for JsWord {
    #[inline]
    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

/// Compared bit for bit, so `NaN` equals itself and `-0.0` differs from `0.0`,
/// unlike `f64::eq`.
impl NodeField for f64 {
    #[inline]
    fn field_eq(&self, other: &Self) -> bool {
        integer_decode(*self) == integer_decode(*other)
    }

    #[inline]
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        integer_decode(*self).hash(state)
    }
}

macro_rules! field_by_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl NodeField for $t {
                #[inline]
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn field_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state)
                }
            }
        )*
    };
}

field_by_eq!(bool, BinaryOperator, UnaryOperator, VariableDeclarationKind);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DecodedF64(u64, i16, i8);

// See: https://stackoverflow.com/a/39639200/
fn integer_decode(val: f64) -> DecodedF64 {
    let bits = val.to_bits();
    let sign: i8 = if bits >> 63 == 0 { 1 } else { -1 };
    let mut exponent: i16 = ((bits >> 52) & 0x7ff) as i16;
    let mantissa = if exponent == 0 {
        (bits & 0xfffffffffffff) << 1
    } else {
        (bits & 0xfffffffffffff) | 0x10000000000000
    };

    exponent -= 1023 + 52;
    DecodedF64(mantissa, exponent, sign)
}
