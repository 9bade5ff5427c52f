use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! operator {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident = $text:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $text)]
                $variant,
            )*
        }

        impl $name {
            /// The operator as written in source.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator! {
    pub enum BinaryOperator {
        /// `,`
        Sequence = ",",
        LogicalOr = "||",
        LogicalAnd = "&&",
        BitwiseOr = "|",
        BitwiseXor = "^",
        BitwiseAnd = "&",
        Equal = "==",
        NotEqual = "!=",
        StrictEqual = "===",
        StrictNotEqual = "!==",
        LessThan = "<",
        LessThanEqual = "<=",
        GreaterThan = ">",
        GreaterThanEqual = ">=",
        In = "in",
        Instanceof = "instanceof",
        Left = "<<",
        Right = ">>",
        UnsignedRight = ">>>",
        Plus = "+",
        Minus = "-",
        Mul = "*",
        Div = "/",
        Rem = "%",
        /// `**`
        Exp = "**",
    }
}

operator! {
    pub enum UnaryOperator {
        Plus = "+",
        Minus = "-",
        /// `!`
        LogicalNot = "!",
        /// `~`
        BitNot = "~",
        TypeOf = "typeof",
        Void = "void",
        Delete = "delete",
    }
}
