//! Reading nodes by their `"type"` member.
//!
//! The tag is read before anything else, so a wrong or unknown kind is
//! reported where it occurs instead of after the whole object was buffered.

use crate::NodeKind;
use serde::de::{self, value::MapAccessDeserializer, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};
use std::{fmt, marker::PhantomData};

/// A node kind or role which can be read once the kind of the object is known.
///
/// Implemented by `#[ast_node]`.
pub trait DeserializeNode: Sized {
    /// Name used in error messages.
    const EXPECTING: &'static str;

    /// Whether a node of `kind` can be stored here.
    fn accepts(kind: NodeKind) -> bool;

    /// Reads the members of an object tagged `kind`, other than the tag.
    /// Only called with a `kind` this type [accepts](DeserializeNode::accepts).
    fn deserialize_fields<'de, D>(kind: NodeKind, fields: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

impl<T: DeserializeNode> DeserializeNode for Box<T> {
    const EXPECTING: &'static str = T::EXPECTING;

    #[inline]
    fn accepts(kind: NodeKind) -> bool {
        T::accepts(kind)
    }

    fn deserialize_fields<'de, D>(kind: NodeKind, fields: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize_fields(kind, fields).map(Box::new)
    }
}

pub fn deserialize_node<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: DeserializeNode,
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(NodeVisitor(PhantomData))
}

struct NodeVisitor<T>(PhantomData<T>);

impl<'de, T: DeserializeNode> Visitor<'de> for NodeVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} node", T::EXPECTING)
    }

    fn visit_map<A>(self, mut map: A) -> Result<T, A::Error>
    where
        A: MapAccess<'de>,
    {
        let first = match map.next_key::<String>()? {
            Some(key) => key,
            None => return Err(de::Error::missing_field("type")),
        };

        if first == "type" {
            let tag = map.next_value::<String>()?;
            let kind = resolve::<T, A::Error>(&tag)?;
            return T::deserialize_fields(kind, MapAccessDeserializer::new(map));
        }

        // The tag comes later: collect the members until it is known.
        let mut fields = Map::new();
        fields.insert(first, map.next_value()?);
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            fields.insert(key, value);
        }

        let tag = match fields.remove("type") {
            Some(Value::String(tag)) => tag,
            Some(_) => return Err(de::Error::custom("`type` must be a string")),
            None => return Err(de::Error::missing_field("type")),
        };
        let kind = resolve::<T, A::Error>(&tag)?;
        T::deserialize_fields(kind, Value::Object(fields)).map_err(de::Error::custom)
    }
}

fn resolve<T, E>(tag: &str) -> Result<NodeKind, E>
where
    T: DeserializeNode,
    E: de::Error,
{
    let kind: NodeKind = tag.parse().map_err(E::custom)?;
    if T::accepts(kind) {
        Ok(kind)
    } else {
        Err(E::custom(format_args!(
            "`{}` cannot be used as {}",
            kind,
            T::EXPECTING
        )))
    }
}
