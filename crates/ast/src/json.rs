//! JSON form of the tree.
//!
//! Each node is an object whose `"type"` member is its kind name
//! (`"ArrayBinding"`), followed by its fields in camelCase. Absent optional
//! fields and holes are `null`. When reading, the `"type"` member selects the
//! variant of every role, and a node whose `"type"` names another kind is
//! rejected.

use crate::Program;
use serde::{de::DeserializeOwned, Serialize};
use tracing::trace;

pub fn from_str<T>(src: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    trace!(len = src.len(), "reading ast from json");
    serde_json::from_str(src)
}

pub fn to_string<T>(node: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(node)
}

pub fn to_string_pretty<T>(node: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(node)
}

pub fn parse_program(src: &str) -> serde_json::Result<Program> {
    from_str(src)
}
