//! Lookup of logical fields in untyped remote metadata.
//!
//! Servers report the same field under different names. Every field has an
//! ordered list of candidate keys and the first present, non-null value wins.

use serde_json::{Map, Value};

pub type RawMetadata = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    Timestamp,
    Channel,
    Mime,
    Tags,
}

impl Field {
    pub const fn candidate_keys(self) -> &'static [&'static str] {
        match self {
            Self::Size => &["File-Size", "size"],
            Self::Timestamp => &["TimeStamp", "timestamp"],
            Self::Channel => &["Channel", "channel"],
            Self::Mime => &["File-Mime", "mime"],
            Self::Tags => &["Tags", "tags"],
        }
    }
}

pub fn lookup(metadata: &RawMetadata, field: Field) -> Option<&Value> {
    field
        .candidate_keys()
        .iter()
        .find_map(|key| metadata.get(*key).filter(|v| !v.is_null()))
}

pub fn lookup_str(metadata: &RawMetadata, field: Field) -> Option<&str> {
    lookup(metadata, field).and_then(Value::as_str)
}

/// Reads numbers and numeric strings.
pub fn lookup_number(metadata: &RawMetadata, field: Field) -> Option<f64> {
    match lookup(metadata, field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
    .filter(|n| n.is_finite())
}
