//! Argument values accepted by format templates.
//!
//! [`Value`] is a closed sum over everything a verb can consume: scalars,
//! (possibly nested, possibly mixed) lists, and nested [`Builder`]s. Every
//! recursive operation (slot counting, literal text, parameter flattening) is
//! an exhaustive match over it.

mod convert;
mod pg;

#[cfg(test)]
mod tests;

pub use convert::IntoListItem;

use crate::builder::{Builder, render};
use crate::driver::Registry;
use crate::error::FormatResult;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use uuid::Uuid;

/// A template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value: binds NULL, renders as empty text.
    Null,
    Bool(bool),
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    UInt(u64),
    F32(f32),
    F64(f64),
    Text(String),
    /// Raw bytes: one slot when bound, rendered as text when literal.
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
    /// Ordered list; each element may itself be a list or a builder.
    List(Vec<Value>),
    /// Nested fragment whose text and params are spliced into the parent.
    Builder(Box<Builder>),
}

impl Value {
    /// Number of placeholder slots this value occupies.
    ///
    /// Lists count the sum of their elements (recursively); every other value
    /// counts as one.
    pub fn count(&self) -> usize {
        match self {
            Value::List(items) => count_all(items),
            _ => 1,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether a nested builder appears anywhere inside this value.
    pub fn contains_builder(&self) -> bool {
        match self {
            Value::Builder(_) => true,
            Value::List(items) => items.iter().any(Value::contains_builder),
            _ => false,
        }
    }

    /// Literal text for this value.
    ///
    /// A bare builder renders exactly as its own [`Builder::to_sql`]. Builders
    /// nested in a list share one fresh instance of the global default driver,
    /// so their numbering is one continuous sequence.
    pub fn display(&self) -> FormatResult<String> {
        if let Value::Builder(b) = self {
            return b.to_sql();
        }
        let mut driver = Registry::global().resolve_default();
        let mut out = String::new();
        render::write_literal(self, &mut *driver, &mut out)?;
        Ok(out)
    }

    /// Append the literal text of a scalar. Lists and builders are handled by
    /// the renderer, which owns the driver they need.
    pub(crate) fn write_scalar(&self, out: &mut String) {
        match self {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Value::UInt(n) => {
                let _ = write!(out, "{n}");
            }
            Value::F32(f) => {
                let _ = write!(out, "{f:.6}");
            }
            Value::F64(f) => {
                let _ = write!(out, "{f:.6}");
            }
            Value::Text(s) => out.push_str(s),
            Value::Bytes(b) => out.push_str(&String::from_utf8_lossy(b)),
            Value::Uuid(u) => {
                let _ = write!(out, "{}", u.hyphenated());
            }
            Value::Timestamp(ts) => {
                let _ = write!(out, "{ts}");
            }
            Value::Json(j) => {
                let _ = write!(out, "{j}");
            }
            Value::List(_) | Value::Builder(_) => {}
        }
    }
}

/// Slot count of an argument run (the operand of a spread verb).
pub fn count_all(values: &[Value]) -> usize {
    values.iter().map(Value::count).sum()
}
