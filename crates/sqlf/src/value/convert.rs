//! `From` conversions into [`Value`].
//!
//! `Vec<u8>`/`&[u8]` are byte strings (one slot), `Vec<char>` is text; every
//! other slice, vector or array of convertible items becomes a [`Value::List`].

use super::Value;
use crate::builder::Builder;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Types that become one element of a [`Value::List`].
///
/// Implemented for every convertible type except `u8` and `char`, whose
/// sequences are byte strings and text respectively.
pub trait IntoListItem: Into<Value> {}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        }
        impl IntoListItem for $t {}
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(v as u64)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl IntoListItem for u16 {}
impl IntoListItem for u32 {}
impl IntoListItem for u64 {}
impl IntoListItem for usize {}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<char>> for Value {
    fn from(v: Vec<char>) -> Self {
        Value::Text(v.into_iter().collect())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<Builder> for Value {
    fn from(v: Builder) -> Self {
        Value::Builder(Box::new(v))
    }
}

impl From<&Builder> for Value {
    fn from(v: &Builder) -> Self {
        Value::Builder(Box::new(v.clone()))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: IntoListItem> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: IntoListItem + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: IntoListItem, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl IntoListItem for Value {}
impl IntoListItem for bool {}
impl IntoListItem for f32 {}
impl IntoListItem for f64 {}
impl IntoListItem for &str {}
impl IntoListItem for String {}
impl IntoListItem for &String {}
impl IntoListItem for Uuid {}
impl IntoListItem for DateTime<Utc> {}
impl IntoListItem for serde_json::Value {}
impl IntoListItem for Builder {}
impl IntoListItem for &Builder {}
impl IntoListItem for Vec<u8> {}
impl IntoListItem for Vec<char> {}
impl<T: Into<Value>> IntoListItem for Option<T> {}
impl<T: IntoListItem> IntoListItem for Vec<T> {}
impl<T: IntoListItem, const N: usize> IntoListItem for [T; N] {}
