//! `tokio-postgres` parameter encoding for [`Value`].
//!
//! Numbers are narrowed (or widened) to the parameter type Postgres inferred
//! for the placeholder, so `Value::Int` binds to `int2`, `int4`, `int8`, `oid`
//! and float columns alike.

use super::Value;
use crate::error::FormatError;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

type BoxError = Box<dyn Error + Sync + Send>;

fn out_of_range(n: impl std::fmt::Display, ty: &Type) -> BoxError {
    FormatError::unbindable(format!("{n} is out of range for type {ty}")).into()
}

fn int_to_sql(n: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(n)
            .map_err(|_| out_of_range(n, ty))?
            .to_sql(ty, out),
        Type::INT4 => i32::try_from(n)
            .map_err(|_| out_of_range(n, ty))?
            .to_sql(ty, out),
        Type::OID => u32::try_from(n)
            .map_err(|_| out_of_range(n, ty))?
            .to_sql(ty, out),
        Type::FLOAT4 => (n as f32).to_sql(ty, out),
        Type::FLOAT8 => (n as f64).to_sql(ty, out),
        _ => n.to_sql_checked(ty, out),
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => b.to_sql_checked(ty, out),
            Value::Int(n) => int_to_sql(*n, ty, out),
            Value::UInt(n) => {
                let n = i64::try_from(*n).map_err(|_| out_of_range(n, ty))?;
                int_to_sql(n, ty, out)
            }
            Value::F32(f) => match *ty {
                Type::FLOAT8 => (*f as f64).to_sql(ty, out),
                _ => f.to_sql_checked(ty, out),
            },
            Value::F64(f) => match *ty {
                Type::FLOAT4 => (*f as f32).to_sql(ty, out),
                _ => f.to_sql_checked(ty, out),
            },
            Value::Text(s) => s.as_str().to_sql_checked(ty, out),
            Value::Bytes(b) => b.as_slice().to_sql_checked(ty, out),
            Value::Uuid(u) => u.to_sql_checked(ty, out),
            Value::Timestamp(ts) => match *ty {
                Type::TIMESTAMP => ts.naive_utc().to_sql(ty, out),
                _ => ts.to_sql_checked(ty, out),
            },
            Value::Json(j) => j.to_sql_checked(ty, out),
            Value::List(_) => {
                Err(FormatError::unbindable("a list must be flattened before binding").into())
            }
            Value::Builder(_) => Err(FormatError::unbindable(
                "a nested builder must be flattened before binding",
            )
            .into()),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}
