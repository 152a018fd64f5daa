use super::*;
use crate::{args, format};
use bytes::BytesMut;
use tokio_postgres::types::{IsNull, ToSql, Type};

#[test]
fn scalars_count_one() {
    for v in [
        Value::Null,
        Value::from(true),
        Value::from(-3_i8),
        Value::from(7_u64),
        Value::from(1.5_f64),
        Value::from("x"),
        Value::from(b"bytes".as_slice()),
        Value::from(format("%p", args![1])),
    ] {
        assert_eq!(v.count(), 1, "{v:?}");
    }
}

#[test]
fn lists_count_their_leaves() {
    assert_eq!(Value::from(Vec::<i32>::new()).count(), 0);
    assert_eq!(Value::from(vec![1, 2, 3]).count(), 3);
    assert_eq!(
        Value::List(args![1, "s", vec![2, 3], Value::List(args![4, "t", vec![5_i64, 6]])]).count(),
        8
    );
    assert_eq!(count_all(&args![1, vec![2, 3]]), 3);
}

#[test]
fn byte_and_char_sequences_are_scalars() {
    assert_eq!(Value::from(vec![1_u8, 2, 3]), Value::Bytes(vec![1, 2, 3]));
    assert_eq!(Value::from(vec!['a', 'b']), Value::Text("ab".to_string()));
    assert_eq!(
        Value::from(vec![1_u16, 2]),
        Value::List(vec![Value::UInt(1), Value::UInt(2)])
    );
}

#[test]
fn option_maps_none_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
}

fn display(v: impl Into<Value>) -> String {
    v.into().display().unwrap()
}

#[test]
fn display_matches_literal_rules() {
    assert_eq!(display("string"), "string");
    assert_eq!(display(format("string", args![])), "string");
    assert_eq!(display(123_i8), "123");
    assert_eq!(display(-123_i16), "-123");
    assert_eq!(display(123456_i32), "123456");
    assert_eq!(display(123456_i64), "123456");
    assert_eq!(display(123456_u32), "123456");
    assert_eq!(display(123_u8), "123");
    assert_eq!(display(u64::MAX), "18446744073709551615");
    assert_eq!(display(b"string".as_slice()), "string");
    assert_eq!(display(vec!['s', 't', 'r']), "str");
    assert_eq!(display(vec![1, 2, 3, 4, 5, 6]), "1, 2, 3, 4, 5, 6");
    assert_eq!(display(vec![1_i64, 2, 3]), "1, 2, 3");
    assert_eq!(display(vec!["s", "t", "r"]), "s, t, r");
    assert_eq!(
        display(Value::List(args![1, "s", vec![2, 3], Value::List(args![4, "t", vec![5_i64, 6]])])),
        "1, s, 2, 3, 4, t, 5, 6"
    );
    assert_eq!(display(Value::Null), "");
    assert_eq!(display(Vec::<i32>::new()), "");
}

#[test]
fn display_formats_floats_with_six_decimals() {
    assert_eq!(display(1.5_f64), "1.500000");
    assert_eq!(display(-0.25_f32), "-0.250000");
    assert_eq!(display(2.0_f64 / 3.0), "0.666667");
}

#[test]
fn display_of_other_scalars() {
    assert_eq!(display(true), "true");
    assert_eq!(
        display(uuid::Uuid::nil()),
        "00000000-0000-0000-0000-000000000000"
    );
    assert_eq!(display(serde_json::json!({"a": 1})), r#"{"a":1}"#);
    let ts = DateTime::from_timestamp(0, 0).unwrap();
    assert_eq!(display(ts), "1970-01-01 00:00:00 UTC");
}

#[test]
fn display_of_invalid_utf8_bytes_is_lossy() {
    assert_eq!(display(b"ok\xffok".as_slice()), "ok\u{FFFD}ok");
}

#[test]
fn display_numbers_nested_builders_continuously() {
    let v = Value::List(args![format("a = %p", [1]), format("b = %p", [2])]);
    assert_eq!(v.display().unwrap(), "a = $1, b = $2");
    assert_eq!(format("%s", args![v.clone()]).to_sql().unwrap(), v.display().unwrap());
}

#[test]
fn display_of_bare_builder_uses_its_own_driver() {
    let b = format("a = %p AND b = %p", args![1, 2]).with_driver(crate::MarkDriver::mysql());
    assert_eq!(display(b), "a = ? AND b = ?");
}

#[test]
fn contains_builder_looks_through_lists() {
    let b = format("%p", args![1]);
    assert!(Value::from(&b).contains_builder());
    assert!(Value::List(args![1, Value::List(args![b])]).contains_builder());
    assert!(!Value::from(vec![1, 2]).contains_builder());
}

/// Encode `v` for `ty`; the flag is true when the value binds as SQL NULL.
fn encode(v: &Value, ty: &Type) -> Result<(bool, BytesMut), String> {
    let mut out = BytesMut::new();
    v.to_sql_checked(ty, &mut out)
        .map(|is_null| (matches!(is_null, IsNull::Yes), out))
        .map_err(|e| e.to_string())
}

#[test]
fn integers_narrow_to_column_type() {
    let (_, buf) = encode(&Value::Int(7), &Type::INT2).unwrap();
    assert_eq!(buf.len(), 2);
    let (_, buf) = encode(&Value::Int(7), &Type::INT4).unwrap();
    assert_eq!(buf.len(), 4);
    let (_, buf) = encode(&Value::UInt(7), &Type::INT8).unwrap();
    assert_eq!(buf.len(), 8);
    let (_, buf) = encode(&Value::Int(7), &Type::FLOAT8).unwrap();
    assert_eq!(buf.len(), 8);
}

#[test]
fn out_of_range_integers_are_rejected() {
    let err = encode(&Value::Int(70_000), &Type::INT2).unwrap_err();
    assert!(err.contains("out of range"), "{err}");
    assert!(encode(&Value::UInt(u64::MAX), &Type::INT8).is_err());
}

#[test]
fn null_binds_for_any_type() {
    let (is_null, buf) = encode(&Value::Null, &Type::TEXT).unwrap();
    assert!(is_null);
    assert!(buf.is_empty());
}

#[test]
fn text_and_bytes_encode_raw() {
    let (_, buf) = encode(&Value::from("Tom"), &Type::TEXT).unwrap();
    assert_eq!(&buf[..], b"Tom");
    let (_, buf) = encode(&Value::from(b"\x00\x01".as_slice()), &Type::BYTEA).unwrap();
    assert_eq!(&buf[..], b"\x00\x01");
    assert!(encode(&Value::from("Tom"), &Type::INT4).is_err());
}

#[test]
fn lists_and_builders_cannot_be_bound_directly() {
    assert!(encode(&Value::from(vec![1, 2]), &Type::INT4).is_err());
    assert!(encode(&Value::from(format("%p", args![1])), &Type::INT4).is_err());
}
