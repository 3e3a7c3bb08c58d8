//! `tokio-postgres` bridge for [`Value`].

use super::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, Kind, ToSql, Type, to_sql_checked};

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        // Each arm defers to the inner type's own check, so a value bound to
        // a column of the wrong type fails with `WrongType`.
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            // Narrow to the width the server asked for.
            Value::Int(v) => {
                if *ty == Type::INT2 {
                    i16::try_from(*v)?.to_sql_checked(ty, out)
                } else if *ty == Type::INT4 {
                    i32::try_from(*v)?.to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Float(v) => {
                if *ty == Type::FLOAT4 {
                    (*v as f32).to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => {
                if *ty == Type::TIMESTAMP {
                    v.naive_utc().to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Array(v) => {
                if !matches!(ty.kind(), Kind::Array(_)) {
                    return Err(format!("cannot bind an array to `{ty}`").into());
                }
                v.to_sql_checked(ty, out)
            }
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_writes_nothing() {
        let mut out = BytesMut::new();
        let is_null = Value::Null.to_sql(&Type::INT8, &mut out).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(out.is_empty());
    }

    #[test]
    fn int_narrows_to_int4() {
        let mut out = BytesMut::new();
        Value::Int(42).to_sql(&Type::INT4, &mut out).unwrap();
        assert_eq!(&out[..], &42i32.to_be_bytes());
    }

    #[test]
    fn int_out_of_range_for_int2_fails() {
        let mut out = BytesMut::new();
        assert!(Value::Int(70_000).to_sql(&Type::INT2, &mut out).is_err());
    }

    #[test]
    fn text_bound_to_int4_is_rejected() {
        let mut out = BytesMut::new();
        let res = Value::Text("abcd".into()).to_sql_checked(&Type::INT4, &mut out);
        assert!(res.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn int_bound_to_text_is_rejected() {
        let mut out = BytesMut::new();
        assert!(Value::Int(7).to_sql_checked(&Type::TEXT, &mut out).is_err());
        assert!(Value::Int(7).to_sql_checked(&Type::BYTEA, &mut out).is_err());
    }

    #[test]
    fn bool_bound_to_int8_is_rejected() {
        let mut out = BytesMut::new();
        assert!(Value::Bool(true).to_sql_checked(&Type::INT8, &mut out).is_err());
    }

    #[test]
    fn matching_types_still_bind() {
        let mut out = BytesMut::new();
        Value::Text("abc".into())
            .to_sql_checked(&Type::VARCHAR, &mut out)
            .unwrap();
        assert_eq!(&out[..], b"abc");

        let mut out = BytesMut::new();
        Value::Float(1.5).to_sql_checked(&Type::FLOAT4, &mut out).unwrap();
        assert_eq!(&out[..], &1.5f32.to_be_bytes());
    }

    #[test]
    fn timestamp_binds_to_both_timestamp_types() {
        let ts = Value::Timestamp(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
        let mut out = BytesMut::new();
        assert!(ts.to_sql_checked(&Type::TIMESTAMPTZ, &mut out).is_ok());
        let mut out = BytesMut::new();
        assert!(ts.to_sql_checked(&Type::TIMESTAMP, &mut out).is_ok());
        let mut out = BytesMut::new();
        assert!(ts.to_sql_checked(&Type::DATE, &mut out).is_err());
    }

    #[test]
    fn array_requires_array_type() {
        let mut out = BytesMut::new();
        let labels = Value::from(vec!["a", "b"]);
        assert!(labels.to_sql(&Type::TEXT, &mut out).is_err());
        assert!(labels.to_sql(&Type::TEXT_ARRAY, &mut out).is_ok());
    }
}
