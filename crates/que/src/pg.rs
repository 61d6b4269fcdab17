//! tokio-postgres support (feature `postgres`).
//!
//! PostgreSQL only understands `$n` placeholders, so render with
//! [`ParamStyle::Dollar`](crate::ParamStyle::Dollar) before handing the
//! parameters over:
//!
//! ```ignore
//! let rendered = stmt.render_with(&RenderOptions::new(ParamStyle::Dollar))?;
//! client.execute(&rendered.sql, &rendered.pg_params()?).await?;
//! ```

use crate::error::{QueError, QueResult};
use crate::param::Params;
use crate::statement::Rendered;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => {
                // Narrow to the column width; i64 only encodes INT8.
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
                    let narrowed = *v as f32;
                    if !v.is_nan() && f64::from(narrowed) != *v {
                        return Err(format!("{v} does not fit in FLOAT4 without losing precision").into());
                    }
                    narrowed.to_sql_checked(ty, out)
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
            Value::List(values) => values.to_sql_checked(ty, out),
        }
    }

    // The variant is only known at bind time, so each arm of `to_sql` runs the
    // inner type's own check and reports `WrongType` on a mismatch.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

impl Params {
    /// Positional parameters as references for tokio-postgres.
    pub fn pg_refs(&self) -> QueResult<Vec<&(dyn ToSql + Sync)>> {
        let values = self.as_slice().ok_or(QueError::NamedParams)?;
        Ok(values.iter().map(|v| v as &(dyn ToSql + Sync)).collect())
    }
}

impl Rendered {
    /// Parameters as references for tokio-postgres.
    pub fn pg_params(&self) -> QueResult<Vec<&(dyn ToSql + Sync)>> {
        self.params.pg_refs()
    }
}
