//! Row to [`Record`] conversion.

use crate::client::Record;
use crate::error::{SqlError, SqlResult};
use serde_json::Value;
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, Type};

/// Convert every column of `row` into a JSON value keyed by column name.
///
/// SQL NULL becomes `Value::Null`. Column types without a mapping below
/// (e.g. `numeric`, arrays) produce [`SqlError::Decode`]; cast them in the
/// SELECT list (`price::float8`, `tags::text`) to read them.
pub fn row_to_record(row: &Row) -> SqlResult<Record> {
    let mut record = Record::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let value = column_value(row, idx, column.type_())
            .map_err(|message| SqlError::decode(column.name(), message))?;
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

fn get<'a, T: FromSql<'a>>(row: &'a Row, idx: usize) -> Result<Option<T>, String> {
    row.try_get::<_, Option<T>>(idx).map_err(|e| e.to_string())
}

fn column_value(row: &Row, idx: usize, ty: &Type) -> Result<Value, String> {
    let value = if *ty == Type::BOOL {
        get::<bool>(row, idx)?.map(Value::from)
    } else if *ty == Type::INT2 {
        get::<i16>(row, idx)?.map(Value::from)
    } else if *ty == Type::INT4 {
        get::<i32>(row, idx)?.map(Value::from)
    } else if *ty == Type::INT8 {
        get::<i64>(row, idx)?.map(Value::from)
    } else if *ty == Type::OID {
        get::<u32>(row, idx)?.map(Value::from)
    } else if *ty == Type::FLOAT4 {
        get::<f32>(row, idx)?.map(Value::from)
    } else if *ty == Type::FLOAT8 {
        get::<f64>(row, idx)?.map(Value::from)
    } else if [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME].contains(ty) {
        get::<String>(row, idx)?.map(Value::from)
    } else if *ty == Type::JSON || *ty == Type::JSONB {
        get::<Value>(row, idx)?
    } else if *ty == Type::UUID {
        get::<uuid::Uuid>(row, idx)?.map(|u| Value::from(u.to_string()))
    } else if *ty == Type::TIMESTAMP {
        get::<chrono::NaiveDateTime>(row, idx)?
            .map(|ts| Value::from(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
    } else if *ty == Type::TIMESTAMPTZ {
        get::<chrono::DateTime<chrono::Utc>>(row, idx)?.map(|ts| Value::from(ts.to_rfc3339()))
    } else if *ty == Type::DATE {
        get::<chrono::NaiveDate>(row, idx)?.map(|d| Value::from(d.to_string()))
    } else {
        return Err(format!("unsupported column type '{}'", ty.name()));
    };
    Ok(value.unwrap_or(Value::Null))
}
