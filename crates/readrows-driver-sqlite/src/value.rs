use readrows_core::Value;
use rusqlite::types::ValueRef;

/// Converts a SQLite value within a row to a readrows value.
///
/// SQLite has no boolean or date/time storage class; those arrive as
/// integers or text and are interpreted by the field's `Primitive` impl.
pub(crate) fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(value) => Value::I64(value),
        ValueRef::Real(value) => Value::F64(value),
        ValueRef::Text(text) => match std::str::from_utf8(text) {
            Ok(text) => Value::String(text.to_owned()),
            Err(_) => Value::Bytes(text.to_vec()),
        },
        ValueRef::Blob(value) => Value::Bytes(value.to_vec()),
    }
}
