//! Conversions from libSQL values to result cells.
//!
//! `SQLite` storage classes map one-to-one onto `Cell` tags, so the answer
//! checker sees exactly what the engine produced.

use quest_core::Cell;

#[must_use]
pub fn value_to_cell(value: libsql::Value) -> Cell {
    match value {
        libsql::Value::Null => Cell::Null,
        libsql::Value::Integer(i) => Cell::Integer(i),
        libsql::Value::Real(r) => Cell::Real(r),
        libsql::Value::Text(s) => Cell::Text(s),
        libsql::Value::Blob(b) => Cell::Blob(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_classes_keep_their_tag() {
        assert_eq!(value_to_cell(libsql::Value::Null), Cell::Null);
        assert_eq!(value_to_cell(libsql::Value::Integer(8)), Cell::Integer(8));
        assert_eq!(value_to_cell(libsql::Value::Real(7.5)), Cell::Real(7.5));
        assert_eq!(
            value_to_cell(libsql::Value::Text("剣".into())),
            Cell::Text("剣".into())
        );
        assert_eq!(
            value_to_cell(libsql::Value::Blob(vec![1, 2])),
            Cell::Blob(vec![1, 2])
        );
    }
}
