//! Result rows: ordered column-name → cell mappings.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Cell;

/// Rows returned by executing one query, in engine order.
///
/// Compared as an unordered collection by the answer checker.
pub type ResultSet = Vec<Row>;

/// One result row.
///
/// Keeps columns in the order the engine reported them. Serialized as a map
/// (`{"name": "アリア", "level": 5}`) with that order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Cell)>,
}

impl Row {
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Set `column` to `cell`.
    ///
    /// A repeated column name (e.g. `SELECT a.id, b.id`) overwrites the earlier
    /// value but keeps the earlier position.
    pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<Cell>) {
        let column = column.into();
        let cell = cell.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = cell,
            None => self.cells.push((column, cell)),
        }
    }

    /// Builder form of [`Row::insert`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.insert(column, cell);
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(name, cell)| (name.as_str(), cell))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<Cell>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, cell) in iter {
            row.insert(column, cell);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, cell) in &self.cells {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
                let mut row = Row::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, cell)) = access.next_entry::<String, Cell>()? {
                    row.insert(name, cell);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicate_column_overwrites_in_place() {
        let mut row = Row::new();
        row.insert("id", 1);
        row.insert("name", "アリア");
        row.insert("id", 7);

        assert_eq!(row.len(), 2);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(row.get("id"), Some(&Cell::Integer(7)));
    }

    #[test]
    fn serializes_in_column_order() {
        let row = Row::new().with("quest_name", "魔王討伐").with("adventurer_id", 2);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"quest_name":"魔王討伐","adventurer_id":2}"#);
    }

    #[test]
    fn deserializes_from_json_map() {
        let row: Row = serde_json::from_str(r#"{"class":"戦士","avg_level":5.5}"#).unwrap();
        assert_eq!(row.get("class"), Some(&Cell::Text("戦士".into())));
        assert_eq!(row.get("avg_level"), Some(&Cell::Real(5.5)));
        assert!(!row.contains("level"));
    }

    #[test]
    fn collects_from_pairs() {
        let row: Row = [("a", Cell::Integer(1)), ("b", Cell::Null)].into_iter().collect();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("b"), Some(&Cell::Null));
    }
}
