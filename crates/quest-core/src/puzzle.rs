use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;
use crate::row::Row;

/// One challenge: schema, seed data, question, expected answer, hint, explanation.
///
/// `id` is the stable identity used to track solved puzzles; it is independent
/// of the puzzle's position in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Puzzle {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub table_schema: Vec<TableSchema>,
    /// Raw seed statements executed after the tables are created.
    pub initial_data: String,
    pub question: String,
    /// Compared as a set; row order is irrelevant.
    pub expected_result: Vec<Row>,
    pub hint: String,
    pub explanation: String,
}

/// A table definition shown to the learner and used to build the engine schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub sql_type: String,
}

impl TableSchema {
    /// `CREATE TABLE <name> (<col> <type>, ...)`, column order preserved.
    #[must_use]
    pub fn create_statement(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|col| format!("{} {}", col.name, col.sql_type))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE {} ({columns})", self.name)
    }
}

impl ColumnDef {
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}
