//! Schema creation and seeding for a puzzle's engine.
//!
//! Tables are created in catalog order, then the seed statements run as one
//! batch. Both steps are reported with the offending table or puzzle id.

use quest_core::TableSchema;

use crate::QuestDb;
use crate::error::DatabaseError;

impl QuestDb {
    /// Create every table in `tables`, in order.
    pub(crate) async fn apply_schema(&self, tables: &[TableSchema]) -> Result<(), DatabaseError> {
        for table in tables {
            let sql = table.create_statement();
            tracing::trace!(table = %table.name, %sql, "creating table");
            self.conn
                .execute(&sql, ())
                .await
                .map_err(|e| DatabaseError::Schema {
                    table: table.name.clone(),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Run the puzzle's raw insert statements.
    pub(crate) async fn seed(&self, puzzle_id: u32, initial_data: &str) -> Result<(), DatabaseError> {
        if initial_data.trim().is_empty() {
            return Ok(());
        }
        self.conn
            .execute_batch(initial_data)
            .await
            .map_err(|e| DatabaseError::Seed {
                puzzle_id,
                message: e.to_string(),
            })?;
        Ok(())
    }
}
