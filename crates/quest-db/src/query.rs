//! Running learner queries.

use quest_core::{ResultSet, Row};

use crate::QuestDb;
use crate::error::DatabaseError;
use crate::helpers::value_to_cell;

impl QuestDb {
    /// Execute `sql` and collect every row it returns.
    ///
    /// Rows keep the engine's column order. Statements that return no columns
    /// (e.g. `CREATE TABLE`) yield an empty result set. The prepared statement
    /// is released before returning, on success and on failure.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` for a query that is blank or holds only
    /// comments, or anything the engine
    /// rejects (syntax errors, unknown tables or columns).
    pub async fn run_query(&self, sql: &str) -> Result<ResultSet, DatabaseError> {
        let sql = sql.trim();
        if is_blank(sql) {
            return Err(DatabaseError::Query("empty query".into()));
        }
        tracing::debug!(%sql, "running query");

        let stmt = self
            .conn
            .prepare(sql)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;
        let mut rows = stmt
            .query(())
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        let columns: Vec<String> = (0..rows.column_count())
            .map(|i| rows.column_name(i).unwrap_or_default().to_string())
            .collect();

        let mut result = Vec::new();
        loop {
            let next = rows
                .next()
                .await
                .map_err(|e| DatabaseError::Query(e.to_string()))?;
            let Some(raw) = next else { break };

            let mut row = Row::with_capacity(columns.len());
            for (idx, name) in (0..).zip(&columns) {
                let value = raw
                    .get_value(idx)
                    .map_err(|e| DatabaseError::Query(e.to_string()))?;
                row.insert(name.as_str(), value_to_cell(value));
            }
            result.push(row);
        }

        drop(rows);
        drop(stmt);
        tracing::debug!(rows = result.len(), "query finished");
        Ok(result)
    }
}

/// True when `sql` holds nothing but whitespace, comments and semicolons.
fn is_blank(sql: &str) -> bool {
    let mut rest = sql;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        if let Some(comment) = rest.strip_prefix("--") {
            rest = comment.split_once('\n').map_or("", |(_, tail)| tail);
        } else if let Some(comment) = rest.strip_prefix("/*") {
            rest = comment.split_once("*/").map_or("", |(_, tail)| tail);
        } else {
            return rest.is_empty();
        }
    }
}
