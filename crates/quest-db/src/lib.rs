//! # quest-db
//!
//! The query engine behind each puzzle.
//!
//! Every puzzle gets its own libSQL `:memory:` database: tables are created
//! from the puzzle schema, seeded from its raw insert statements, and then
//! learner queries run against it. Dropping a `QuestDb` discards all of its
//! state, so nothing leaks from one puzzle to the next.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29).

pub mod error;
pub mod helpers;
mod query;
mod seed;

use error::DatabaseError;
use libsql::Builder;
use quest_core::Puzzle;

/// Handle to one isolated in-memory engine instance.
pub struct QuestDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl QuestDb {
    /// Open a fresh, empty in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if libSQL cannot create the database.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        let db = Builder::new_local(":memory:").build().await?;
        let conn = db.connect()?;
        tracing::debug!("opened in-memory engine");
        Ok(Self { db, conn })
    }

    /// Open a fresh database holding `puzzle`'s tables and seed rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Schema` or `DatabaseError::Seed` if the puzzle
    /// content is rejected by the engine.
    pub async fn for_puzzle(puzzle: &Puzzle) -> Result<Self, DatabaseError> {
        let db = Self::open_in_memory().await?;
        db.apply_schema(&puzzle.table_schema).await?;
        db.seed(puzzle.id, &puzzle.initial_data).await?;
        tracing::debug!(
            puzzle_id = puzzle.id,
            tables = puzzle.table_schema.len(),
            "engine ready"
        );
        Ok(db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::Catalog;

    async fn table_exists(db: &QuestDb, table: &str) -> bool {
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
            )
            .await
            .unwrap();
        rows.next().await.unwrap().is_some()
    }

    #[tokio::test]
    async fn open_in_memory_starts_empty() {
        let db = QuestDb::open_in_memory().await.unwrap();
        assert!(!table_exists(&db, "adventurers").await);
    }

    #[tokio::test]
    async fn for_puzzle_creates_every_table() {
        let catalog = Catalog::builtin().unwrap();
        let puzzle = catalog.by_id(5).unwrap();
        let db = QuestDb::for_puzzle(puzzle).await.unwrap();
        assert!(table_exists(&db, "adventurers").await);
        assert!(table_exists(&db, "items").await);
    }

    #[tokio::test]
    async fn every_builtin_puzzle_loads() {
        let catalog = Catalog::builtin().unwrap();
        for puzzle in catalog.iter() {
            let db = QuestDb::for_puzzle(puzzle).await;
            assert!(db.is_ok(), "puzzle {} failed to load: {:?}", puzzle.id, db.err());
        }
    }
}
