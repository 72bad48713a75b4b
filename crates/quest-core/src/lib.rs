//! # quest-core
//!
//! Core types, answer checking, and puzzle content for SQL Quest.
//!
//! This crate provides the foundational types shared across all SQL Quest crates:
//! - Cell and row types for query results
//! - Puzzle definitions and the bundled puzzle catalog
//! - The answer checker deciding whether a result set is correct
//! - Difficulty and outcome enums
//! - Cross-cutting error types
//! - CLI response types

pub mod catalog;
pub mod checker;
pub mod enums;
pub mod errors;
pub mod puzzle;
pub mod responses;
pub mod row;
pub mod value;

pub use catalog::Catalog;
pub use puzzle::{ColumnDef, Puzzle, TableSchema};
pub use row::{ResultSet, Row};
pub use value::Cell;
