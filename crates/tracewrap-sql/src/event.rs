//! Query event model
//!
//! A `QueryEvent` is handed to the logging engine by a proxied
//! connection immediately after a statement or batch finishes. It is
//! consumed once and never retained.

use serde_json::Value;
use thiserror::Error;

/// One parameter binding: placeholder position and bound value.
pub type ParamBinding = (usize, Value);

/// The parameter bindings of a single executed statement.
pub type ParamSet = Vec<ParamBinding>;

/// Failure reading metadata from a result cursor.
///
/// Always recovered locally by the logging engine; it degrades the
/// column count to zero and never reaches the caller.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("result cursor metadata unavailable: {0}")]
    MetadataUnavailable(String),
}

/// Minimal view of a result cursor: all the logging engine ever reads
/// is the column count.
pub trait QueryCursor {
    fn column_count(&self) -> Result<usize, CursorError>;
}

/// Shape of a completed query's result.
pub enum QueryResult {
    /// Single update count
    RowCount(i64),
    /// Per-statement update counts from a batch
    RowCounts(Vec<i64>),
    /// A result cursor (SELECT-style)
    Cursor(Box<dyn QueryCursor>),
}

/// One completed query or batch.
pub struct QueryEvent {
    /// Raw SQL text per executed statement, in execution order.
    pub statements: Vec<String>,
    /// One parameter set per executed statement in the batch.
    pub parameter_sets: Vec<ParamSet>,
    /// Wall-clock execution time in milliseconds.
    pub elapsed_millis: u64,
    /// Number of statements in the batch; 0 or 1 for non-batched runs.
    pub batch_size: usize,
    /// Result shape.
    pub result: QueryResult,
}

impl QueryEvent {
    /// All statement texts joined into one raw SQL string.
    pub fn raw_sql(&self) -> String {
        self.statements.join(" ; ")
    }
}
