//! Query logging engine
//!
//! Consumes one `QueryEvent` per completed statement or batch and emits
//! a single line describing the executed SQL, the result shape, and the
//! elapsed time. Strictly observational: it never fails the query it is
//! describing, including when cursor metadata cannot be read.

use crate::event::{QueryEvent, QueryResult};
use crate::format::format_sql;
use crate::policy::{SqlLoggingPolicy, SqlLoggingSettings};

/// Stateless engine invoked in-line by a proxied connection after each
/// statement or batch completes.
#[derive(Debug, Clone)]
pub struct QueryLogger {
    policy: SqlLoggingPolicy,
}

impl QueryLogger {
    pub fn new(policy: SqlLoggingPolicy) -> Self {
        Self { policy }
    }

    /// Build the logger from bound settings, deriving the policy from
    /// the active profile list and announcing the wrap at info.
    pub fn from_settings(settings: &SqlLoggingSettings, active_profiles: &str) -> Self {
        tracing::info!(
            "Initializing query logging for SQL tracing (profiles: {})",
            active_profiles
        );
        Self::new(SqlLoggingPolicy::from_settings(settings, active_profiles))
    }

    /// Log one completed query or batch.
    pub fn after_query(&self, event: &QueryEvent) {
        let raw_sql = event.raw_sql();
        let query = format_sql(
            &raw_sql,
            &event.parameter_sets,
            self.policy.parameter_inlining_enabled(),
        );

        let batch_suffix = if event.batch_size > 1 {
            format!(" batchSize={}", event.batch_size)
        } else {
            String::new()
        };

        match &event.result {
            QueryResult::Cursor(cursor) => {
                // Metadata reads may fail after the fact; degrade to 0.
                let cols = cursor.column_count().unwrap_or(0);
                tracing::info!(
                    "Query: {} | cols={}{} time={}ms",
                    query,
                    cols,
                    batch_suffix,
                    event.elapsed_millis
                );
            }
            result => {
                let rows_affected = extract_row_count(result, event.batch_size);
                tracing::info!(
                    "Query: {} | rowsAffected={}{} time={}ms",
                    query,
                    rows_affected,
                    batch_suffix,
                    event.elapsed_millis
                );
            }
        }
    }
}

/// Number of rows affected by the executed query.
///
/// A known batch size is authoritative for per-statement count arrays;
/// without one, only the positive counts are summed (drivers report
/// negative sentinel values for "success, count unknown").
fn extract_row_count(result: &QueryResult, batch_size: usize) -> i64 {
    match result {
        QueryResult::RowCounts(counts) => {
            if batch_size > 0 {
                batch_size as i64
            } else {
                counts.iter().filter(|count| **count > 0).sum()
            }
        }
        QueryResult::RowCount(count) => *count,
        QueryResult::Cursor(_) => 0,
    }
}
