//! Tracewrap SQL - Query logging for proxied database connections
//!
//! This crate provides the query-side half of tracewrap:
//! - A parameter-inlining SQL formatter (including batched INSERT
//!   reconstruction)
//! - A profile-gated logging policy that refuses to inline parameters
//!   outside recognized non-production profiles
//! - A query logging engine that renders one line per completed
//!   statement or batch
//!
//! The call-side half lives in `tracewrap-core`; the two subsystems
//! share a design philosophy but no runtime code path.

pub mod event;
pub mod format;
pub mod logger;
pub mod policy;

// Re-export commonly used types
pub use event::{CursorError, QueryCursor, QueryEvent, QueryResult};
pub use format::{format_sql, normalize};
pub use logger::QueryLogger;
pub use policy::{SqlLoggingPolicy, SqlLoggingSettings};
