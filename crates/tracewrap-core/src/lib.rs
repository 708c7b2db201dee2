//! Tracewrap Core - Call interception and diagnostic logging
//!
//! This crate provides the call-side half of tracewrap:
//! - Decorator-style call interception with entry/exit/failure logging
//! - Scope matching against a configured base package prefix
//! - Argument summarization with password/secret redaction
//! - A logging facility with profile-gated initialization and an
//!   in-memory capture layer for deterministic test assertions
//!
//! The query-side half (SQL formatting and query logging) lives in the
//! `tracewrap-sql` crate; the two share no runtime code path.

pub mod config;
pub mod intercept;
pub mod logging_facility;
pub mod scope;
pub mod summarize;

// Re-export commonly used types
pub use config::{LoggingSettings, ScopeConfig};
pub use intercept::{root_cause, CallInterceptor, Failure};
pub use scope::is_in_scope;
pub use summarize::{render_full, summarize};
