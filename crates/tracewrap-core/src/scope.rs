//! Scope matching for call interception
//!
//! Decides which call targets are eligible for logging. The match is a
//! plain string prefix check, not package-segment aware: a prefix of
//! `com.foo` also matches `com.foobar.X`. That behavior is part of the
//! observable contract and is pinned by tests rather than "fixed".

use crate::config::ScopeConfig;

/// Check whether a call target is in scope for logging.
///
/// With no configured base package everything delivered by the dispatcher
/// is in scope; the dispatcher is responsible for only delivering events
/// for recognized units, not arbitrary code.
///
/// # Example
///
/// ```
/// use tracewrap_core::config::ScopeConfig;
/// use tracewrap_core::scope::is_in_scope;
///
/// let config = ScopeConfig::new(Some("com.app.service".to_string()));
/// assert!(is_in_scope("com.app.service.UserService", &config));
/// assert!(!is_in_scope("com.other.Widget", &config));
/// ```
pub fn is_in_scope(target_type: &str, config: &ScopeConfig) -> bool {
    match config.base_package() {
        None => true,
        Some(prefix) => target_type.starts_with(prefix),
    }
}
