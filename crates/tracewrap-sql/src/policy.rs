//! SQL logging policy
//!
//! Parameter inlining puts live data into log output, so it is only
//! honored in recognized non-production profiles (`dev`, `local`,
//! case-insensitive). The policy is derived once when the connection
//! wrapper is built and is immutable afterwards.

use serde::Deserialize;

/// Externally bound settings for SQL query logging.
///
/// Both flags default to off; hosts opt in explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SqlLoggingSettings {
    /// Enables or disables SQL query logging altogether.
    pub enabled: bool,
    /// Requests inline rendering of bound parameter values.
    pub show_parameters: bool,
}

/// Immutable policy derived from settings plus the active profiles.
#[derive(Debug, Clone, Copy)]
pub struct SqlLoggingPolicy {
    parameter_inlining_enabled: bool,
}

impl SqlLoggingPolicy {
    /// Derive the policy from bound settings and the active profile list
    /// (comma separated, as hosts usually carry it).
    ///
    /// An unsafe request is never honored silently: requesting
    /// parameters outside `dev`/`local` forces inlining off and warns.
    /// SQL logging being active outside a safe profile is itself worth a
    /// warning, whatever the inlining decision.
    ///
    /// # Example
    ///
    /// ```
    /// use tracewrap_sql::policy::{SqlLoggingPolicy, SqlLoggingSettings};
    ///
    /// let settings = SqlLoggingSettings { enabled: true, show_parameters: true };
    /// let policy = SqlLoggingPolicy::from_settings(&settings, "prod");
    /// assert!(!policy.parameter_inlining_enabled());
    /// ```
    pub fn from_settings(settings: &SqlLoggingSettings, active_profiles: &str) -> Self {
        let is_dev_or_local = active_profiles
            .split(',')
            .map(str::trim)
            .any(|p| p.eq_ignore_ascii_case("dev") || p.eq_ignore_ascii_case("local"));

        let mut show_parameters = settings.show_parameters;
        if !is_dev_or_local {
            if show_parameters {
                tracing::warn!(
                    "Parameter logging is ENABLED in non-dev environment [{}]; ignoring inline parameters for safety.",
                    active_profiles
                );
                show_parameters = false;
            }
            tracing::warn!(
                "SQL logging is ENABLED in non-dev environment [{}]; consider disabling before production.",
                active_profiles
            );
        }

        Self {
            parameter_inlining_enabled: is_dev_or_local && show_parameters,
        }
    }

    pub fn parameter_inlining_enabled(&self) -> bool {
        self.parameter_inlining_enabled
    }
}
