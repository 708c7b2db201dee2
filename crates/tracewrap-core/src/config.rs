//! Settings and scope configuration for call interception
//!
//! `LoggingSettings` is the externally bound shape (hosts deserialize it
//! from whatever configuration layer they use); `ScopeConfig` is the
//! immutable form the interception engine reads. Configuration follows a
//! construct-then-publish pattern: build once during startup, then share
//! by reference with the engine.

use serde::Deserialize;

/// Externally bound settings for method-call logging.
///
/// # Example
///
/// ```
/// use tracewrap_core::config::LoggingSettings;
///
/// let settings: LoggingSettings =
///     serde_json::from_str(r#"{ "base_package": "com.example.app" }"#).unwrap();
/// assert_eq!(settings.base_package.as_deref(), Some("com.example.app"));
/// assert!(settings.enabled);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Base package to apply logging on, e.g. `com.example.myapp`.
    /// When unset, every observed unit is in scope.
    pub base_package: Option<String>,
    /// Master switch for call logging. When false the interceptor
    /// delegates without emitting anything.
    pub enabled: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            base_package: None,
            enabled: true,
        }
    }
}

/// Immutable scope configuration consumed by the interception engine.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    base_package: Option<String>,
    enabled: bool,
}

impl ScopeConfig {
    /// Build a scope config from an optional base package prefix.
    ///
    /// Blank prefixes are treated as absent.
    pub fn new(base_package: Option<String>) -> Self {
        let base_package = base_package.filter(|p| !p.trim().is_empty());
        Self {
            base_package,
            enabled: true,
        }
    }

    /// Build from bound settings, announcing the effective scope once.
    ///
    /// This is the startup path: it logs a warning when no base package
    /// is configured (everything observed will be logged) and an info
    /// line naming the prefix otherwise.
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let config = Self {
            base_package: settings
                .base_package
                .clone()
                .filter(|p| !p.trim().is_empty()),
            enabled: settings.enabled,
        };
        if config.enabled {
            match config.base_package.as_deref() {
                None => {
                    tracing::warn!("No base package provided. Defaulting to log all observed units.");
                }
                Some(prefix) => {
                    tracing::info!("Logging will apply to base package: {}", prefix);
                }
            }
        }
        config
    }

    /// The configured base package prefix, if any.
    pub fn base_package(&self) -> Option<&str> {
        self.base_package.as_deref()
    }

    /// Whether call logging is switched on at all.
    pub fn logging_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_to_enabled_with_no_prefix() {
        let settings = LoggingSettings::default();
        assert!(settings.enabled);
        assert!(settings.base_package.is_none());
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: LoggingSettings = serde_json::from_str(r#"{ "enabled": false }"#).unwrap();
        assert!(!settings.enabled);
        assert!(settings.base_package.is_none());
    }

    #[test]
    fn test_blank_prefix_treated_as_absent() {
        let config = ScopeConfig::new(Some("   ".to_string()));
        assert!(config.base_package().is_none());
    }

    #[test]
    fn test_from_settings_preserves_enabled_flag() {
        let settings = LoggingSettings {
            base_package: Some("com.example".to_string()),
            enabled: false,
        };
        let config = ScopeConfig::from_settings(&settings);
        assert!(!config.logging_enabled());
        assert_eq!(config.base_package(), Some("com.example"));
    }
}
