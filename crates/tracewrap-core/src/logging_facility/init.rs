//! Subscriber initialization
//!
//! One-shot setup of the global tracing subscriber for hosts embedding
//! the interception engine. Tests never come through here; they install
//! the in-memory capture layer via `init_test_capture` instead.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Output profile for the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, debug level by default
    Development,
    /// JSON lines, info level by default
    Production,
}

impl Profile {
    fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "tracewrap=debug",
            Profile::Production => "tracewrap=info",
        }
    }
}

static INIT: Once = Once::new();

/// Install the global subscriber for the given profile.
///
/// Call once at application startup; later calls are no-ops, so a
/// library embedded twice cannot clobber the host's subscriber. A
/// `RUST_LOG` value in the environment overrides the profile's default
/// filter.
///
/// # Example
///
/// ```
/// use tracewrap_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt().json().with_env_filter(filter).init();
            }
        }
    });
}
