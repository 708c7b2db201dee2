//! Decorator demo: wrap a unit and watch its calls get logged.
//!
//! Run with: cargo run --example decorator_demo

use serde_json::json;
use tracewrap_core::config::{LoggingSettings, ScopeConfig};
use tracewrap_core::intercept::{CallInterceptor, Failure};
use tracewrap_core::logging_facility::{init, Profile};

#[derive(Debug, thiserror::Error)]
#[error("user not found: {name}")]
struct UserNotFound {
    name: String,
}

impl Failure for UserNotFound {
    fn class_name(&self) -> &'static str {
        "UserNotFound"
    }
}

/// A unit the host chose to observe: it routes its own invocations
/// through the interceptor instead of being proxied.
struct UserService {
    interceptor: CallInterceptor,
}

impl UserService {
    fn find_user(&self, name: &str) -> Result<String, UserNotFound> {
        self.interceptor.around(
            "com.example.app.UserService",
            "find_user",
            &[json!(name)],
            || {
                if name == "John" {
                    Ok(format!("{} <john@example.com>", name))
                } else {
                    Err(UserNotFound {
                        name: name.to_string(),
                    })
                }
            },
        )
    }
}

fn main() {
    init(Profile::Development);

    let settings = LoggingSettings {
        base_package: Some("com.example.app".to_string()),
        enabled: true,
    };
    let service = UserService {
        interceptor: CallInterceptor::new(ScopeConfig::from_settings(&settings)),
    };

    match service.find_user("John") {
        Ok(user) => println!("found: {}", user),
        Err(err) => println!("failed: {}", err),
    }

    match service.find_user("Jane") {
        Ok(user) => println!("found: {}", user),
        Err(err) => println!("failed: {}", err),
    }
}
