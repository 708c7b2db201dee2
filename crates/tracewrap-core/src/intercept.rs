//! Call interception engine
//!
//! An explicit decorator: the host wraps a unit it wants observed and
//! routes invocations through [`CallInterceptor::around`], which logs
//! entry/exit/failure around a delegate closure. No proxying, no
//! registration machinery; whatever the delegate produces is returned
//! unchanged.

use std::fmt;

use serde_json::Value;
use tracing::Level;

use crate::config::ScopeConfig;
use crate::scope::is_in_scope;
use crate::summarize::{render_full, summarize};

/// Upper bound on cause-chain hops, in case a chain is cyclic.
const MAX_CAUSE_DEPTH: usize = 64;

/// Contract failures must implement to flow through the interceptor.
///
/// The two hooks drive log classification only; they never change how
/// the failure propagates.
pub trait Failure: std::error::Error + 'static {
    /// Name used for this failure class in diagnostics output.
    fn class_name(&self) -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }

    /// True when the callee is signalling malformed input. Such failures
    /// get a targeted ERROR line that includes the raw argument list.
    fn invalid_argument(&self) -> bool {
        false
    }
}

/// Walk the cause chain to its deepest link.
///
/// Stops on an absent or self-referential cause and caps the number of
/// hops so a cyclic chain cannot loop forever.
pub fn root_cause<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
    let mut current = err;
    for _ in 0..MAX_CAUSE_DEPTH {
        match current.source() {
            Some(next) if !std::ptr::addr_eq(next, current) => current = next,
            _ => break,
        }
    }
    current
}

/// Render a failure and its cause chain on one line, deepest last.
fn render_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut current = err;
    for _ in 0..MAX_CAUSE_DEPTH {
        match current.source() {
            Some(next) if !std::ptr::addr_eq(next, current) => {
                out.push_str("; caused by: ");
                out.push_str(&next.to_string());
                current = next;
            }
            _ => break,
        }
    }
    out
}

/// Decorator that logs intercepted invocations.
///
/// Stateless per call; the only state is the immutable scope config it
/// was constructed with, so one interceptor can be shared across threads.
#[derive(Debug, Clone)]
pub struct CallInterceptor {
    config: ScopeConfig,
}

impl CallInterceptor {
    pub fn new(config: ScopeConfig) -> Self {
        Self { config }
    }

    /// Invoke `proceed` with entry/exit/failure logging around it.
    ///
    /// Out-of-scope calls short-circuit straight to the delegate with no
    /// logging at all; the prefix check is the only overhead. The
    /// delegate runs exactly once, synchronously, on the calling thread,
    /// and its result (success or failure) is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tracewrap_core::config::ScopeConfig;
    /// use tracewrap_core::intercept::{CallInterceptor, Failure};
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("boom")]
    /// struct Boom;
    /// impl Failure for Boom {}
    ///
    /// let interceptor = CallInterceptor::new(ScopeConfig::new(None));
    /// let result = interceptor.around(
    ///     "com.app.service.UserService",
    ///     "findUser",
    ///     &[json!("John")],
    ///     || Ok::<_, Boom>(42),
    /// );
    /// assert_eq!(result.unwrap(), 42);
    /// ```
    pub fn around<T, E, F>(
        &self,
        target_type: &str,
        method_name: &str,
        args: &[Value],
        proceed: F,
    ) -> Result<T, E>
    where
        T: fmt::Debug,
        E: Failure,
        F: FnOnce() -> Result<T, E>,
    {
        if !self.config.logging_enabled() || !is_in_scope(target_type, &self.config) {
            return proceed();
        }

        if tracing::enabled!(Level::INFO) {
            tracing::info!(
                "Executing: {}.{}() with args summary: {}",
                target_type,
                method_name,
                summarize(args)
            );
        }

        if tracing::enabled!(Level::DEBUG) {
            tracing::debug!(
                "Enter: {}.{}() with full arguments: {}",
                target_type,
                method_name,
                render_full(args)
            );
        }

        match proceed() {
            Ok(result) => {
                if tracing::enabled!(Level::DEBUG) {
                    tracing::debug!(
                        "Exit: {}.{}() with result: {:?}",
                        target_type,
                        method_name,
                        result
                    );
                }
                Ok(result)
            }
            Err(err) => {
                if err.invalid_argument() {
                    tracing::error!(
                        "Illegal argument in {}.{}(): args = {}, error: {}",
                        target_type,
                        method_name,
                        render_full(args),
                        err
                    );
                } else {
                    tracing::error!(
                        "Unexpected error in {}.{}(): {}",
                        target_type,
                        method_name,
                        err
                    );
                }
                log_failure(target_type, method_name, &err);
                Err(err)
            }
        }
    }
}

/// After-failure hook: log the root cause of a failure.
///
/// At DEBUG the full cause chain is appended; otherwise just the root
/// cause label and the top-level message.
fn log_failure<E: Failure>(target_type: &str, method_name: &str, err: &E) {
    let top: &(dyn std::error::Error + 'static) = err;
    let root = root_cause(top);
    // No runtime type names on dyn Error: the top-level error is labelled
    // by its class name, deeper links by their rendered message.
    let cause = if std::ptr::addr_eq(root, top) {
        err.class_name().to_string()
    } else {
        root.to_string()
    };

    if tracing::enabled!(Level::DEBUG) {
        tracing::error!(
            "Exception in {}.{}(): cause = {}, message = {}, stacktrace: {}",
            target_type,
            method_name,
            cause,
            err,
            render_chain(top)
        );
    } else {
        tracing::error!(
            "Exception in {}.{}(): cause = {}, message = {}",
            target_type,
            method_name,
            cause,
            err
        );
    }
}
