//! Argument summarization for low-verbosity call logging
//!
//! Arguments are delivered as `serde_json::Value`, the structural
//! representation hosts build for any value they want observed. The
//! summarizer walks that structure instead of doing runtime type
//! introspection, which keeps the redact-by-name contract while staying
//! independent of how the host models its types.

use serde_json::Value;

/// Build the redacted, single-line argument summary used at INFO level.
///
/// - Empty input renders as `no arguments`.
/// - Scalars render as `argN=<value>` (strings unquoted, null as `null`).
/// - Objects render their members as `name=value`, skipping any member
///   whose name contains `password` or `secret` (case-insensitive). A
///   skipped member is simply absent, there is no redaction placeholder.
/// - Anything else falls back to `argN=<compact JSON>`.
///
/// This function is purely diagnostic and never panics; there is no
/// failure path that could destabilize the call being observed.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tracewrap_core::summarize::summarize;
///
/// let summary = summarize(&[json!(null), json!("John"), json!(30)]);
/// assert_eq!(summary, "arg0=null, arg1=John, arg2=30");
/// ```
pub fn summarize(args: &[Value]) -> String {
    if args.is_empty() {
        return "no arguments".to_string();
    }
    let mut fragments = Vec::new();
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Value::Null => fragments.push(format!("arg{}=null", index)),
            Value::String(s) => fragments.push(format!("arg{}={}", index, s)),
            Value::Number(n) => fragments.push(format!("arg{}={}", index, n)),
            Value::Bool(b) => fragments.push(format!("arg{}={}", index, b)),
            Value::Object(members) => {
                for (name, value) in members {
                    let lower = name.to_lowercase();
                    if lower.contains("password") || lower.contains("secret") {
                        continue;
                    }
                    fragments.push(format!("{}={}", name, render_value(value)));
                }
            }
            other => fragments.push(format!("arg{}={}", index, other)),
        }
    }
    fragments.join(", ")
}

/// Render the full, unsummarized argument list used at DEBUG level.
///
/// WARNING: this path does NOT apply the password/secret redaction the
/// summary applies. Enabling DEBUG for intercepted calls can therefore
/// leak sensitive values into logs. This mirrors the summary/full split
/// of the observed contract and is a documented safety gap.
pub fn render_full(args: &[Value]) -> String {
    let rendered: Vec<String> = args.iter().map(render_value).collect();
    format!("[{}]", rendered.join(", "))
}

/// Render a single value the way a `toString` would: strings unquoted,
/// scalars bare, composites as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_args_render_as_no_arguments() {
        assert_eq!(summarize(&[]), "no arguments");
    }

    #[test]
    fn test_scalar_args_in_order() {
        let summary = summarize(&[json!(null), json!("John"), json!(30)]);
        assert_eq!(summary, "arg0=null, arg1=John, arg2=30");
    }

    #[test]
    fn test_bool_arg() {
        assert_eq!(summarize(&[json!(true)]), "arg0=true");
    }

    #[test]
    fn test_object_members_rendered_by_name() {
        let summary = summarize(&[json!({"name": "John", "age": 30})]);
        assert_eq!(summary, "name=John, age=30");
    }

    #[test]
    fn test_password_and_secret_members_skipped() {
        let summary = summarize(&[json!({
            "username": "alice",
            "password": "hunter2",
            "apiSecret": "s3cr3t",
            "oldPasswordHash": "abc"
        })]);
        assert_eq!(summary, "username=alice");
        assert!(!summary.contains("hunter2"));
        assert!(!summary.contains("s3cr3t"));
    }

    #[test]
    fn test_redaction_is_case_insensitive() {
        let summary = summarize(&[json!({"PassWord": "x", "SECRET_KEY": "y", "id": 7})]);
        assert_eq!(summary, "id=7");
    }

    #[test]
    fn test_object_with_only_sensitive_members_renders_nothing_for_it() {
        let summary = summarize(&[json!("ok"), json!({"password": "x"})]);
        assert_eq!(summary, "arg0=ok");
    }

    #[test]
    fn test_array_falls_back_to_compact_json() {
        let summary = summarize(&[json!([1, 2, 3])]);
        assert_eq!(summary, "arg0=[1,2,3]");
    }

    #[test]
    fn test_nested_member_values_render_as_json() {
        let summary = summarize(&[json!({"ids": [1, 2]})]);
        assert_eq!(summary, "ids=[1,2]");
    }

    #[test]
    fn test_render_full_does_not_redact() {
        let full = render_full(&[json!({"password": "hunter2"})]);
        assert!(full.contains("hunter2"));
    }

    #[test]
    fn test_render_full_shape() {
        let full = render_full(&[json!(null), json!("John"), json!(30)]);
        assert_eq!(full, "[null, John, 30]");
    }
}
