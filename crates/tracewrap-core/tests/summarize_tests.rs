#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use serde_json::json;
use tracewrap_core::summarize::{render_full, summarize};

#[test]
fn test_no_arguments_literal() {
    assert_eq!(summarize(&[]), "no arguments");
}

#[test]
fn test_mixed_scalars_and_object() {
    let summary = summarize(&[
        json!("create"),
        json!({"name": "John", "age": 30}),
        json!(null),
    ]);
    assert_eq!(summary, "arg0=create, name=John, age=30, arg2=null");
}

#[test]
fn test_no_trailing_separator() {
    let summary = summarize(&[json!(1), json!(2)]);
    assert!(!summary.ends_with(", "));
    assert_eq!(summary, "arg0=1, arg1=2");
}

proptest! {
    // A member literally named password/secret (any case) never has its
    // value rendered, whatever that value is.
    #[test]
    fn prop_password_values_never_appear(value in "[a-zA-Z0-9!#-~]{8,24}") {
        let summary = summarize(&[json!({
            "user": "u",
            "password": value,
            "Secret": value,
        })]);
        prop_assert_eq!(summary.as_str(), "user=u");
    }

    // The summarizer is total: any mix of scalar arguments renders
    // without panicking and in order.
    #[test]
    fn prop_scalars_render_in_order(values in proptest::collection::vec(-1000i64..1000, 1..8)) {
        let args: Vec<_> = values.iter().map(|v| json!(v)).collect();
        let summary = summarize(&args);
        let expected: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("arg{}={}", i, v))
            .collect();
        prop_assert_eq!(summary, expected.join(", "));
    }

    // The full rendering is verbatim: every string value appears.
    #[test]
    fn prop_render_full_is_verbatim(value in "[a-zA-Z0-9]{1,16}") {
        let full = render_full(&[json!({"password": &value})]);
        prop_assert!(full.contains(&value));
    }
}
