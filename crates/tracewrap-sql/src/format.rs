//! SQL parameter inlining formatter
//!
//! Rebuilds a human-readable statement from raw SQL text and the bound
//! parameter sets. SQL is treated as an opaque string with minimal
//! lexical pattern matching; malformed input degrades to best-effort
//! substitution. Nothing in this module can panic on any input.

use serde_json::Value;

use crate::event::ParamSet;

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format one bound value for inline rendering.
///
/// Null stays bare, numbers stay unquoted, everything else is single
/// quoted with embedded single quotes escaped.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        other => quote(&other.to_string()),
    }
}

fn quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "\\'"))
}

/// Case-insensitive search for an ASCII token; returns a byte index
/// that is always safe to slice at (the match itself is pure ASCII).
fn find_token_ci(haystack: &str, token: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(token.len())
        .position(|window| window.eq_ignore_ascii_case(token.as_bytes()))
}

fn starts_with_ci(haystack: &str, token: &str) -> bool {
    haystack.len() >= token.len()
        && haystack.as_bytes()[..token.len()].eq_ignore_ascii_case(token.as_bytes())
}

/// Render raw SQL with its parameters inlined.
///
/// With inlining disabled, or no `?` placeholders present, this is pure
/// normalization. A batched INSERT with a VALUES clause is reconstructed
/// as one statement with a parenthesized tuple per batch entry; any
/// other statement gets its placeholders substituted left to right, one
/// filled statement per non-empty parameter set, joined with `" ; "`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tracewrap_sql::format::format_sql;
///
/// let sql = "INSERT INTO users (name, age) VALUES (?, ?)";
/// let params = vec![vec![(1, json!("John")), (2, json!(30))]];
/// assert_eq!(
///     format_sql(sql, &params, true),
///     "INSERT INTO users (name, age) VALUES ('John', 30);"
/// );
/// ```
pub fn format_sql(raw_sql: &str, parameter_sets: &[ParamSet], inlining_enabled: bool) -> String {
    if !inlining_enabled || !raw_sql.contains('?') {
        return normalize(raw_sql);
    }

    if starts_with_ci(raw_sql, "insert") {
        if let Some(idx) = find_token_ci(raw_sql, "values") {
            let prefix = &raw_sql[..idx + "values".len()];
            let tuples: Vec<String> = parameter_sets
                .iter()
                .filter(|set| !set.is_empty())
                .map(|set| {
                    let values: Vec<String> =
                        set.iter().map(|(_, value)| format_value(value)).collect();
                    format!("({})", values.join(", "))
                })
                .collect();
            if !tuples.is_empty() {
                return format!("{} {};", normalize(prefix), tuples.join(", "));
            }
        }
    }

    let mut filled = Vec::new();
    for set in parameter_sets.iter().filter(|set| !set.is_empty()) {
        let mut statement = raw_sql.to_string();
        for (_, value) in set {
            statement = statement.replacen('?', &format_value(value), 1);
        }
        filled.push(statement);
    }
    if filled.is_empty() {
        normalize(raw_sql)
    } else {
        format!("{};", normalize(&filled.join(" ; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(
            normalize("  SELECT *\n  FROM   users\t WHERE id = ?  "),
            "SELECT * FROM users WHERE id = ?"
        );
    }

    #[test]
    fn test_format_value_null_and_numbers_bare() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(3.5)), "3.5");
    }

    #[test]
    fn test_format_value_strings_quoted_and_escaped() {
        assert_eq!(format_value(&json!("John")), "'John'");
        assert_eq!(format_value(&json!("O'Brien")), "'O\\'Brien'");
    }

    #[test]
    fn test_format_value_bool_quoted() {
        // Only numbers stay bare; booleans go through the string path.
        assert_eq!(format_value(&json!(true)), "'true'");
    }

    #[test]
    fn test_inlining_disabled_is_pure_normalization() {
        let sql = "SELECT * FROM users WHERE id = ?";
        let params = vec![vec![(1, json!(7))]];
        assert_eq!(format_sql(sql, &params, false), normalize(sql));
    }

    #[test]
    fn test_no_placeholders_is_pure_normalization() {
        let sql = "SELECT   count(*) FROM users";
        assert_eq!(format_sql(sql, &[], true), "SELECT count(*) FROM users");
    }

    #[test]
    fn test_single_row_insert() {
        let sql = "INSERT INTO users (name, age) VALUES (?, ?)";
        let params = vec![vec![(1, json!("John")), (2, json!(30))]];
        assert_eq!(
            format_sql(sql, &params, true),
            "INSERT INTO users (name, age) VALUES ('John', 30);"
        );
    }

    #[test]
    fn test_batched_insert_renders_one_tuple_per_row() {
        let sql = "insert into users (name, age) values (?, ?)";
        let params = vec![
            vec![(1, json!("John")), (2, json!(30))],
            vec![(1, json!("Jane")), (2, json!(28))],
            vec![(1, json!(null)), (2, json!(1))],
        ];
        assert_eq!(
            format_sql(sql, &params, true),
            "insert into users (name, age) values ('John', 30), ('Jane', 28), (null, 1);"
        );
    }

    #[test]
    fn test_batched_insert_skips_empty_parameter_sets() {
        let sql = "INSERT INTO t (a) VALUES (?)";
        let params = vec![vec![], vec![(1, json!(1))], vec![]];
        assert_eq!(format_sql(sql, &params, true), "INSERT INTO t (a) VALUES (1);");
    }

    #[test]
    fn test_update_substitutes_left_to_right() {
        let sql = "UPDATE users SET name = ? WHERE id = ?";
        let params = vec![vec![(1, json!("John")), (2, json!(5))]];
        assert_eq!(
            format_sql(sql, &params, true),
            "UPDATE users SET name = 'John' WHERE id = 5;"
        );
    }

    #[test]
    fn test_batched_update_joins_filled_statements() {
        let sql = "DELETE FROM users WHERE id = ?";
        let params = vec![vec![(1, json!(1))], vec![(1, json!(2))]];
        assert_eq!(
            format_sql(sql, &params, true),
            "DELETE FROM users WHERE id = 1 ; DELETE FROM users WHERE id = 2;"
        );
    }

    #[test]
    fn test_all_parameter_sets_empty_falls_back_to_normalization() {
        let sql = "UPDATE users SET active = ?";
        let params = vec![vec![], vec![]];
        assert_eq!(format_sql(sql, &params, true), "UPDATE users SET active = ?");
    }

    #[test]
    fn test_more_placeholders_than_parameters_degrades() {
        let sql = "UPDATE users SET a = ?, b = ? WHERE id = ?";
        let params = vec![vec![(1, json!("x"))]];
        assert_eq!(
            format_sql(sql, &params, true),
            "UPDATE users SET a = 'x', b = ? WHERE id = ?;"
        );
    }

    #[test]
    fn test_insert_without_values_uses_generic_substitution() {
        let sql = "INSERT INTO t SELECT ? FROM dual";
        let params = vec![vec![(1, json!(9))]];
        assert_eq!(format_sql(sql, &params, true), "INSERT INTO t SELECT 9 FROM dual;");
    }
}
