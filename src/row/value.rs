//! Field value comparison for dirty-tracking.
//!
//! Values read back from storage are frequently strings while values set in
//! memory are native-typed. Comparing `"5"` against `5` with plain equality
//! would mark a row dirty on representation alone, so comparison goes
//! numeric when both operands look numeric and strict otherwise.

use serde_json::Value;

/// Interpret a value as a number if it looks like one.
///
/// JSON numbers qualify directly. Strings qualify when they parse as a
/// finite float, so `"5"`, `"05"`, and `" 3.25 "` all count. Booleans,
/// nulls, arrays, and objects never qualify.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Compare two field values under the dual comparison rule.
///
/// If both operands are numeric-looking they compare by numeric equality,
/// so `"5"` and `5` are the same value. Everything else compares strictly,
/// type and value both, so `"abc"` and `"abd"` differ and `"5"` never
/// equals `true`.
pub fn is_same_value(old: &Value, new: &Value) -> bool {
    match (numeric_value(old), numeric_value(new)) {
        (Some(a), Some(b)) => a == b,
        _ => old == new,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_pairs_compare_loosely() {
        assert!(is_same_value(&json!("5"), &json!(5)));
        assert!(is_same_value(&json!(5), &json!("5")));
        assert!(is_same_value(&json!("05"), &json!("5")));
        assert!(is_same_value(&json!(1.5), &json!("1.5")));
        assert!(is_same_value(&json!(1000), &json!(1000.0)));

        assert!(!is_same_value(&json!("5"), &json!(6)));
        assert!(!is_same_value(&json!("1.5"), &json!("1.25")));
    }

    #[test]
    fn test_non_numeric_pairs_compare_strictly() {
        assert!(is_same_value(&json!("abc"), &json!("abc")));
        assert!(!is_same_value(&json!("abc"), &json!("abd")));

        assert!(is_same_value(&Value::Null, &Value::Null));
        assert!(is_same_value(&json!(true), &json!(true)));

        // type mismatches are never the same value
        assert!(!is_same_value(&json!("true"), &json!(true)));
        assert!(!is_same_value(&json!(0), &Value::Null));
        assert!(!is_same_value(&json!(1), &json!(true)));
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(42)), Some(42.0));
        assert_eq!(numeric_value(&json!("42")), Some(42.0));
        assert_eq!(numeric_value(&json!(" 3.25 ")), Some(3.25));

        assert_eq!(numeric_value(&json!("abc")), None);
        assert_eq!(numeric_value(&json!("")), None);
        assert_eq!(numeric_value(&json!(true)), None);
        assert_eq!(numeric_value(&Value::Null), None);
        assert_eq!(numeric_value(&json!([1, 2])), None);
    }

    #[test]
    fn test_non_finite_strings_are_not_numeric() {
        // "inf" and "nan" parse as floats but are not numeric-looking data,
        // so they fall back to strict comparison
        assert_eq!(numeric_value(&json!("inf")), None);
        assert_eq!(numeric_value(&json!("NaN")), None);
        assert!(is_same_value(&json!("NaN"), &json!("NaN")));
    }
}
