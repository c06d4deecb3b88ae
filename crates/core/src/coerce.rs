//! Best-effort coercion of loosely-typed JSON values.
//!
//! Clients send games with numbers as strings, lists as comma-separated
//! strings and booleans in whatever shape a form produced. These helpers
//! turn such values into strict types, falling back to a neutral value
//! (empty, `None`, `false`) instead of failing.

use serde_json::Value;

/// Whether a value counts as "set" for boolean purposes.
///
/// `null`, `false`, `0`, and the empty string are falsy. Arrays and objects
/// are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value as display text.
///
/// Numbers print in their shortest round-trip form: integral values have no
/// fractional part, and magnitudes below `1e-6` or from `1e21` up switch to
/// exponent notation (`1e-7`, `1.5e+21`). Arrays are joined with
/// commas (null elements render empty) and objects collapse to a fixed
/// placeholder.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_f64(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_f64(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if !f.is_finite() {
        return f.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e2".
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let sign = if n > 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        let exponent = (n - 1).unsigned_abs();
        if rest.is_empty() {
            format!("{first}e{sign}{exponent}")
        } else {
            format!("{first}.{rest}e{sign}{exponent}")
        }
    };

    if f < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Coerce a value to a finite number.
///
/// Returns `None` when the value has no numeric reading or the reading is
/// not finite. Booleans read as `1`/`0`, whitespace-only strings as `0`.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        Value::Array(_) => parse_numeric_str(&to_display_string(value)),
        Value::Object(_) => None,
    };
    n.filter(|f| f.is_finite())
}

/// Parse numeric text: decimal (with optional sign and exponent) or an
/// unsigned `0x`/`0o`/`0b` integer literal.
fn parse_numeric_str(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // `f64::from_str` also accepts spelled-out "inf"/"nan"; those are
    // discarded by the finiteness check in `to_number`.
    s.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Split comma-separated text into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Coerce a list-ish value to a list of non-empty strings.
///
/// Arrays are stringified element by element; a string is treated as a
/// comma-separated list. Anything else yields an empty list. Order is kept
/// and duplicates are not removed.
pub fn to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| to_display_string(item).trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => split_list(s),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn display_string_of_scalars() {
        assert_eq!(to_display_string(&json!("Nintendo")), "Nintendo");
        assert_eq!(to_display_string(&json!(42)), "42");
        assert_eq!(to_display_string(&json!(42.0)), "42");
        assert_eq!(to_display_string(&json!(2.5)), "2.5");
        assert_eq!(to_display_string(&json!(true)), "true");
        assert_eq!(to_display_string(&json!(null)), "null");
    }

    #[test]
    fn display_string_of_extreme_floats() {
        assert_eq!(to_display_string(&json!(0.000001)), "0.000001");
        assert_eq!(to_display_string(&json!(0.0000015)), "0.0000015");
        assert_eq!(to_display_string(&json!(1e-7)), "1e-7");
        assert_eq!(to_display_string(&json!(-2.5e-8)), "-2.5e-8");
        assert_eq!(to_display_string(&json!(123.456)), "123.456");
        assert_eq!(to_display_string(&json!(-0.5)), "-0.5");
        assert_eq!(to_display_string(&json!(1e20)), "100000000000000000000");
        assert_eq!(to_display_string(&json!(1e21)), "1e+21");
        assert_eq!(to_display_string(&json!(1.5e25)), "1.5e+25");
    }

    #[test]
    fn extreme_floats_survive_list_coercion() {
        assert_eq!(to_string_list(&json!([1e-7, 1e21])), vec!["1e-7", "1e+21"]);
    }

    #[test]
    fn display_string_of_containers() {
        assert_eq!(to_display_string(&json!(["a", 1, null, "b"])), "a,1,,b");
        assert_eq!(to_display_string(&json!({"k": "v"})), "[object Object]");
    }

    #[test]
    fn numbers_from_strings() {
        assert_eq!(to_number(&json!("1998")), Some(1998.0));
        assert_eq!(to_number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(to_number(&json!("1e3")), Some(1000.0));
        assert_eq!(to_number(&json!("-4")), Some(-4.0));
        assert_eq!(to_number(&json!("0x1F")), Some(31.0));
        assert_eq!(to_number(&json!("0b101")), Some(5.0));
        assert_eq!(to_number(&json!("   ")), Some(0.0));
    }

    #[test]
    fn non_numeric_strings_are_none() {
        assert_eq!(to_number(&json!("abc")), None);
        assert_eq!(to_number(&json!("12abc")), None);
        assert_eq!(to_number(&json!("Infinity")), None);
        assert_eq!(to_number(&json!("nan")), None);
        assert_eq!(to_number(&json!("inf")), None);
        assert_eq!(to_number(&json!("0x")), None);
        assert_eq!(to_number(&json!("-0x10")), None);
    }

    #[test]
    fn numbers_from_other_shapes() {
        assert_eq!(to_number(&json!(80)), Some(80.0));
        assert_eq!(to_number(&json!(true)), Some(1.0));
        assert_eq!(to_number(&json!(false)), Some(0.0));
        assert_eq!(to_number(&json!([])), Some(0.0));
        assert_eq!(to_number(&json!(["7"])), Some(7.0));
        assert_eq!(to_number(&json!([1, 2])), None);
        assert_eq!(to_number(&json!({"n": 1})), None);
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(split_list("RPG, Action"), vec!["RPG", "Action"]);
        assert_eq!(split_list(" , ,PC,"), vec!["PC"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn string_list_from_array_and_string() {
        assert_eq!(
            to_string_list(&json!(["RPG", "", " Action "])),
            vec!["RPG", "Action"]
        );
        assert_eq!(to_string_list(&json!("RPG, Action")), vec!["RPG", "Action"]);
        assert_eq!(to_string_list(&json!([2077, "PC"])), vec!["2077", "PC"]);
        assert!(to_string_list(&json!(42)).is_empty());
        assert!(to_string_list(&json!(null)).is_empty());
    }

    #[test]
    fn string_list_keeps_duplicates_and_order() {
        assert_eq!(
            to_string_list(&json!("PC,Switch,PC")),
            vec!["PC", "Switch", "PC"]
        );
    }
}
