//! Employee-id normalization.
//!
//! A roster cell holds an employee id as an integer, a float carrying a
//! spurious fractional part (`1234.0`), numeric text, blank text, or the
//! `-` sentinel. Normalization turns all of those into either a decimal
//! string zero-padded to a minimum width of 4, or `None` for "missing".

use serde_json::Value;

/// The placeholder roster cells use for "no employee assigned".
pub const MISSING_SENTINEL: &str = "-";

/// Normalize a raw employee-id cell.
///
/// Returns `None` for null, blank, sentinel, or non-numeric cells. Numeric
/// cells are truncated to an integer and rendered with a sign-aware minimum
/// width of 4 (`7` → `"0007"`, `-5` → `"-005"`); wider values are left
/// unpadded.
pub fn normalize_emp_id(cell: &Value) -> Option<String> {
    let id = match cell {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => n.as_f64()?.trunc() as i64,
        },
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s == MISSING_SENTINEL {
                return None;
            }
            match s.parse::<i64>() {
                Ok(i) => i,
                // Spreadsheet exports render integer cells as "1234.0";
                // accept the textual float form the same way.
                Err(_) => s.parse::<f64>().ok().filter(|f| f.is_finite())?.trunc() as i64,
            }
        }
        _ => return None,
    };

    Some(format!("{id:04}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_values() {
        assert_eq!(normalize_emp_id(&Value::Null), None);
        assert_eq!(normalize_emp_id(&json!("-")), None);
        assert_eq!(normalize_emp_id(&json!("")), None);
        assert_eq!(normalize_emp_id(&json!("   ")), None);
        assert_eq!(normalize_emp_id(&json!("abc")), None);
    }

    #[test]
    fn test_zero_pad_to_width_four() {
        assert_eq!(normalize_emp_id(&json!(7)), Some("0007".into()));
        assert_eq!(normalize_emp_id(&json!("7")), Some("0007".into()));
        assert_eq!(normalize_emp_id(&json!(123)), Some("0123".into()));
    }

    #[test]
    fn test_float_truncation() {
        assert_eq!(normalize_emp_id(&json!(1234.0)), Some("1234".into()));
        assert_eq!(normalize_emp_id(&json!(1234.9)), Some("1234".into()));
        assert_eq!(normalize_emp_id(&json!("1234.0")), Some("1234".into()));
    }

    #[test]
    fn test_wide_values_unpadded() {
        assert_eq!(normalize_emp_id(&json!(12345)), Some("12345".into()));
        assert_eq!(normalize_emp_id(&json!("12345")), Some("12345".into()));
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(normalize_emp_id(&json!(0)), Some("0000".into()));
    }

    #[test]
    fn test_negative_sign_aware_pad() {
        assert_eq!(normalize_emp_id(&json!(-5)), Some("-005".into()));
        assert_eq!(normalize_emp_id(&json!(-12345)), Some("-12345".into()));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(normalize_emp_id(&json!(" 42 ")), Some("0042".into()));
    }
}
