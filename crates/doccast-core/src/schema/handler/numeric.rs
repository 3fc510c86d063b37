//! Loose scalar conversions, in the style of dynamically typed stores:
//! strings contribute their leading numeric prefix and anything without one
//! reads as zero.

use crate::Value;

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// The longest prefix of `src`, after leading whitespace, that reads as a
/// decimal number with optional sign, fraction and exponent.
fn numeric_prefix(src: &str) -> &str {
    let src = src.trim_start_matches(WHITESPACE);
    let bytes = src.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &src[..end]
}

/// Returns `true` if the whole string, ignoring surrounding whitespace, is a
/// number.
pub(super) fn is_numeric_str(src: &str) -> bool {
    let src = src.trim_matches(WHITESPACE);
    !src.is_empty() && numeric_prefix(src).len() == src.len()
}

pub(super) fn is_numeric(value: &Value) -> bool {
    match value {
        Value::I64(_) | Value::F64(_) => true,
        Value::String(src) => is_numeric_str(src),
        _ => false,
    }
}

pub(super) fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Bool(v) => i64::from(*v),
        Value::I64(v) => *v,
        // Saturates; NaN reads as zero
        Value::F64(v) => *v as i64,
        Value::String(src) => {
            let prefix = numeric_prefix(src);
            prefix
                .parse::<i64>()
                .unwrap_or_else(|_| prefix.parse::<f64>().map_or(0, |v| v as i64))
        }
        _ => 0,
    }
}

pub(super) fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Bool(v) => f64::from(u8::from(*v)),
        Value::I64(v) => *v as f64,
        Value::F64(v) => *v,
        Value::String(src) => numeric_prefix(src).parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub(super) fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(v) => *v,
        Value::I64(v) => *v != 0,
        Value::F64(v) => *v != 0.0,
        Value::String(src) => !(src.is_empty() || src == "0"),
        _ => false,
    }
}

/// String form of a scalar: `true` is `"1"` and `false` is empty.
pub(super) fn to_string(value: &Value) -> String {
    match value {
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::I64(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::String(src) => src.clone(),
        _ => String::new(),
    }
}
