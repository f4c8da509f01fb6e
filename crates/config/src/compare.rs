//! Evaluation of `if key OP value` guards.
//!
//! Invariants:
//! - The key is looked up as-is; only the right-hand value is expanded.
//! - An unset key is `None` and never equals any string, including
//!   `"undefined"`.
//! - Ordering operators compare as `f64`; text that is not a number becomes
//!   NaN, so every ordering comparison against it is false.
//! - Only decimal notation counts as a number. Spellings such as `inf` or
//!   `nan` are text, not special float values.

use crate::expand::expand;
use crate::statement::Operator;
use crate::store::VariableStore;

/// Evaluate `store[key] OP expand(raw)`.
pub fn compare<S: VariableStore + ?Sized>(store: &S, key: &str, op: Operator, raw: &str) -> bool {
    let left = store.get(key);
    let right = expand(raw, store);

    match op {
        Operator::Is => left.as_deref() == Some(right.as_str()),
        Operator::Isnt => left.as_deref() != Some(right.as_str()),
        Operator::Lt => to_number(left.as_deref()) < to_number(Some(&right)),
        Operator::Le => to_number(left.as_deref()) <= to_number(Some(&right)),
        Operator::Gt => to_number(left.as_deref()) > to_number(Some(&right)),
        Operator::Ge => to_number(left.as_deref()) >= to_number(Some(&right)),
    }
}

/// Numeric coercion: unset is NaN, blank is zero, anything unparsable is NaN.
fn to_number(value: Option<&str>) -> f64 {
    let Some(text) = value else {
        return f64::NAN;
    };
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    let decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}
