//! The explicit addition policy.
//!
//! The source ecosystem's `+` coerces a numeric operand to text
//! implicitly when the other operand is a string. Here the conversion
//! is a documented function, [`number_to_text`], and [`add`] is the
//! only operator: what it does for each operand pair is spelled out
//! below, and everything else is an error.

use crate::error::ValueError;
use crate::value::Value;
use std::borrow::Cow;

/// The documented numeric-to-text conversion: renders exactly as
/// [`Value::Number`]'s `Display` does, so `4.0` becomes `"4"`.
pub fn number_to_text(n: f64) -> String {
    n.to_string()
}

/// Add two values.
///
/// - `Number + Number` is the float sum; a non-finite result is an
///   [`ValueError::ArithmeticTrap`], never a silent NaN.
/// - `BigInt + BigInt` is the exact sum.
/// - If either operand is `Text`, the other operand is converted to
///   text ([`number_to_text`] for numbers, the `Display` rendering for
///   the rest) and the two are concatenated. `Number + Text` is
///   therefore total: `add(4, "Surendra")` is `"4Surendra"`.
/// - Every other pair is [`ValueError::UnsupportedAddition`]. Mixing
///   `Number` and `BigInt` in particular never silently loses
///   precision.
pub fn add(lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => {
            let sum = a + b;
            if sum.is_finite() {
                Ok(Value::Number(sum))
            } else {
                Err(ValueError::ArithmeticTrap(
                    "addition produced a non-finite number".into(),
                ))
            }
        }
        (Value::BigInt(a), Value::BigInt(b)) => Ok(Value::BigInt(a + b)),
        (Value::Text(_), _) | (_, Value::Text(_)) => Ok(Value::Text(format!(
            "{}{}",
            text_operand(lhs),
            text_operand(rhs)
        ))),
        _ => Err(ValueError::UnsupportedAddition {
            lhs: lhs.type_of(),
            rhs: rhs.type_of(),
        }),
    }
}

/// The text form of an operand in a concatenation.
fn text_operand(v: &Value) -> Cow<'_, str> {
    match v {
        Value::Text(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(number_to_text(*n)),
        other => Cow::Owned(other.to_string()),
    }
}
