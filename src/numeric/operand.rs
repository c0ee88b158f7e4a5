// ============================================================================
// Operand Conversion
// Lenient decimal conversion of heterogeneous input values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Integer digits of the largest representable decimal (~7.9e28)
const MAX_INTEGER_DIGITS: i64 = 29;

/// Deepest representable fractional digit
const MAX_SCALE: i64 = 28;

/// Significant digits kept from a literal; further fraction digits are truncated
const MAX_SIGNIFICANT_DIGITS: i64 = 28;

/// One element of a numeric input sequence.
///
/// Form fields arrive as text, computed values arrive as numbers, and untyped
/// callers hand over raw JSON. All of them convert through
/// [`transform_to_number`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Text to be parsed (e.g. the value of an input field)
    Text(String),
    /// An exact decimal number
    Number(Decimal),
    /// A binary floating-point number (may be NaN or infinite)
    Float(f64),
    /// Any other JSON value (null, bool, array, object)
    Other(Value),
}

impl Operand {
    /// Whether this operand is text that is empty once trimmed.
    #[inline]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Operand::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Text(s) => write!(f, "{}", s),
            Operand::Number(d) => write!(f, "{}", d),
            Operand::Float(x) => write!(f, "{}", x),
            Operand::Other(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Conversions into Operand
// ============================================================================

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Number(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

macro_rules! operand_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Number(Decimal::from(value))
                }
            }
        )*
    };
}

operand_from_integer!(i32, i64, u32, u64);

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Operand::Text(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Operand::Number(Decimal::from(i))
                } else if let Some(u) = n.as_u64() {
                    Operand::Number(Decimal::from(u))
                } else {
                    Operand::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            },
            other => Operand::Other(other),
        }
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::from(value.clone())
    }
}

// ============================================================================
// Conversion to Decimal
// ============================================================================

/// Convert a single operand to a number.
///
/// Conversion is lenient: blank text is zero, `null` is zero, booleans are
/// 0 or 1. Anything that is not a number yields
/// [`NumericError::NotANumber`].
///
/// # Examples
/// ```
/// use tally::numeric::transform_to_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(transform_to_number("42").unwrap(), Decimal::from(42));
/// assert!(transform_to_number("invalid").unwrap_err().is_nan());
/// ```
pub fn transform_to_number(operand: impl Into<Operand>) -> NumericResult<Decimal> {
    match operand.into() {
        Operand::Text(s) => parse_text(&s),
        Operand::Number(d) => Ok(d),
        Operand::Float(x) => float_to_decimal(x),
        Operand::Other(v) => coerce_json(&v),
    }
}

fn float_to_decimal(x: f64) -> NumericResult<Decimal> {
    if !x.is_finite() {
        return Err(NumericError::not_a_number(x.to_string()));
    }
    Decimal::try_from(x).map_err(|_| NumericError::Overflow)
}

fn coerce_json(value: &Value) -> NumericResult<Decimal> {
    match value {
        Value::Null => Ok(Decimal::ZERO),
        Value::Bool(b) => Ok(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Value::Number(_) | Value::String(_) => transform_to_number(value),
        // Arrays coerce through their joined text form
        Value::Array(items) => match items.as_slice() {
            [] => Ok(Decimal::ZERO),
            [single] => parse_text(&array_element_text(single)?),
            _ => Err(NumericError::not_a_number(value.to_string())),
        },
        Value::Object(_) => Err(NumericError::not_a_number(value.to_string())),
    }
}

/// Text an array element contributes when the array is joined.
fn array_element_text(value: &Value) -> NumericResult<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(items) => match items.as_slice() {
            [] => Ok(String::new()),
            [single] => array_element_text(single),
            _ => Err(NumericError::not_a_number(value.to_string())),
        },
        Value::Bool(_) | Value::Object(_) => Err(NumericError::not_a_number(value.to_string())),
    }
}

/// Parse decimal text.
///
/// Accepted forms:
/// - "" or "  " -> 0
/// - "42", "+42", "-0.5", ".5", "5."
/// - "1e3", "2.5E-2"
/// - "0x1F", "0o17", "0b101"
fn parse_text(raw: &str) -> NumericResult<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let nan = || NumericError::not_a_number(raw);

    if let Some(value) = parse_radix_literal(s, raw) {
        return value;
    }

    // Check for sign
    let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    // Split off exponent
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    // Split on decimal point
    let (int_str, frac_str) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };

    if int_str.is_empty() && frac_str.is_empty() {
        return Err(nan());
    }
    if !is_digits(int_str) || !is_digits(frac_str) {
        return Err(nan());
    }

    let exponent = match exponent {
        Some(exp) => parse_exponent(exp).ok_or_else(nan)?,
        None => 0,
    };

    let mut value = scale_digits(int_str, frac_str, exponent)?;
    if is_negative {
        value = -value;
    }
    Ok(value)
}

/// `None` when the text carries no radix prefix, otherwise the literal's
/// value. Literals beyond the decimal range overflow.
fn parse_radix_literal(s: &str, raw: &str) -> Option<NumericResult<Decimal>> {
    let lower = s.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(Err(NumericError::not_a_number(raw)));
    }

    let base = Decimal::from(radix);
    let mut value = Decimal::ZERO;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Some(Err(NumericError::not_a_number(raw)));
        };
        match value
            .checked_mul(base)
            .and_then(|v| v.checked_add(Decimal::from(digit)))
        {
            Some(next) => value = next,
            None => return Some(Err(NumericError::Overflow)),
        }
    }
    Some(Ok(value))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(s: &str) -> Option<i32> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    let magnitude: i32 = digits.parse().unwrap_or(i32::MAX);
    if s.starts_with('-') {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Build `digits x 10^exponent` from the integer and fraction digit runs.
///
/// Overflow depends only on where the decimal point lands, so a long mantissa
/// with a compensating exponent stays representable. Digits beyond decimal
/// precision are truncated.
fn scale_digits(int_str: &str, frac_str: &str, exponent: i32) -> NumericResult<Decimal> {
    let digits = format!("{}{}", int_str, frac_str);
    let leading_trimmed = digits.trim_start_matches('0');
    let significant = leading_trimmed.trim_end_matches('0');
    if significant.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let trailing_zeros = leading_trimmed.len() - significant.len();

    // Integer digits of the value, zero or negative for pure fractions
    let point = (significant.len() as i64)
        .saturating_add(trailing_zeros as i64)
        .saturating_sub(frac_str.len() as i64)
        .saturating_add(i64::from(exponent));

    if point > MAX_INTEGER_DIGITS {
        return Err(NumericError::Overflow);
    }
    if point <= -MAX_SCALE {
        return Ok(Decimal::ZERO);
    }

    let keep = (significant.len() as i64)
        .min(point + MAX_SCALE)
        .min(point.max(MAX_SIGNIFICANT_DIGITS)) as usize;
    let kept = &significant[..keep];

    let literal = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), kept)
    } else {
        let point = point as usize;
        if point >= kept.len() {
            format!("{}{}", kept, "0".repeat(point - kept.len()))
        } else {
            format!("{}.{}", &kept[..point], &kept[point..])
        }
    };

    Decimal::from_str(&literal)
        .map(|value| value.normalize())
        .map_err(|_| NumericError::Overflow)
}

// ============================================================================
// Tests
// ============================================================================
