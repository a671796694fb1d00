use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A numeric operand read from text. Whole-number literals are integers; anything
/// else must parse as a finite float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("'{0}' is not a finite number")]
    Invalid(String),

    #[error("'{0}' is outside the 64-bit integer range")]
    OutOfRange(String),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Multiplies with integer/float promotion. `None` on integer overflow.
    pub fn checked_mul(self, rhs: Number) -> Option<Number> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_mul(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() * b.as_f64())),
        }
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_integer_literal(trimmed) {
            // Whole numbers never fall back to a lossy float.
            return trimmed
                .parse::<i64>()
                .map(Number::Int)
                .map_err(|_| ParseNumberError::OutOfRange(s.to_string()));
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(ParseNumberError::Invalid(s.to_string())),
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// One evaluated cost line: the operands and their product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostQuote {
    pub quantity: Number,
    pub unit_price: Number,
    pub cost: Number,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_float() {
        assert_eq!("3".parse::<Number>(), Ok(Number::Int(3)));
        assert_eq!("2.5".parse::<Number>(), Ok(Number::Float(2.5)));
        assert_eq!(" -4 ".parse::<Number>(), Ok(Number::Int(-4)));
        assert_eq!("1e3".parse::<Number>(), Ok(Number::Float(1000.0)));
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = "a".parse::<Number>().unwrap_err();
        assert_eq!(err, ParseNumberError::Invalid("a".to_string()));
        assert!("".parse::<Number>().is_err());
        assert!("-".parse::<Number>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for raw in ["nan", "inf", "-infinity", "1e400"] {
            assert_eq!(
                raw.parse::<Number>(),
                Err(ParseNumberError::Invalid(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_whole_number_beyond_i64_is_out_of_range() {
        assert_eq!(
            "9223372036854775807".parse::<Number>(),
            Ok(Number::Int(i64::MAX))
        );
        assert_eq!(
            "-9223372036854775808".parse::<Number>(),
            Ok(Number::Int(i64::MIN))
        );
        for raw in ["9223372036854775808", "18446744073709551617", "-9223372036854775809"] {
            assert_eq!(
                raw.parse::<Number>(),
                Err(ParseNumberError::OutOfRange(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_promotion() {
        assert_eq!(Number::Int(3).checked_mul(Number::Int(4)), Some(Number::Int(12)));
        assert_eq!(
            Number::Int(3).checked_mul(Number::Float(2.5)),
            Some(Number::Float(7.5))
        );
        assert_eq!(Number::Int(i64::MAX).checked_mul(Number::Int(2)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Float(7.5).to_string(), "7.5");
        assert_eq!(Number::Int(-12).to_string(), "-12");
    }

    #[test]
    fn test_quote_serializes_untagged() {
        let quote = CostQuote {
            quantity: Number::Int(3),
            unit_price: Number::Float(2.5),
            cost: Number::Float(7.5),
        };
        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(json, r#"{"quantity":3,"unit_price":2.5,"cost":7.5}"#);
    }
}
