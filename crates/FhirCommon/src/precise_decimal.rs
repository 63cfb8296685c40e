use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{FhirError, Result};

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$")
        .expect("valid number pattern")
});

/// FHIR `decimal` with its written precision.
///
/// The value is held as digits plus scale, so `0.010` stays `0.010` through
/// a decode/encode cycle and no binary float is ever involved. Values that do
/// not fit in 28 significant digits are rejected with a range error.
///
/// Equality and ordering are numeric: `1.0 == 1.00`.
///
/// # Examples
///
/// ```rust
/// use fhir_common::PreciseDecimal;
///
/// let precise: PreciseDecimal = "12.340".parse().unwrap();
/// assert_eq!(precise.to_string(), "12.340");
/// assert_eq!(precise.scale(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreciseDecimal(Decimal);

impl PreciseDecimal {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Parses a JSON number literal. Exponent notation is accepted and
    /// normalized to plain digits. Zero carries no sign: `-0.0` reads as
    /// `0.0`, keeping its scale.
    pub fn parse(text: &str) -> Result<Self> {
        if !NUMBER_PATTERN.is_match(text) {
            return Err(FhirError::format(format!("'{}' is not a decimal", text)));
        }
        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(&text.replace('E', "e"))
        } else {
            Decimal::from_str_exact(text)
        };
        let mut value = parsed
            .map_err(|err| FhirError::range(format!("decimal '{}' out of range: {}", text, err)))?;
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Ok(Self(value))
    }

    /// Builds a decimal from the shortest text form of a float.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(FhirError::range(format!(
                "{} cannot be represented as a decimal",
                value
            )));
        }
        Self::parse(&value.to_string())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Number of digits after the decimal point, trailing zeros included.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<PreciseDecimal> for Decimal {
    fn from(value: PreciseDecimal) -> Self {
        value.0
    }
}

impl FromStr for PreciseDecimal {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Written as a raw number literal so the scale survives
        match serde_json::value::RawValue::from_string(self.0.to_string()) {
            Ok(raw_value) => raw_value.serialize(serializer),
            Err(e) => Err(serde::ser::Error::custom(format!(
                "failed to serialize decimal '{}': {}",
                self.0, e
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Intermediate Value keeps the literal text of the number
        let json_value = serde_json::Value::deserialize(deserializer)?;

        match json_value {
            serde_json::Value::Number(n) => {
                PreciseDecimal::parse(&n.to_string()).map_err(de::Error::custom)
            }
            other => Err(de::Error::invalid_type(
                match &other {
                    serde_json::Value::Null => de::Unexpected::Unit,
                    serde_json::Value::Bool(b) => de::Unexpected::Bool(*b),
                    serde_json::Value::String(s) => de::Unexpected::Str(s),
                    serde_json::Value::Array(_) => de::Unexpected::Seq,
                    _ => de::Unexpected::Map,
                },
                &"a JSON number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scale_is_kept() {
        let value = PreciseDecimal::parse("0.010").unwrap();
        assert_eq!(value.scale(), 3);
        assert_eq!(value.to_string(), "0.010");
        assert_eq!(serde_json::to_string(&value).unwrap(), "0.010");
    }

    #[test]
    fn test_deserialize_keeps_literal() {
        let value: PreciseDecimal = serde_json::from_str("100.00").unwrap();
        assert_eq!(value.value(), dec!(100.00));
        assert_eq!(serde_json::to_string(&value).unwrap(), "100.00");

        let value: PreciseDecimal = serde_json::from_str("-0.5").unwrap();
        assert_eq!(value.to_string(), "-0.5");
    }

    #[test]
    fn test_exponent_is_normalized() {
        let value = PreciseDecimal::parse("1.5e3").unwrap();
        assert_eq!(value.value(), dec!(1500));
        let value = PreciseDecimal::parse("25E-2").unwrap();
        assert_eq!(value.value(), dec!(0.25));
    }

    #[test]
    fn test_rejects() {
        assert!(matches!(PreciseDecimal::parse("abc"), Err(FhirError::Format(_))));
        assert!(matches!(PreciseDecimal::parse(" 1"), Err(FhirError::Format(_))));
        assert!(matches!(PreciseDecimal::parse("01"), Err(FhirError::Format(_))));
        assert!(matches!(
            PreciseDecimal::parse("123456789012345678901234567890"),
            Err(FhirError::Range(_))
        ));
        assert!(matches!(PreciseDecimal::from_f64(f64::NAN), Err(FhirError::Range(_))));
        assert!(matches!(PreciseDecimal::from_f64(f64::INFINITY), Err(FhirError::Range(_))));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(PreciseDecimal::from_f64(0.1).unwrap().value(), dec!(0.1));
        assert_eq!(PreciseDecimal::from_f64(-2.5).unwrap().to_string(), "-2.5");
    }

    #[test]
    fn test_negative_zero_reads_as_zero() {
        let value: PreciseDecimal = serde_json::from_str("-0.0").unwrap();
        assert!(value.value().is_sign_positive());
        assert_eq!(value.scale(), 1);
        assert_eq!(serde_json::to_string(&value).unwrap(), "0.0");
        assert_eq!(PreciseDecimal::parse("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn test_string_is_not_a_decimal() {
        assert!(serde_json::from_str::<PreciseDecimal>("\"1.0\"").is_err());
    }

    #[test]
    fn test_equality_is_numeric() {
        assert_eq!(PreciseDecimal::parse("1.0").unwrap(), PreciseDecimal::parse("1.00").unwrap());
        assert!(PreciseDecimal::parse("1.5").unwrap() > PreciseDecimal::parse("1.49").unwrap());
    }
}
