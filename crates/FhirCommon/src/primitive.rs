//! FHIR primitive wrappers that carry their own range rules.
//!
//! Integers are written as JSON numbers; the temporal wrappers are written as
//! strings in their FHIR grammar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::date_time::{DatePrecision, XsDate, XsDateTime, XsDateTimeParser, XsParser, XsTime};
use crate::error::{FhirError, Result};

/// FHIR `integer`: a signed 32-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Integer(i32);

impl Integer {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Integer {
    type Error = FhirError;

    fn try_from(value: i64) -> Result<Self> {
        i32::try_from(value)
            .map(Self)
            .map_err(|_| FhirError::range(format!("integer {} does not fit in 32 bits", value)))
    }
}

/// FHIR `positiveInt`: at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PositiveInteger(i64);

impl PositiveInteger {
    pub fn new(value: i64) -> Result<Self> {
        if value < 1 {
            return Err(FhirError::range(format!(
                "positive integer must be at least 1, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PositiveInteger {
    type Error = FhirError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

/// FHIR `unsignedInt`: at least 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UnsignedInteger(i64);

impl UnsignedInteger {
    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(FhirError::range(format!(
                "unsigned integer must not be negative, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UnsignedInteger {
    type Error = FhirError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

/// Reads a JSON integer. Integer literals beyond `i64` are a range error
/// rather than a type mismatch.
fn integer_literal<E: de::Error>(value: serde_json::Value) -> std::result::Result<i64, E> {
    let number = match value {
        serde_json::Value::Number(number) => number,
        serde_json::Value::Null => return Err(E::invalid_type(de::Unexpected::Unit, &"an integer")),
        serde_json::Value::Bool(b) => return Err(E::invalid_type(de::Unexpected::Bool(b), &"an integer")),
        serde_json::Value::String(s) => return Err(E::invalid_type(de::Unexpected::Str(&s), &"an integer")),
        serde_json::Value::Array(_) => return Err(E::invalid_type(de::Unexpected::Seq, &"an integer")),
        serde_json::Value::Object(_) => return Err(E::invalid_type(de::Unexpected::Map, &"an integer")),
    };
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    let text = number.to_string();
    let digits = text.strip_prefix('-').unwrap_or(&text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Err(E::custom(FhirError::range(format!("integer {} out of range", text))))
    } else {
        Err(E::invalid_type(de::Unexpected::Other(&text), &"an integer"))
    }
}

macro_rules! integer_deserialize {
    ($($name:ident),+) => {
        $(
            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = integer_literal(serde_json::Value::deserialize(deserializer)?)?;
                    $name::try_from(value).map_err(de::Error::custom)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )+
    };
}

integer_deserialize!(Integer, PositiveInteger, UnsignedInteger);

/// FHIR `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(XsDate);

impl Date {
    pub fn new(value: XsDate) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &XsDate {
        &self.0
    }
}

/// FHIR `dateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime(XsDateTime);

impl DateTime {
    pub fn new(value: XsDateTime) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &XsDateTime {
        &self.0
    }
}

/// FHIR `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(XsTime);

impl Time {
    pub fn new(value: XsTime) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &XsTime {
        &self.0
    }
}

/// FHIR `instant`: a date-time down to the second with a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(XsDateTime);

impl Instant {
    pub fn new(value: XsDateTime) -> Result<Self> {
        if value.date().precision() != DatePrecision::Full || value.time().is_none() {
            return Err(FhirError::range(format!(
                "instant '{}' needs a full date, a time and a timezone",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &XsDateTime {
        &self.0
    }
}

impl FromStr for Instant {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self> {
        if !s.contains('T') {
            return Err(FhirError::format(format!("'{}' is not an instant", s)));
        }
        Self::new(XsDateTimeParser::parse(s)?)
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Instant::from_str(&s).map_err(de::Error::custom)
    }
}

macro_rules! temporal_text_impls {
    ($($name:ident => $inner:ty),+) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            impl From<$name> for $inner {
                fn from(value: $name) -> Self {
                    value.0
                }
            }
        )+
    };
}

temporal_text_impls!(Date => XsDate, DateTime => XsDateTime, Time => XsTime, Instant => XsDateTime);

impl From<XsDate> for Date {
    fn from(value: XsDate) -> Self {
        Self(value)
    }
}

impl From<XsDateTime> for DateTime {
    fn from(value: XsDateTime) -> Self {
        Self(value)
    }
}

impl From<XsTime> for Time {
    fn from(value: XsTime) -> Self {
        Self(value)
    }
}

impl FromStr for Date {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self)
    }
}

impl FromStr for DateTime {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self)
    }
}

impl FromStr for Time {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self)
    }
}
