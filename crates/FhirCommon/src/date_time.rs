use std::fmt;
use std::str::FromStr;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{FhirError, Result};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?([0-9]{4})(?:-([0-9]{2})(?:-([0-9]{2}))?)?$").expect("valid date pattern")
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]+))?$").expect("valid time pattern")
});

static TIME_ZONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(Z)|([+-])([0-9]{2}):([0-9]{2}))$").expect("valid time zone pattern")
});

static TIME_WITH_ZONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?)(Z|[+-][0-9]{2}:[0-9]{2})?$")
        .expect("valid date time pattern")
});

const MIN_YEAR: i32 = -9999;
const MAX_YEAR: i32 = 9999;

/// Precision levels for FHIR Date values.
///
/// FHIR dates support partial precision, allowing year-only, year-month,
/// or full date specifications. This enum tracks which components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// A partial calendar date as used by FHIR `date` and `dateTime`.
///
/// # FHIR Date Formats
/// - `YYYY` - Year only
/// - `YYYY-MM` - Year and month
/// - `YYYY-MM-DD` - Full date
/// - a leading `-` marks a BCE year, e.g. `-0044-03-15`
///
/// # Examples
/// ```rust
/// use fhir_common::date_time::{XsDate, DatePrecision};
///
/// let date = XsDate::new(2023, Some(3), None).unwrap();
/// assert_eq!(date.precision(), DatePrecision::YearMonth);
/// assert_eq!(date.to_string(), "2023-03");
///
/// // February 30th does not exist
/// assert!(XsDate::new(2023, Some(2), Some(30)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsDate {
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
}

impl XsDate {
    /// Creates a date, rejecting out-of-range or non-existent components.
    pub fn new(year: i32, month: Option<u8>, day: Option<u8>) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(FhirError::range(format!(
                "year {} outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        if let Some(month) = month {
            if !(1..=12).contains(&month) {
                return Err(FhirError::range(format!("month {} outside 1..=12", month)));
            }
        }
        if let Some(day) = day {
            let month = month.ok_or_else(|| {
                FhirError::range(format!("day {} given without a month", day))
            })?;
            if NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).is_none() {
                return Err(FhirError::range(format!(
                    "day {} does not exist in {:04}-{:02}",
                    day, year, month
                )));
            }
        }
        Ok(Self { year, month, day })
    }

    pub fn from_year(year: i32) -> Result<Self> {
        Self::new(year, None, None)
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        Self::new(year, Some(month), Some(day))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    /// Returns the precision level of this date.
    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (None, _) => DatePrecision::Year,
            (Some(_), None) => DatePrecision::YearMonth,
            (Some(_), Some(_)) => DatePrecision::Full,
        }
    }

    /// Converts a full-precision date to a `NaiveDate`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match (self.month, self.day) {
            (Some(month), Some(day)) => {
                NaiveDate::from_ymd_opt(self.year, u32::from(month), u32::from(day))
            }
            _ => None,
        }
    }
}

/// A wall-clock time with optional fractional seconds.
///
/// The fraction is kept as a `Decimal` so every written digit survives, which
/// includes leading zeros: `.00001` has a padding of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsTime {
    hour: u8,
    minute: u8,
    second: u8,
    fraction: Option<Decimal>,
}

impl XsTime {
    /// Creates a time. A missing second is stored as `0`, which is also how it
    /// is written.
    pub fn new(hour: u8, minute: u8, second: Option<u8>, fraction: Option<Decimal>) -> Result<Self> {
        if hour > 23 {
            return Err(FhirError::range(format!("hour {} outside 0..=23", hour)));
        }
        if minute > 59 {
            return Err(FhirError::range(format!("minute {} outside 0..=59", minute)));
        }
        let second = second.unwrap_or(0);
        if second > 59 {
            return Err(FhirError::range(format!("second {} outside 0..=59", second)));
        }
        if let Some(fraction) = fraction {
            if fraction <= Decimal::ZERO || fraction >= Decimal::ONE {
                return Err(FhirError::range(format!(
                    "fraction of second {} must lie strictly between 0 and 1",
                    fraction
                )));
            }
        }
        Ok(Self {
            hour,
            minute,
            second,
            fraction,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn fraction(&self) -> Option<Decimal> {
        self.fraction
    }

    /// Number of zeros between the decimal point and the first significant
    /// fraction digit.
    pub fn fraction_padding(&self) -> u32 {
        self.fraction.map_or(0, |fraction| {
            let digits = fraction.mantissa().unsigned_abs().to_string().len() as u32;
            fraction.scale().saturating_sub(digits)
        })
    }

    /// Converts to a `NaiveTime`, truncating the fraction to nanoseconds.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let nanos = match self.fraction {
            Some(fraction) => (fraction * Decimal::from(1_000_000_000u32)).trunc().to_u32()?,
            None => 0,
        };
        NaiveTime::from_hms_nano_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            nanos,
        )
    }
}

/// A timezone designator.
///
/// `Z` and `+00:00` denote the same offset but are distinct values: `Z` has
/// `zero_offset_gmt == false`, an explicit `+00:00` has `zero_offset_gmt ==
/// true`. For non-zero offsets the flag is always `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsTimeZone {
    offset_hours: u8,
    offset_minutes: u8,
    is_positive: bool,
    zero_offset_gmt: bool,
}

impl XsTimeZone {
    pub fn new(
        offset_hours: u8,
        offset_minutes: u8,
        is_positive: bool,
        zero_offset_gmt: bool,
    ) -> Result<Self> {
        if offset_hours > 23 {
            return Err(FhirError::range(format!(
                "timezone hour {} outside 0..=23",
                offset_hours
            )));
        }
        if offset_minutes > 59 {
            return Err(FhirError::range(format!(
                "timezone minute {} outside 0..=59",
                offset_minutes
            )));
        }
        let is_zero = offset_hours == 0 && offset_minutes == 0;
        Ok(Self {
            offset_hours,
            offset_minutes,
            // `Z` carries no sign
            is_positive: is_positive || (is_zero && !zero_offset_gmt),
            zero_offset_gmt: zero_offset_gmt || !is_zero,
        })
    }

    /// The `Z` designator.
    pub fn utc() -> Self {
        Self {
            offset_hours: 0,
            offset_minutes: 0,
            is_positive: true,
            zero_offset_gmt: false,
        }
    }

    /// An explicit `±HH:MM` offset.
    pub fn offset(offset_hours: u8, offset_minutes: u8, is_positive: bool) -> Result<Self> {
        Self::new(offset_hours, offset_minutes, is_positive, true)
    }

    pub fn offset_hours(&self) -> u8 {
        self.offset_hours
    }

    pub fn offset_minutes(&self) -> u8 {
        self.offset_minutes
    }

    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    pub fn zero_offset_gmt(&self) -> bool {
        self.zero_offset_gmt
    }

    /// Signed offset from UTC in minutes.
    pub fn total_offset_minutes(&self) -> i32 {
        let minutes = i32::from(self.offset_hours) * 60 + i32::from(self.offset_minutes);
        if self.is_positive { minutes } else { -minutes }
    }
}

/// A FHIR `dateTime`: a partial date, or a full date with time and timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsDateTime {
    date: XsDate,
    time: Option<XsTime>,
    time_zone: Option<XsTimeZone>,
}

impl XsDateTime {
    /// Creates a date-time. Time and timezone must be given together, and only
    /// on top of a full date.
    pub fn new(date: XsDate, time: Option<XsTime>, time_zone: Option<XsTimeZone>) -> Result<Self> {
        match (&time, &time_zone) {
            (Some(_), None) => {
                return Err(FhirError::range("a time requires a timezone"));
            }
            (None, Some(_)) => {
                return Err(FhirError::range("a timezone requires a time"));
            }
            (Some(_), Some(_)) if date.precision() != DatePrecision::Full => {
                return Err(FhirError::range(format!(
                    "a time requires a full date, got {}",
                    XsDateParser::format(&date)
                )));
            }
            _ => {}
        }
        Ok(Self {
            date,
            time,
            time_zone,
        })
    }

    pub fn from_date(date: XsDate) -> Self {
        Self {
            date,
            time: None,
            time_zone: None,
        }
    }

    pub fn date(&self) -> &XsDate {
        &self.date
    }

    pub fn time(&self) -> Option<&XsTime> {
        self.time.as_ref()
    }

    pub fn time_zone(&self) -> Option<&XsTimeZone> {
        self.time_zone.as_ref()
    }

    /// Converts a date-time carrying a time to a chrono value with its offset.
    pub fn to_fixed_offset(&self) -> Option<ChronoDateTime<FixedOffset>> {
        let naive = self.date.to_naive_date()?.and_time(self.time?.to_naive_time()?);
        let offset = FixedOffset::east_opt(self.time_zone?.total_offset_minutes() * 60)?;
        naive.and_local_timezone(offset).single()
    }
}

/// Text codec for one of the `xs:` value types.
pub trait XsParser {
    type Value;

    /// Parses the complete input, failing on any unmatched text.
    fn parse(input: &str) -> Result<Self::Value>;

    fn format(value: &Self::Value) -> String;
}

/// Codec for `-?YYYY(-MM(-DD)?)?`.
pub struct XsDateParser;

impl XsParser for XsDateParser {
    type Value = XsDate;

    fn parse(input: &str) -> Result<XsDate> {
        let captures = DATE_PATTERN
            .captures(input)
            .ok_or_else(|| FhirError::format(format!("'{}' is not a date", input)))?;

        let magnitude: i32 = parse_number(&captures[2], input)?;
        let year = if captures.get(1).is_some() { -magnitude } else { magnitude };
        let month = captures.get(3).map(|m| parse_number(m.as_str(), input)).transpose()?;
        let day = captures.get(4).map(|d| parse_number(d.as_str(), input)).transpose()?;

        XsDate::new(year, month, day)
    }

    fn format(value: &XsDate) -> String {
        let mut out = if value.year < 0 {
            format!("-{:04}", value.year.unsigned_abs())
        } else {
            format!("{:04}", value.year)
        };
        if let Some(month) = value.month {
            out.push_str(&format!("-{:02}", month));
            if let Some(day) = value.day {
                out.push_str(&format!("-{:02}", day));
            }
        }
        out
    }
}

/// Codec for `HH:MM:SS(.fraction)?`.
pub struct XsTimeParser;

impl XsParser for XsTimeParser {
    type Value = XsTime;

    fn parse(input: &str) -> Result<XsTime> {
        let captures = TIME_PATTERN
            .captures(input)
            .ok_or_else(|| FhirError::format(format!("'{}' is not a time", input)))?;

        let hour = parse_number(&captures[1], input)?;
        let minute = parse_number(&captures[2], input)?;
        let second = parse_number(&captures[3], input)?;
        let fraction = captures
            .get(4)
            .map(|digits| {
                Decimal::from_str_exact(&format!("0.{}", digits.as_str())).map_err(|_| {
                    FhirError::range(format!("fraction of second in '{}' is too precise", input))
                })
            })
            .transpose()?;

        XsTime::new(hour, minute, Some(second), fraction)
    }

    fn format(value: &XsTime) -> String {
        let mut out = format!("{:02}:{:02}:{:02}", value.hour, value.minute, value.second);
        if let Some(fraction) = value.fraction {
            let text = fraction.to_string();
            out.push_str(text.strip_prefix('0').unwrap_or(&text));
        }
        out
    }
}

/// Codec for `Z | [+-]HH:MM`.
pub struct XsTimeZoneParser;

impl XsParser for XsTimeZoneParser {
    type Value = XsTimeZone;

    fn parse(input: &str) -> Result<XsTimeZone> {
        let captures = TIME_ZONE_PATTERN
            .captures(input)
            .ok_or_else(|| FhirError::format(format!("'{}' is not a timezone", input)))?;

        if captures.get(1).is_some() {
            return Ok(XsTimeZone::utc());
        }
        let is_positive = &captures[2] == "+";
        let hours = parse_number(&captures[3], input)?;
        let minutes = parse_number(&captures[4], input)?;
        XsTimeZone::new(hours, minutes, is_positive, true)
    }

    fn format(value: &XsTimeZone) -> String {
        if !value.zero_offset_gmt {
            return "Z".to_string();
        }
        let sign = if value.is_positive { '+' } else { '-' };
        format!("{}{:02}:{:02}", sign, value.offset_hours, value.offset_minutes)
    }
}

/// Codec for `date` or `dateTHH:MM:SS(.fraction)?zone`.
pub struct XsDateTimeParser;

impl XsParser for XsDateTimeParser {
    type Value = XsDateTime;

    fn parse(input: &str) -> Result<XsDateTime> {
        let Some((date_part, rest)) = input.split_once('T') else {
            return Ok(XsDateTime::from_date(XsDateParser::parse(input)?));
        };

        let date = XsDateParser::parse(date_part)?;
        let captures = TIME_WITH_ZONE_PATTERN
            .captures(rest)
            .ok_or_else(|| FhirError::format(format!("'{}' is not a date-time", input)))?;
        let zone = captures.get(2).ok_or_else(|| {
            FhirError::format(format!("'{}' has a time but no timezone", input))
        })?;

        let time = XsTimeParser::parse(&captures[1])?;
        let time_zone = XsTimeZoneParser::parse(zone.as_str())?;
        XsDateTime::new(date, Some(time), Some(time_zone))
    }

    fn format(value: &XsDateTime) -> String {
        let mut out = XsDateParser::format(&value.date);
        if let (Some(time), Some(zone)) = (&value.time, &value.time_zone) {
            out.push('T');
            out.push_str(&XsTimeParser::format(time));
            out.push_str(&XsTimeZoneParser::format(zone));
        }
        out
    }
}

fn parse_number<N: FromStr>(digits: &str, input: &str) -> Result<N> {
    digits
        .parse()
        .map_err(|_| FhirError::format(format!("'{}' has a malformed number '{}'", input, digits)))
}

macro_rules! xs_text_impls {
    ($value:ty, $parser:ty) => {
        impl fmt::Display for $value {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&<$parser>::format(self))
            }
        }

        impl FromStr for $value {
            type Err = FhirError;

            fn from_str(s: &str) -> Result<Self> {
                <$parser>::parse(s)
            }
        }

        impl Serialize for $value {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&<$parser>::format(self))
            }
        }

        impl<'de> Deserialize<'de> for $value {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$parser>::parse(&s).map_err(de::Error::custom)
            }
        }
    };
}

xs_text_impls!(XsDate, XsDateParser);
xs_text_impls!(XsTime, XsTimeParser);
xs_text_impls!(XsTimeZone, XsTimeZoneParser);
xs_text_impls!(XsDateTime, XsDateTimeParser);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: Option<u8>, day: Option<u8>) -> XsDate {
        XsDate::new(year, month, day).unwrap()
    }

    fn time(hour: u8, minute: u8, second: Option<u8>, fraction: Option<Decimal>) -> XsTime {
        XsTime::new(hour, minute, second, fraction).unwrap()
    }

    #[test]
    fn test_date_parse() {
        assert_eq!(XsDateParser::parse("1000").unwrap(), date(1000, None, None));
        assert_eq!(XsDateParser::parse("9999").unwrap(), date(9999, None, None));
        assert_eq!(XsDateParser::parse("2015-12").unwrap(), date(2015, Some(12), None));
        assert_eq!(XsDateParser::parse("2015-01-31").unwrap(), date(2015, Some(1), Some(31)));
        assert_eq!(XsDateParser::parse("-0044-03-15").unwrap(), date(-44, Some(3), Some(15)));
    }

    #[test]
    fn test_date_parse_rejects() {
        for input in ["", " ", "abc", "999", "-999", "10000", "-10000", "-1", "2015-1", "2015-01-1"] {
            assert!(
                matches!(XsDateParser::parse(input), Err(FhirError::Format(_))),
                "expected format error for {:?}",
                input
            );
        }
        for input in ["2017-13", "2017-00", "2017-11-00", "2017-11-32", "2017-00-12", "2017-02-29"] {
            assert!(
                matches!(XsDateParser::parse(input), Err(FhirError::Range(_))),
                "expected range error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_date_leap_years() {
        assert!(XsDate::from_ymd(2016, 2, 29).is_ok());
        assert!(XsDate::from_ymd(2000, 2, 29).is_ok());
        assert!(XsDate::from_ymd(1900, 2, 29).is_err());
        assert!(XsDate::from_ymd(2015, 4, 31).is_err());
    }

    #[test]
    fn test_date_day_requires_month() {
        assert!(matches!(XsDate::new(2015, None, Some(3)), Err(FhirError::Range(_))));
    }

    #[test]
    fn test_date_format_negative_year() {
        assert_eq!(XsDateParser::format(&date(-44, None, None)), "-0044");
        assert_eq!(XsDateParser::format(&date(-44, Some(3), Some(15))), "-0044-03-15");
        assert_eq!(XsDateParser::format(&date(7, Some(1), None)), "0007-01");
    }

    #[test]
    fn test_date_round_trip() {
        for (year, month, day) in [
            (2015, None, None),
            (2015, Some(5), None),
            (2015, Some(11), Some(9)),
            (-9999, Some(12), Some(31)),
            (9999, Some(1), Some(1)),
            (2020, Some(2), Some(29)),
        ] {
            let value = date(year, month, day);
            assert_eq!(XsDateParser::parse(&XsDateParser::format(&value)).unwrap(), value);
        }
    }

    #[test]
    fn test_time_parse_and_format() {
        assert_eq!(XsTimeParser::parse("21:32:52").unwrap(), time(21, 32, Some(52), None));
        assert_eq!(
            XsTimeParser::parse("21:32:52.12679").unwrap(),
            time(21, 32, Some(52), Some(dec!(0.12679)))
        );
        assert_eq!(XsTimeParser::format(&time(0, 0, None, None)), "00:00:00");
        assert_eq!(XsTimeParser::format(&time(12, 12, Some(12), Some(dec!(0.00001)))), "12:12:12.00001");
        assert_eq!(XsTimeParser::format(&time(1, 2, Some(3), None)), "01:02:03");
    }

    #[test]
    fn test_time_fraction_padding() {
        let value = XsTimeParser::parse("00:00:00.00001").unwrap();
        assert_eq!(value.fraction_padding(), 4);
        assert_eq!(XsTimeParser::format(&value), "00:00:00.00001");

        let value = XsTimeParser::parse("00:00:00.5").unwrap();
        assert_eq!(value.fraction_padding(), 0);
    }

    #[test]
    fn test_time_rejects() {
        assert!(matches!(XsTimeParser::parse("24:00:00"), Err(FhirError::Range(_))));
        assert!(matches!(XsTimeParser::parse("12:60:00"), Err(FhirError::Range(_))));
        assert!(matches!(XsTimeParser::parse("12:00:60"), Err(FhirError::Range(_))));
        assert!(matches!(XsTimeParser::parse("12:00:00.000"), Err(FhirError::Range(_))));
        assert!(matches!(XsTimeParser::parse("12:00"), Err(FhirError::Format(_))));
        assert!(matches!(XsTimeParser::parse("1:00:00"), Err(FhirError::Format(_))));
        assert!(XsTime::new(1, 1, Some(1), Some(dec!(1.0))).is_err());
    }

    #[test]
    fn test_time_to_naive_time() {
        let value = XsTimeParser::parse("21:32:52.999999999").unwrap();
        assert_eq!(
            value.to_naive_time(),
            NaiveTime::from_hms_nano_opt(21, 32, 52, 999_999_999)
        );
    }

    #[test]
    fn test_time_zone_z_differs_from_explicit_zero() {
        let z = XsTimeZoneParser::parse("Z").unwrap();
        let explicit = XsTimeZoneParser::parse("+00:00").unwrap();
        assert_eq!(XsTimeZoneParser::format(&z), "Z");
        assert_eq!(XsTimeZoneParser::format(&explicit), "+00:00");
        assert_ne!(z, explicit);
        assert!(!z.zero_offset_gmt());
        assert!(explicit.zero_offset_gmt());
        assert_eq!(z.total_offset_minutes(), explicit.total_offset_minutes());
    }

    #[test]
    fn test_time_zone_offsets() {
        let zone = XsTimeZoneParser::parse("-05:30").unwrap();
        assert_eq!(zone, XsTimeZone::offset(5, 30, false).unwrap());
        assert_eq!(zone.total_offset_minutes(), -330);
        assert_eq!(XsTimeZoneParser::format(&zone), "-05:30");
        assert_eq!(XsTimeZoneParser::format(&XsTimeZone::offset(1, 0, true).unwrap()), "+01:00");
        assert_eq!(XsTimeZoneParser::format(&XsTimeZone::new(0, 0, true, false).unwrap()), "Z");

        assert!(matches!(XsTimeZoneParser::parse("+24:00"), Err(FhirError::Range(_))));
        assert!(matches!(XsTimeZoneParser::parse("+01"), Err(FhirError::Format(_))));
        assert!(matches!(XsTimeZoneParser::parse("z"), Err(FhirError::Format(_))));
    }

    #[test]
    fn test_date_time_parse() {
        assert_eq!(
            XsDateTimeParser::parse("2015-01-31T21:32:52Z").unwrap(),
            XsDateTime::new(
                date(2015, Some(1), Some(31)),
                Some(time(21, 32, Some(52), None)),
                Some(XsTimeZone::utc())
            )
            .unwrap()
        );
        assert_eq!(
            XsDateTimeParser::parse("2015-01-31T21:32:52.000000001Z").unwrap(),
            XsDateTime::new(
                date(2015, Some(1), Some(31)),
                Some(time(21, 32, Some(52), Some(dec!(0.000000001)))),
                Some(XsTimeZone::utc())
            )
            .unwrap()
        );
        assert_eq!(
            XsDateTimeParser::parse("2015-01-31T21:32:52.12679+01:00").unwrap(),
            XsDateTime::new(
                date(2015, Some(1), Some(31)),
                Some(time(21, 32, Some(52), Some(dec!(0.12679)))),
                Some(XsTimeZone::offset(1, 0, true).unwrap())
            )
            .unwrap()
        );
        assert_eq!(
            XsDateTimeParser::parse("2015-12").unwrap(),
            XsDateTime::from_date(date(2015, Some(12), None))
        );
    }

    #[test]
    fn test_date_time_rejects() {
        assert!(matches!(
            XsDateTimeParser::parse("2017-11-00T01:12:31"),
            Err(FhirError::Format(_)) | Err(FhirError::Range(_))
        ));
        assert!(matches!(XsDateTimeParser::parse("2017-11-10T01:12:31"), Err(FhirError::Format(_))));
        assert!(matches!(XsDateTimeParser::parse("2017-11T01:12:31Z"), Err(FhirError::Range(_))));
        assert!(matches!(XsDateTimeParser::parse("2017-11-10T"), Err(FhirError::Format(_))));
    }

    #[test]
    fn test_date_time_invariant() {
        let full = date(2015, Some(11), Some(9));
        assert!(XsDateTime::new(full, Some(time(1, 0, None, None)), None).is_err());
        assert!(XsDateTime::new(full, None, Some(XsTimeZone::utc())).is_err());
    }

    #[test]
    fn test_date_time_format() {
        let full = date(2015, Some(11), Some(9));
        let cases = [
            (XsDateTime::new(full, Some(time(0, 0, None, None)), Some(XsTimeZone::utc())), "2015-11-09T00:00:00Z"),
            (
                XsDateTime::new(full, Some(time(12, 12, Some(12), Some(dec!(0.00026)))), Some(XsTimeZone::offset(1, 0, true).unwrap())),
                "2015-11-09T12:12:12.00026+01:00",
            ),
            (
                XsDateTime::new(full, Some(time(12, 12, Some(12), None)), Some(XsTimeZone::offset(5, 0, false).unwrap())),
                "2015-11-09T12:12:12-05:00",
            ),
            (
                XsDateTime::new(full, Some(time(12, 12, Some(12), None)), Some(XsTimeZone::offset(0, 0, true).unwrap())),
                "2015-11-09T12:12:12+00:00",
            ),
        ];
        for (value, expected) in cases {
            assert_eq!(XsDateTimeParser::format(&value.unwrap()), expected);
        }
    }

    #[test]
    fn test_date_time_to_fixed_offset() {
        let value = XsDateTimeParser::parse("2015-01-31T21:32:52+01:00").unwrap();
        let chrono_value = value.to_fixed_offset().unwrap();
        assert_eq!(chrono_value.to_rfc3339(), "2015-01-31T21:32:52+01:00");
        assert!(XsDateTimeParser::parse("2015-01").unwrap().to_fixed_offset().is_none());
    }

    #[test]
    fn test_serde_uses_text_form() {
        let value: XsDateTime = serde_json::from_str("\"2015-01-31T21:32:52.12679Z\"").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"2015-01-31T21:32:52.12679Z\"");

        let err = serde_json::from_str::<XsDate>("\"2017-13\"").unwrap_err();
        assert!(matches!(FhirError::from_serde(err), FhirError::Range(_)));
    }
}
