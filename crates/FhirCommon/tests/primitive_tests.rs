use fhir_common::date_time::{XsDate, XsDateTime, XsTime, XsTimeZone};
use fhir_common::{
    Date, DateTime, FhirError, Instant, Integer, PositiveInteger, PreciseDecimal, Time,
    UnsignedInteger,
};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[test]
fn test_positive_integer_bounds() {
    assert!(matches!(PositiveInteger::new(0), Err(FhirError::Range(_))));
    assert!(matches!(PositiveInteger::new(-1), Err(FhirError::Range(_))));
    assert_eq!(PositiveInteger::new(1).unwrap().value(), 1);
    assert_eq!(PositiveInteger::new(i64::MAX).unwrap().value(), i64::MAX);
}

#[test]
fn test_unsigned_integer_bounds() {
    assert!(matches!(UnsignedInteger::new(-1), Err(FhirError::Range(_))));
    assert_eq!(UnsignedInteger::new(0).unwrap().value(), 0);
    assert_eq!(UnsignedInteger::new(i64::MAX).unwrap().value(), i64::MAX);
}

#[test]
fn test_integer_is_32_bit() {
    assert_eq!(Integer::try_from(i64::from(i32::MIN)).unwrap().value(), i32::MIN);
    assert!(matches!(
        Integer::try_from(i64::from(i32::MAX) + 1),
        Err(FhirError::Range(_))
    ));
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Sample {
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<PositiveInteger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<UnsignedInteger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issued: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<PreciseDecimal>,
}

fn decode(json: &str) -> Result<Sample, FhirError> {
    serde_json::from_str(json).map_err(FhirError::from_serde)
}

#[test]
fn test_primitive_fields_in_documents() {
    let json = r#"{"count":3,"offset":0,"birthDate":"1974-12","issued":"2013-04-03T15:30:10.01+01:00","value":0.010}"#;
    let sample = decode(json).unwrap();
    assert_eq!(sample.count, Some(PositiveInteger::new(3).unwrap()));
    assert_eq!(sample.birth_date.unwrap().value(), &XsDate::new(1974, Some(12), None).unwrap());
    assert_eq!(sample.value.unwrap().value(), dec!(0.010));
    assert_eq!(serde_json::to_string(&sample).unwrap(), json);
}

#[test]
fn test_primitive_errors_surface_with_their_category() {
    assert!(matches!(decode(r#"{"count":0}"#), Err(FhirError::Range(_))));
    assert!(matches!(decode(r#"{"offset":-4}"#), Err(FhirError::Range(_))));
    assert!(matches!(decode(r#"{"birthDate":"1974/12"}"#), Err(FhirError::Format(_))));
    assert!(matches!(decode(r#"{"birthDate":"1974-02-30"}"#), Err(FhirError::Range(_))));
    assert!(matches!(decode(r#"{"birthDate":1974}"#), Err(FhirError::MalformedDocument(_))));
    assert!(matches!(decode(r#"{"value":"1.5"}"#), Err(FhirError::MalformedDocument(_))));
}

#[test]
fn test_instant_requires_time_and_zone() {
    assert!(matches!(decode(r#"{"issued":"2013-04-03"}"#), Err(FhirError::Format(_))));
    assert!(matches!(decode(r#"{"issued":"2013-04-03T15:30:10"}"#), Err(FhirError::Format(_))));

    let date_only = XsDateTime::from_date(XsDate::from_ymd(2013, 4, 3).unwrap());
    assert!(matches!(Instant::new(date_only), Err(FhirError::Range(_))));

    let full = XsDateTime::new(
        XsDate::from_ymd(2013, 4, 3).unwrap(),
        Some(XsTime::new(15, 30, Some(10), None).unwrap()),
        Some(XsTimeZone::utc()),
    )
    .unwrap();
    assert_eq!(Instant::new(full).unwrap().to_string(), "2013-04-03T15:30:10Z");
}

#[test]
fn test_temporal_wrappers_parse() {
    let date_time: DateTime = "2015-02-07T13:28:17-05:00".parse().unwrap();
    assert_eq!(date_time.value().time_zone(), Some(&XsTimeZone::offset(5, 0, false).unwrap()));
    assert_eq!(date_time.to_string(), "2015-02-07T13:28:17-05:00");

    let time: Time = "08:30:00".parse().unwrap();
    assert_eq!(time.value().hour(), 8);

    let date: Date = "2012".parse().unwrap();
    assert_eq!(date.value().month(), None);
}

#[test]
fn test_integers_beyond_64_bits_are_range_errors() {
    assert!(matches!(
        decode(r#"{"count":9223372036854775808}"#),
        Err(FhirError::Range(_))
    ));
    assert!(matches!(
        decode(r#"{"offset":123456789012345678901234567890}"#),
        Err(FhirError::Range(_))
    ));
    assert!(matches!(
        decode(r#"{"offset":-9223372036854775809}"#),
        Err(FhirError::Range(_))
    ));
    assert!(matches!(decode(r#"{"count":1.5}"#), Err(FhirError::MalformedDocument(_))));
    assert!(matches!(decode(r#"{"count":"3"}"#), Err(FhirError::MalformedDocument(_))));
}
