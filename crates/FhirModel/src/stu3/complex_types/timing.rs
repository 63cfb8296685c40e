use fhir_common::{DateTime, Integer, PreciseDecimal, Time, UnsignedInteger};
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// A timing schedule that specifies an event that may occur multiple times.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// When the event occurs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<DateTime>>,

    /// When the event is to occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,

    /// BID | TID | QID | AM | PM | QD | QOD | Q4H | Q6H +.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

fhir_common::impl_fhir_element!(Extension => Timing);

/// When the event is to occur.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Length/Range of lengths, or (Start and/or end) limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds_range: Option<Range>,

    /// Length/Range of lengths, or (Start and/or end) limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds_period: Option<Period>,

    /// Number of times to repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Integer>,

    /// Maximum number of times to repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<Integer>,

    /// How long when it happens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<PreciseDecimal>,

    /// How long when it happens (Max).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<PreciseDecimal>,

    /// s | min | h | d | wk | mo | a - unit of time (UCUM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<UnitsOfTime>,

    /// Event occurs frequency times per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Integer>,

    /// Event occurs up to frequencyMax times per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<Integer>,

    /// Event occurs frequency times per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PreciseDecimal>,

    /// Upper limit of period (3-4 hours).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<PreciseDecimal>,

    /// s | min | h | d | wk | mo | a - unit of time (UCUM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<UnitsOfTime>,

    /// mon | tue | wed | thu | fri | sat | sun.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Vec<String>>,

    /// Time of day for action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<Vec<Time>>,

    /// Regular life events the event is tied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Vec<String>>,

    /// Minutes from event (before or after).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<UnsignedInteger>,
}

fhir_common::impl_fhir_element!(Extension => TimingRepeat);
