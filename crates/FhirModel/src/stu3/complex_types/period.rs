use fhir_common::DateTime;
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Time range defined by start and end date/time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Starting time with inclusive boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime>,

    /// End time with inclusive boundary, if not ongoing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime>,
}

fhir_common::impl_fhir_element!(Extension => Period);
