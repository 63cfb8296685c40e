use serde::{Deserialize, Serialize};

use crate::r4::*;

/// A ratio of two Quantity values - a numerator and a denominator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerator value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,

    /// Denominator value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,
}

fhir_common::impl_fhir_element!(Extension => Ratio);
