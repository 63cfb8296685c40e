use fhir_common::{Date, DateTime, Integer, PreciseDecimal};
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Optional Extensions Element.
///
/// Optional Extension Element - found in all resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// identifies the meaning of the extension.
    pub url: String,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_integer: Option<Integer>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_decimal: Option<PreciseDecimal>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<String>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_code: Option<String>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date: Option<Date>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date_time: Option<DateTime>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_coding: Option<Coding>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_reference: Option<Reference>,

    /// Value of extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_period: Option<Period>,
}

fhir_common::impl_fhir_element!(Extension => Extension);
