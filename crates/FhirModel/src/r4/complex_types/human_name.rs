use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Name of a human - parts and usage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// usual | official | temp | nickname | anonymous | old | maiden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<NameUse>,

    /// Text representation of the full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Family name (often called 'Surname').
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given names (not always 'first'). Includes middle names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<String>>,

    /// Parts that come before the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,

    /// Parts that come after the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<String>>,

    /// Time period when name was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

fhir_common::impl_fhir_element!(Extension => HumanName);
