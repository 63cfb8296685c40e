use fhir_common::PositiveInteger;
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Details of a Technology mediated contact point (phone, fax, email, etc.).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// phone | fax | email | pager | url | sms | other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,

    /// The actual contact point details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// home | work | temp | old | mobile - purpose of this contact point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<ContactPointUse>,

    /// Specify preferred order of use (1 = highest).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<PositiveInteger>,

    /// Time period when the contact point was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

fhir_common::impl_fhir_element!(Extension => ContactPoint);
