use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// An address expressed using postal conventions (as opposed to GPS or other location definition formats).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// home | work | temp | old - purpose of this address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<AddressUse>,

    /// postal | physical | both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<AddressType>,

    /// Text representation of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Street name, number, direction & P.O. Box etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<String>>,

    /// Name of city, town etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// District name (aka county).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Sub-unit of country (abbreviations ok).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code for area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country (e.g. can be ISO 3166 2 or 3 letter code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Time period when address was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

fhir_common::impl_fhir_element!(Extension => Address);
