use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// An identifier intended for computation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// usual | official | temp | secondary (If known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<IdentifierUse>,

    /// Description of identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,

    /// The namespace for the identifier value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// The value that is unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Time period when id is/was valid for use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that issued id (may be just text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Reference>,
}

fhir_common::impl_fhir_element!(Extension => Identifier);
