use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Concept - reference to a terminology or just text.
///
/// A concept that may be defined by a formal reference to a terminology or ontology or may be provided
/// by text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Code defined by a terminology system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,

    /// Plain text representation of the concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fhir_common::impl_fhir_element!(Extension => CodeableConcept);
