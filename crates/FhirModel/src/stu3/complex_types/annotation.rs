use fhir_common::DateTime;
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Text node with attribution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Individual responsible for the annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_reference: Option<Reference>,

    /// Individual responsible for the annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_string: Option<String>,

    /// When the annotation was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime>,

    /// The annotation  - text content.
    pub text: String,
}

fhir_common::impl_fhir_element!(Extension => Annotation);
