use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// A human-readable formatted text, including images.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// generated | extensions | additional | empty.
    pub status: NarrativeStatus,

    /// Limited xhtml content.
    pub div: String,
}

fhir_common::impl_fhir_element!(Extension => Narrative);
