use serde::{Deserialize, Serialize};

use crate::r4::*;

/// A reference from one resource to another.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Literal reference, Relative, internal or absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Type the reference refers to (e.g. "Patient").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Logical reference, when literal reference is not known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,

    /// Text alternative for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

fhir_common::impl_fhir_element!(Extension => Reference);
