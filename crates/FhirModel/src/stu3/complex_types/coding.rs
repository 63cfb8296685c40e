use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// A reference to a code defined by a terminology system.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Identity of the terminology system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Version of the system - if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Symbol in syntax defined by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Representation defined by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// If this coding was chosen directly by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
}

fhir_common::impl_fhir_element!(Extension => Coding);
