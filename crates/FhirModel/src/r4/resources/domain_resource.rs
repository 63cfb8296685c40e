use serde::{Deserialize, Serialize};

use crate::r4::*;

/// A resource with narrative, extensions, and contained resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainResource {
    /// Logical id of this artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    /// Language of the resource content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Text summary of the resource, for human interpretation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline Resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
}

fhir_common::impl_fhir_resource!(Extension => DomainResource);
