use fhir_common::Instant;
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Metadata about a resource.
///
/// The metadata about a resource. This is content in the resource that is maintained by the
/// infrastructure. Changes to the content might not always be associated with version changes to the
/// resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Version specific identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    /// When the resource version last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Instant>,

    /// Identifies where the resource comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Profiles this resource claims to conform to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<String>>,

    /// Security Labels applied to this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<Coding>>,

    /// Tags applied to this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<Coding>>,
}

fhir_common::impl_fhir_element!(Extension => Meta);
