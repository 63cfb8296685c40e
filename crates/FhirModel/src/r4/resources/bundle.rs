use fhir_common::{Instant, UnsignedInteger};
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Contains a collection of resources.
///
/// A container for a collection of resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
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

    /// Persistent identifier for the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection.
    pub r#type: BundleType,

    /// When the bundle was assembled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Instant>,

    /// If search, the total number of matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<UnsignedInteger>,

    /// Links related to this Bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<BundleLink>>,

    /// Entry in the bundle - will have a resource or information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<BundleEntry>>,
}

impl fhir_common::FhirType for Bundle {
    const TYPE_NAME: &'static str = "Bundle";
}

// Bundle derives from Resource directly and carries no extensions
impl fhir_common::FhirElement for Bundle {
    type Extension = Extension;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> Option<&[Extension]> {
        None
    }
}

impl fhir_common::FhirResource for Bundle {}

/// Links related to this Bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleLink {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1.
    pub relation: String,

    /// Reference details for the link.
    pub url: String,
}

fhir_common::impl_fhir_element!(Extension => BundleLink);

/// Entry in the bundle - will have a resource or information.
///
/// An entry in a bundle resource - will either contain a resource or information about a
/// resource (transactions and history only).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Links related to this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<BundleLink>>,

    /// URI for resource (Absolute URL server address or URI for UUID/OID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// A resource in the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    /// Additional execution information (transaction/batch/history).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleEntryRequest>,

    /// Results of execution (transaction/batch/history).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BundleEntryResponse>,
}

fhir_common::impl_fhir_element!(Extension => BundleEntry);

/// Additional execution information (transaction/batch/history).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryRequest {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// GET | HEAD | POST | PUT | DELETE | PATCH.
    pub method: HTTPVerb,

    /// URL for HTTP equivalent of this entry.
    pub url: String,

    /// For managing cache currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_match: Option<String>,

    /// For managing cache currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_modified_since: Option<Instant>,

    /// For managing update contention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,

    /// For conditional creates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_exist: Option<String>,
}

fhir_common::impl_fhir_element!(Extension => BundleEntryRequest);

/// Results of execution (transaction/batch/history).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryResponse {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Status response code (text optional).
    pub status: String,

    /// The location (if the operation returns a location).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The Etag for the resource (if relevant).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Server's date time modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Instant>,

    /// OperationOutcome with hints and warnings (for batch/transaction).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Resource>,
}

fhir_common::impl_fhir_element!(Extension => BundleEntryResponse);
