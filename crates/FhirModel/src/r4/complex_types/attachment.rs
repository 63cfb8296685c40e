use fhir_common::{DateTime, UnsignedInteger};
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Content in a format defined elsewhere.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Mime type of the content, with charset etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Human language of the content (BCP-47).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Data inline, base64ed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Uri where the data can be found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of bytes of content (if url provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<UnsignedInteger>,

    /// Hash of the data (sha-1, base64ed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Label to display in place of the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Date attachment was first created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime>,
}

fhir_common::impl_fhir_element!(Extension => Attachment);
