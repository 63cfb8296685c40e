//! Error taxonomy shared by the primitive parsers and the JSON layer.
//!
//! Primitive deserializers report failures through serde's custom error
//! channel, so the text of each variant starts with a fixed tag. The JSON facade
//! uses [`FhirError::from_serde`] to recover the variant from a
//! `serde_json::Error`.

use serde_json::error::Category;
use thiserror::Error;

const FORMAT_TAG: &str = "format error: ";
const RANGE_TAG: &str = "range error: ";
const UNKNOWN_DISCRIMINATOR_TAG: &str = "unknown resourceType: ";
const MALFORMED_TAG: &str = "malformed document: ";

/// Every failure raised by this crate.
///
/// All variants are synchronous and terminal: nothing is retried and no
/// partial value is returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FhirError {
    /// Text does not match a primitive's grammar.
    #[error("format error: {0}")]
    Format(String),

    /// A parsed or constructed value violates a numeric or calendar range.
    #[error("range error: {0}")]
    Range(String),

    /// The `resourceType` discriminator has no entry in the active registry.
    #[error("unknown resourceType: {0}")]
    UnknownDiscriminator(String),

    /// The input is not JSON, or is JSON that does not fit the target type.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl FhirError {
    pub fn format(message: impl Into<String>) -> Self {
        FhirError::Format(message.into())
    }

    pub fn range(message: impl Into<String>) -> Self {
        FhirError::Range(message.into())
    }

    pub fn unknown_discriminator(resource_type: impl Into<String>) -> Self {
        FhirError::UnknownDiscriminator(resource_type.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        FhirError::MalformedDocument(message.into())
    }

    /// Maps a `serde_json` failure onto the taxonomy.
    ///
    /// Syntax, EOF and IO failures are always malformed documents. Data
    /// failures keep the variant a primitive deserializer raised; any other
    /// data failure (missing field, wrong JSON type, unknown code) is a
    /// malformed document.
    pub fn from_serde(err: serde_json::Error) -> Self {
        let mut message = err.to_string();
        if err.line() != 0 {
            let position = format!(" at line {} column {}", err.line(), err.column());
            if message.ends_with(&position) {
                message.truncate(message.len() - position.len());
            }
        }
        match err.classify() {
            Category::Data => Self::from_message(message),
            Category::Syntax | Category::Eof | Category::Io => FhirError::MalformedDocument(message),
        }
    }

    fn from_message(message: String) -> Self {
        if let Some(rest) = message.strip_prefix(FORMAT_TAG) {
            FhirError::Format(rest.to_string())
        } else if let Some(rest) = message.strip_prefix(RANGE_TAG) {
            FhirError::Range(rest.to_string())
        } else if let Some(rest) = message.strip_prefix(UNKNOWN_DISCRIMINATOR_TAG) {
            FhirError::UnknownDiscriminator(rest.to_string())
        } else if let Some(rest) = message.strip_prefix(MALFORMED_TAG) {
            FhirError::MalformedDocument(rest.to_string())
        } else {
            FhirError::MalformedDocument(message)
        }
    }

    /// Short category name, used in log output.
    pub fn category(&self) -> &'static str {
        match self {
            FhirError::Format(_) => "format",
            FhirError::Range(_) => "range",
            FhirError::UnknownDiscriminator(_) => "unknown-discriminator",
            FhirError::MalformedDocument(_) => "malformed-document",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FhirError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;

    #[test]
    fn test_custom_data_errors_keep_their_variant() {
        let err = serde_json::Error::custom(FhirError::range("month 13"));
        assert_eq!(FhirError::from_serde(err), FhirError::Range("month 13".to_string()));

        let err = serde_json::Error::custom(FhirError::format("'20x5'"));
        assert_eq!(FhirError::from_serde(err), FhirError::Format("'20x5'".to_string()));

        let err = serde_json::Error::custom(FhirError::unknown_discriminator("Foo"));
        assert_eq!(
            FhirError::from_serde(err),
            FhirError::UnknownDiscriminator("Foo".to_string())
        );
    }

    #[test]
    fn test_position_is_dropped_from_data_errors() {
        let err = serde_json::from_str::<crate::date_time::XsDate>("\"2017-13\"").unwrap_err();
        assert_eq!(
            FhirError::from_serde(err),
            FhirError::Range("month 13 outside 1..=12".to_string())
        );
    }

    #[test]
    fn test_syntax_errors_are_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        assert!(matches!(FhirError::from_serde(err), FhirError::MalformedDocument(_)));
    }

    #[test]
    fn test_other_data_errors_are_malformed() {
        let err = serde_json::Error::missing_field("status");
        assert!(matches!(FhirError::from_serde(err), FhirError::MalformedDocument(_)));
    }
}
