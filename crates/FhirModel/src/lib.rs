//! Typed FHIR STU3 and R4 models with `resourceType`-aware JSON binding.
//!
//! Each version lives behind a Cargo feature of the same name. The
//! version-agnostic [`FhirResource`] wraps a decoded top-level resource of
//! either version.

#[cfg(feature = "R4")]
pub mod r4;
#[cfg(feature = "STU3")]
pub mod stu3;

pub use fhir_common::{
    CodeSystem, FhirElement, FhirError, FhirType, FhirVersion, ParserConfig, Polymorphic, Result,
};

#[cfg(any(feature = "R4", feature = "STU3"))]
use fhir_common::FhirJsonParser;
use tracing::debug;

/// A top-level resource of any enabled FHIR version.
#[derive(Debug, Clone, PartialEq)]
pub enum FhirResource {
    #[cfg(feature = "STU3")]
    Stu3(Box<stu3::Resource>),
    #[cfg(feature = "R4")]
    R4(Box<r4::Resource>),
}

impl FhirResource {
    pub fn version(&self) -> FhirVersion {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(_) => FhirVersion::Stu3,
            #[cfg(feature = "R4")]
            FhirResource::R4(_) => FhirVersion::R4,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(r) => r.resource_type(),
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.resource_type(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(r) => r.id(),
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.id(),
        }
    }

    /// Encodes the wrapped resource with its `resourceType`.
    pub fn to_json(&self, config: ParserConfig) -> Result<String> {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(r) => FhirJsonParser::<stu3::Resource>::with_config(config).encode(r),
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => FhirJsonParser::<r4::Resource>::with_config(config).encode(r),
        }
    }
}

/// Decodes a top-level resource of the given version.
pub fn parse_resource(version: FhirVersion, json: &str) -> Result<FhirResource> {
    debug!(%version, "Parsing resource");
    match version {
        #[cfg(feature = "STU3")]
        FhirVersion::Stu3 => FhirJsonParser::<stu3::Resource>::new()
            .decode(json)
            .map(|r| FhirResource::Stu3(Box::new(r))),
        #[cfg(feature = "R4")]
        FhirVersion::R4 => FhirJsonParser::<r4::Resource>::new()
            .decode(json)
            .map(|r| FhirResource::R4(Box::new(r))),
        #[allow(unreachable_patterns)]
        other => Err(FhirError::malformed(format!(
            "FHIR {} support is not enabled in this build",
            other
        ))),
    }
}

/// Discriminators registered for `version`, elements first, in registration
/// order. Empty when the version is not enabled.
pub fn registered_types(version: FhirVersion) -> Vec<&'static str> {
    match version {
        #[cfg(feature = "STU3")]
        FhirVersion::Stu3 => stu3::FhirStu3Parser::registered_types(),
        #[cfg(feature = "R4")]
        FhirVersion::R4 => r4::FhirR4Parser::registered_types(),
        #[allow(unreachable_patterns)]
        _ => Vec::new(),
    }
}
