use std::any::TypeId;

use fhir_common::{FhirJsonParser, FhirType, ParserConfig, Polymorphic, Result};

use crate::stu3::{AnyType, Resource};

/// JSON parser pinned to the STU3 registries.
///
/// ```rust
/// use fhir_model::stu3::{FhirStu3Parser, Narrative, NarrativeStatus};
///
/// let parser = FhirStu3Parser::new();
/// let narrative: Narrative = parser
///     .to_fhir(r#"{"resourceType":"Narrative","status":"generated","div":"<div/>"}"#)
///     .unwrap();
/// assert_eq!(narrative.status, NarrativeStatus::Generated);
/// ```
pub struct FhirStu3Parser {
    any: FhirJsonParser<AnyType>,
    resources: FhirJsonParser<Resource>,
}

impl Default for FhirStu3Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl FhirStu3Parser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            any: FhirJsonParser::with_config(config),
            resources: FhirJsonParser::with_config(config),
        }
    }

    /// Decodes a JSON document into `T`.
    pub fn to_fhir<T: FhirType>(&self, json: &str) -> Result<T> {
        self.any.from_json(json)
    }

    /// Encodes `value` as a top-level document.
    pub fn from_fhir<T: FhirType>(&self, value: &T) -> Result<String> {
        self.any.to_json(value)
    }

    /// Decodes any registered STU3 type.
    pub fn decode(&self, json: &str) -> Result<AnyType> {
        self.any.decode(json)
    }

    pub fn encode(&self, value: &AnyType) -> Result<String> {
        self.any.encode(value)
    }

    /// Decodes a document that must be a registered STU3 resource.
    pub fn decode_resource(&self, json: &str) -> Result<Resource> {
        self.resources.decode(json)
    }

    pub fn encode_resource(&self, value: &Resource) -> Result<String> {
        self.resources.encode(value)
    }

    pub fn get_fhir_class(&self, resource_type: &str) -> Option<TypeId> {
        self.any.get_fhir_class(resource_type)
    }

    pub fn get_fhir_resource_type(&self, type_id: TypeId) -> Option<&'static str> {
        self.any.get_fhir_resource_type(type_id)
    }

    /// Every registered discriminator, elements first.
    pub fn registered_types() -> Vec<&'static str> {
        AnyType::module().names().collect()
    }
}
