//! JSON entry points over a version registry.

use std::any::TypeId;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::element::FhirType;
use crate::error::{FhirError, Result};
use crate::registry::{Polymorphic, RESOURCE_TYPE_FIELD, serialize_tagged};
use crate::value_de;

/// Output options for encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Indent output instead of writing it on one line.
    pub pretty_print: bool,
}

impl ParserConfig {
    pub fn pretty() -> Self {
        Self { pretty_print: true }
    }
}

/// Typed and polymorphic FHIR JSON codec for the registry behind `P`.
///
/// Decoding ignores unknown fields. Encoding omits absent optional fields and
/// writes `resourceType` first. Every failure is a [`FhirError`].
pub struct FhirJsonParser<P> {
    config: ParserConfig,
    _polymorphic: PhantomData<fn() -> P>,
}

impl<P> Default for FhirJsonParser<P>
where
    P: Polymorphic + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FhirJsonParser<P>
where
    P: Polymorphic + Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            _polymorphic: PhantomData,
        }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Decodes a document into `T`.
    ///
    /// `resourceType` may be absent; when present it must name `T`
    /// (case-insensitively).
    pub fn from_json<T: FhirType>(&self, json: &str) -> Result<T> {
        self.typed_decode(json).map_err(rejected)
    }

    fn typed_decode<T: FhirType>(&self, json: &str) -> Result<T> {
        let module = P::module();
        if !module.contains::<T>() {
            return Err(FhirError::unknown_discriminator(T::TYPE_NAME));
        }

        let value = parse_value(json)?;
        if !value.is_object() {
            return Err(FhirError::malformed(format!(
                "expected a JSON object for {}",
                T::TYPE_NAME
            )));
        }
        match value.get(RESOURCE_TYPE_FIELD) {
            None => {}
            Some(Value::String(name)) => {
                let registered = module
                    .get(name)
                    .ok_or_else(|| FhirError::unknown_discriminator(name.as_str()))?;
                if registered.type_id() != TypeId::of::<T>() {
                    return Err(FhirError::malformed(format!(
                        "document is a {}, expected a {}",
                        registered.name(),
                        T::TYPE_NAME
                    )));
                }
            }
            Some(_) => return Err(FhirError::malformed("resourceType must be a string")),
        }
        value_de::from_value(value).map_err(FhirError::from_serde)
    }

    /// Encodes `value` as a top-level document.
    pub fn to_json<T: FhirType>(&self, value: &T) -> Result<String> {
        if !P::module().contains::<T>() {
            return Err(FhirError::unknown_discriminator(T::TYPE_NAME));
        }
        self.render(&TopLevel::<P, T> {
            inner: value,
            _polymorphic: PhantomData,
        })
    }

    /// Decodes a document of any registered type. `resourceType` is required.
    pub fn decode(&self, json: &str) -> Result<P> {
        parse_value(json)
            .and_then(|value| {
                P::module()
                    .decode_value(value)
                    .map_err(FhirError::from_serde)
            })
            .map_err(rejected)
    }

    pub fn encode(&self, value: &P) -> Result<String> {
        self.render(value)
    }

    /// Case-insensitive lookup of a discriminator.
    pub fn get_fhir_class(&self, resource_type: &str) -> Option<TypeId> {
        P::module().get(resource_type).map(|registered| registered.type_id())
    }

    pub fn get_fhir_resource_type(&self, type_id: TypeId) -> Option<&'static str> {
        P::module()
            .get_by_type_id(type_id)
            .map(|registered| registered.name())
    }

    fn render<V: Serialize + ?Sized>(&self, value: &V) -> Result<String> {
        let result = if self.config.pretty_print {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(FhirError::from_serde)
    }
}

struct TopLevel<'a, P, T> {
    inner: &'a T,
    _polymorphic: PhantomData<fn() -> P>,
}

impl<P, T> Serialize for TopLevel<'_, P, T>
where
    P: Polymorphic,
    T: FhirType,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_tagged::<P, T, S>(self.inner, serializer)
    }
}

fn parse_value(json: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(|err| FhirError::malformed(err.to_string()))
}

fn rejected(err: FhirError) -> FhirError {
    debug!(category = err.category(), "Rejected FHIR document: {}", err);
    err
}
