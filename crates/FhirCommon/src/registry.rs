//! Polymorphic serialization registries.
//!
//! A [`SerializationModule`] maps `resourceType` discriminators onto the
//! concrete types of one FHIR version. Each version builds two of them once:
//! one over every generated type, one over resources only (used for
//! `contained` and bundle entries). Both are immutable after construction.
//!
//! The closed enums and their registries are produced by
//! [`fhir_serialization_module!`](crate::fhir_serialization_module).

use std::any::TypeId;
use std::collections::HashMap;

use serde::Deserializer;
use serde::de::{self, DeserializeOwned};
use serde::ser::{self, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::element::{FhirResource, FhirType};
use crate::error::FhirError;
use crate::fhir_version::FhirVersion;
use crate::value_de;

/// JSON key carrying the discriminator.
pub const RESOURCE_TYPE_FIELD: &str = "resourceType";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Element,
    Resource,
}

type DecodeFn<P> = fn(Value) -> Result<P, serde_json::Error>;

/// One registered concrete type.
pub struct RegisteredType<P> {
    name: &'static str,
    type_id: TypeId,
    kind: TypeKind,
    decode: DecodeFn<P>,
}

impl<P> RegisteredType<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }
}

/// Discriminator registry decoding into the polymorphic type `P`.
pub struct SerializationModule<P> {
    version: FhirVersion,
    types: Vec<RegisteredType<P>>,
    by_name: HashMap<String, usize>,
    by_type: HashMap<TypeId, usize>,
    excluded: Vec<&'static str>,
}

impl<P> SerializationModule<P> {
    pub fn builder(version: FhirVersion) -> SerializationModuleBuilder<P> {
        SerializationModuleBuilder {
            version,
            types: Vec::new(),
            excluded: Vec::new(),
        }
    }

    pub fn version(&self) -> FhirVersion {
        self.version
    }

    /// Case-insensitive lookup by discriminator.
    pub fn get(&self, resource_type: &str) -> Option<&RegisteredType<P>> {
        self.by_name
            .get(&resource_type.to_ascii_lowercase())
            .map(|&index| &self.types[index])
    }

    pub fn get_by_type_id(&self, type_id: TypeId) -> Option<&RegisteredType<P>> {
        self.by_type.get(&type_id).map(|&index| &self.types[index])
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Registered discriminators in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.iter().map(|registered| registered.name)
    }

    pub fn excluded(&self) -> &[&'static str] {
        &self.excluded
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Decodes a JSON object according to its `resourceType`.
    pub fn decode_value(&self, value: Value) -> Result<P, serde_json::Error> {
        let resource_type = match value.get(RESOURCE_TYPE_FIELD) {
            Some(Value::String(name)) => name,
            Some(_) => {
                return Err(de::Error::custom(FhirError::malformed(
                    "resourceType must be a string",
                )));
            }
            None if value.is_object() => {
                return Err(de::Error::custom(FhirError::malformed(
                    "missing resourceType",
                )));
            }
            None => {
                return Err(de::Error::custom(FhirError::malformed(
                    "expected a JSON object",
                )));
            }
        };
        let registered = self.get(resource_type).ok_or_else(|| {
            <serde_json::Error as de::Error>::custom(FhirError::unknown_discriminator(
                resource_type.as_str(),
            ))
        })?;
        (registered.decode)(value)
    }
}

/// Collects registrations; excluded names are skipped silently.
pub struct SerializationModuleBuilder<P> {
    version: FhirVersion,
    types: Vec<RegisteredType<P>>,
    excluded: Vec<&'static str>,
}

impl<P: 'static> SerializationModuleBuilder<P> {
    /// Names that must not be registered, such as abstract base types.
    pub fn exclude(mut self, names: &[&'static str]) -> Self {
        self.excluded.extend_from_slice(names);
        self
    }

    pub fn element<T>(self) -> Self
    where
        T: FhirType + Into<P>,
    {
        self.register::<T>(TypeKind::Element)
    }

    pub fn resource<T>(self) -> Self
    where
        T: FhirResource + Into<P>,
    {
        self.register::<T>(TypeKind::Resource)
    }

    fn register<T>(mut self, kind: TypeKind) -> Self
    where
        T: FhirType + Into<P>,
    {
        if !self.excluded.contains(&T::TYPE_NAME) {
            self.types.push(RegisteredType {
                name: T::TYPE_NAME,
                type_id: TypeId::of::<T>(),
                kind,
                decode: decode_as::<T, P>,
            });
        }
        self
    }

    pub fn build(self) -> SerializationModule<P> {
        let mut by_name = HashMap::with_capacity(self.types.len());
        let mut by_type = HashMap::with_capacity(self.types.len());
        for (index, registered) in self.types.iter().enumerate() {
            by_name.insert(registered.name.to_ascii_lowercase(), index);
            by_type.insert(registered.type_id, index);
        }
        debug!(
            version = %self.version,
            types = self.types.len(),
            excluded = ?self.excluded,
            "Built serialization module"
        );
        SerializationModule {
            version: self.version,
            types: self.types,
            by_name,
            by_type,
            excluded: self.excluded,
        }
    }
}

fn decode_as<T, P>(value: Value) -> Result<P, serde_json::Error>
where
    T: DeserializeOwned + Into<P>,
{
    value_de::from_value::<T>(value).map(Into::into)
}

/// A closed enum over the registered types of one version.
pub trait Polymorphic: Sized + 'static {
    /// The registry backing this enum, built on first use.
    fn module() -> &'static SerializationModule<Self>;

    /// Discriminator of the held value.
    fn type_name(&self) -> &'static str;

    /// `TypeId` of the held value.
    fn held_type_id(&self) -> TypeId;
}

#[derive(serde::Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "resourceType")]
    resource_type: &'static str,
    #[serde(flatten)]
    inner: &'a T,
}

/// Writes `inner` with its discriminator first, failing when `T` is not
/// registered in `P`'s module.
pub fn serialize_tagged<P, T, S>(inner: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    P: Polymorphic,
    T: FhirType,
    S: Serializer,
{
    if !P::module().contains::<T>() {
        return Err(ser::Error::custom(FhirError::unknown_discriminator(T::TYPE_NAME)));
    }
    Tagged {
        resource_type: T::TYPE_NAME,
        inner,
    }
    .serialize(serializer)
}

/// Reads any JSON object and dispatches on its `resourceType`.
pub fn deserialize_polymorphic<'de, P, D>(deserializer: D) -> Result<P, D::Error>
where
    P: Polymorphic,
    D: Deserializer<'de>,
{
    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
    P::module().decode_value(value).map_err(de::Error::custom)
}

/// Declares the closed polymorphic enums of one FHIR version and their
/// registries.
///
/// Produces `$any` over every listed type and `$resource` over the listed
/// resources, with `From` conversions, discriminator-aware serde impls and a
/// lazily built [`SerializationModule`] for each.
#[macro_export]
macro_rules! fhir_serialization_module {
    (
        version: $version:expr,
        any: $any:ident,
        resource: $resource:ident,
        excluded: [$($excluded:literal),* $(,)?],
        elements: [$($element:ident),* $(,)?],
        resources: [$($res:ident),+ $(,)?] $(,)?
    ) => {
        /// Any registered element or resource of this version.
        #[derive(Debug, Clone, PartialEq)]
        pub enum $any {
            $($element($element),)*
            $($res($res),)+
        }

        /// Any registered resource of this version.
        #[derive(Debug, Clone, PartialEq)]
        pub enum $resource {
            $($res($res),)+
        }

        $(
            impl From<$element> for $any {
                fn from(value: $element) -> Self {
                    $any::$element(value)
                }
            }
        )*

        $(
            impl From<$res> for $any {
                fn from(value: $res) -> Self {
                    $any::$res(value)
                }
            }

            impl From<$res> for $resource {
                fn from(value: $res) -> Self {
                    $resource::$res(value)
                }
            }
        )+

        impl From<$resource> for $any {
            fn from(value: $resource) -> Self {
                match value {
                    $($resource::$res(inner) => $any::$res(inner),)+
                }
            }
        }

        impl $resource {
            pub fn resource_type(&self) -> &'static str {
                $crate::registry::Polymorphic::type_name(self)
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $($resource::$res(inner) => $crate::FhirElement::id(inner),)+
                }
            }
        }

        impl $crate::registry::Polymorphic for $any {
            fn module() -> &'static $crate::registry::SerializationModule<Self> {
                static MODULE: ::std::sync::OnceLock<$crate::registry::SerializationModule<$any>> =
                    ::std::sync::OnceLock::new();
                MODULE.get_or_init(|| {
                    $crate::registry::SerializationModule::builder($version)
                        .exclude(&[$($excluded),*])
                        $(.element::<$element>())*
                        $(.resource::<$res>())+
                        .build()
                })
            }

            fn type_name(&self) -> &'static str {
                match self {
                    $($any::$element(_) => <$element as $crate::FhirType>::TYPE_NAME,)*
                    $($any::$res(_) => <$res as $crate::FhirType>::TYPE_NAME,)+
                }
            }

            fn held_type_id(&self) -> ::std::any::TypeId {
                match self {
                    $($any::$element(_) => ::std::any::TypeId::of::<$element>(),)*
                    $($any::$res(_) => ::std::any::TypeId::of::<$res>(),)+
                }
            }
        }

        impl $crate::registry::Polymorphic for $resource {
            fn module() -> &'static $crate::registry::SerializationModule<Self> {
                static MODULE: ::std::sync::OnceLock<$crate::registry::SerializationModule<$resource>> =
                    ::std::sync::OnceLock::new();
                MODULE.get_or_init(|| {
                    $crate::registry::SerializationModule::builder($version)
                        .exclude(&[$($excluded),*])
                        $(.resource::<$res>())+
                        .build()
                })
            }

            fn type_name(&self) -> &'static str {
                match self {
                    $($resource::$res(_) => <$res as $crate::FhirType>::TYPE_NAME,)+
                }
            }

            fn held_type_id(&self) -> ::std::any::TypeId {
                match self {
                    $($resource::$res(_) => ::std::any::TypeId::of::<$res>(),)+
                }
            }
        }

        impl $crate::FhirResourceTypeProvider for $resource {
            fn get_resource_type_names() -> Vec<&'static str> {
                <$resource as $crate::registry::Polymorphic>::module().names().collect()
            }
        }

        impl $crate::__private::serde::Serialize for $any {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self {
                    $($any::$element(inner) => $crate::registry::serialize_tagged::<Self, _, _>(inner, serializer),)*
                    $($any::$res(inner) => $crate::registry::serialize_tagged::<Self, _, _>(inner, serializer),)+
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $any {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::registry::deserialize_polymorphic(deserializer)
            }
        }

        impl $crate::__private::serde::Serialize for $resource {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self {
                    $($resource::$res(inner) => $crate::registry::serialize_tagged::<Self, _, _>(inner, serializer),)+
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $resource {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::registry::deserialize_polymorphic(deserializer)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Extension {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub extension: Option<Vec<Extension>>,
        pub url: String,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Basic {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub extension: Option<Vec<Extension>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub contained: Option<Vec<Resource>>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct DomainResource {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub extension: Option<Vec<Extension>>,
    }

    crate::impl_fhir_element!(Extension => Extension);
    crate::impl_fhir_resource!(Extension => Basic, DomainResource);

    fhir_serialization_module! {
        version: FhirVersion::R4,
        any: AnyType,
        resource: Resource,
        excluded: ["DomainResource"],
        elements: [Extension],
        resources: [Basic, DomainResource],
    }

    fn basic(id: &str) -> Basic {
        Basic {
            id: Some(id.to_string()),
            extension: None,
            contained: None,
        }
    }

    #[test]
    fn test_registration_order_and_exclusion() {
        let names: Vec<_> = AnyType::module().names().collect();
        assert_eq!(names, vec!["Extension", "Basic"]);
        let names: Vec<_> = Resource::module().names().collect();
        assert_eq!(names, vec!["Basic"]);
        assert_eq!(Resource::module().excluded(), &["DomainResource"]);
        assert!(!AnyType::module().contains::<DomainResource>());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let module = AnyType::module();
        assert_eq!(module.get("basic").map(|r| r.name()), Some("Basic"));
        assert_eq!(module.get("EXTENSION").map(|r| r.kind()), Some(TypeKind::Element));
        assert_eq!(
            module.get_by_type_id(TypeId::of::<Basic>()).map(|r| r.name()),
            Some("Basic")
        );
        assert!(module.get("Patient").is_none());
    }

    #[test]
    fn test_tagged_output_starts_with_discriminator() {
        let json = serde_json::to_string(&Resource::from(basic("b1"))).unwrap();
        assert_eq!(json, r#"{"resourceType":"Basic","id":"b1"}"#);
    }

    #[test]
    fn test_contained_resources_dispatch() {
        let json = r#"{"resourceType":"basic","id":"outer","contained":[{"resourceType":"Basic","id":"inner"}]}"#;
        let decoded: AnyType = serde_json::from_str(json).unwrap();
        let AnyType::Basic(outer) = decoded else {
            panic!("expected Basic");
        };
        assert_eq!(outer.contained, Some(vec![Resource::Basic(basic("inner"))]));
    }

    #[test]
    fn test_unknown_and_excluded_discriminators() {
        let err = serde_json::from_str::<AnyType>(r#"{"resourceType":"Patient"}"#).unwrap_err();
        assert!(matches!(FhirError::from_serde(err), FhirError::UnknownDiscriminator(name) if name == "Patient"));

        let err = serde_json::from_str::<Resource>(r#"{"resourceType":"DomainResource"}"#).unwrap_err();
        assert!(matches!(FhirError::from_serde(err), FhirError::UnknownDiscriminator(_)));

        let err = serde_json::to_string(&Resource::DomainResource(DomainResource {
            id: None,
            extension: None,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("DomainResource"));
    }

    #[test]
    fn test_missing_discriminator_is_malformed() {
        let err = serde_json::from_str::<Resource>(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(FhirError::from_serde(err), FhirError::MalformedDocument(_)));
    }
}
