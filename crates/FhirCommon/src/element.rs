//! Marker traits for the generated type hierarchy.
//!
//! Every generated element and resource implements [`FhirType`] and
//! [`FhirElement`]; top-level resources also implement [`FhirResource`].
//! The `impl_*` macros below are what the generated files invoke.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Any FHIR type that can appear in a JSON document.
pub trait FhirType: Serialize + DeserializeOwned + Clone + Debug + PartialEq + 'static {
    /// Discriminator written as `resourceType` and used for registry lookups.
    const TYPE_NAME: &'static str;
}

/// A FHIR value with an optional `id` and ordered `extension` list.
pub trait FhirElement {
    /// The version's `Extension` type.
    type Extension;

    fn id(&self) -> Option<&str>;

    fn extension(&self) -> Option<&[Self::Extension]>;
}

/// A type that may stand at the top of a FHIR document.
pub trait FhirResource: FhirElement + FhirType {
    fn resource_type(&self) -> &'static str {
        Self::TYPE_NAME
    }
}

/// Implements [`FhirType`] and [`FhirElement`] for a generated struct with
/// `id` and `extension` fields.
#[macro_export]
macro_rules! impl_fhir_element {
    ($extension:ty => $($name:ident),+ $(,)?) => {
        $(
            impl $crate::FhirType for $name {
                const TYPE_NAME: &'static str = stringify!($name);
            }

            impl $crate::FhirElement for $name {
                type Extension = $extension;

                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn extension(&self) -> Option<&[$extension]> {
                    self.extension.as_deref()
                }
            }
        )+
    };
}

/// Like [`impl_fhir_element!`] with a [`FhirResource`] impl added.
#[macro_export]
macro_rules! impl_fhir_resource {
    ($extension:ty => $($name:ident),+ $(,)?) => {
        $crate::impl_fhir_element!($extension => $($name),+);
        $(
            impl $crate::FhirResource for $name {}
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    struct Extension {
        url: String,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    struct Basic {
        id: Option<String>,
        extension: Option<Vec<Extension>>,
    }

    impl_fhir_resource!(Extension => Basic);

    #[test]
    fn test_generated_accessors() {
        let basic = Basic {
            id: Some("b1".to_string()),
            extension: Some(vec![Extension {
                url: "http://example.org/ext".to_string(),
            }]),
        };
        assert_eq!(basic.id(), Some("b1"));
        assert_eq!(basic.extension().map(|e| e.len()), Some(1));
        assert_eq!(basic.resource_type(), "Basic");
        assert_eq!(Basic::TYPE_NAME, "Basic");
    }
}
