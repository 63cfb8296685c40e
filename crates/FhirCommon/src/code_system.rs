//! Closed code-system enums.
//!
//! Generated code systems are declared with [`fhir_code_system!`], which maps
//! each variant to its exact wire code. A code outside the enum fails decoding.

/// Behaviour shared by all generated code systems.
pub trait CodeSystem: Sized + Copy + 'static {
    /// Canonical URL of the code system.
    const SYSTEM: &'static str;

    /// Every member in declaration order.
    const ALL: &'static [Self];

    /// The wire code.
    fn code(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.code() == code)
    }
}

/// Declares a code-system enum.
///
/// ```rust
/// use fhir_common::{fhir_code_system, CodeSystem};
///
/// fhir_code_system! {
///     /// How a narrative was produced.
///     pub enum NarrativeStatus = "http://hl7.org/fhir/narrative-status" {
///         Generated => "generated",
///         Extensions => "extensions",
///         Additional => "additional",
///         Empty => "empty",
///     }
/// }
///
/// assert_eq!(NarrativeStatus::Generated.code(), "generated");
/// assert_eq!("empty".parse::<NarrativeStatus>().unwrap(), NarrativeStatus::Empty);
/// ```
#[macro_export]
macro_rules! fhir_code_system {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $system:literal {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::CodeSystem for $name {
            const SYSTEM: &'static str = $system;
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::CodeSystem::code(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::FhirError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::CodeSystem>::from_code(s).ok_or_else(|| {
                    $crate::FhirError::format(format!(
                        "'{}' is not a code of {}",
                        s,
                        stringify!($name)
                    ))
                })
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::CodeSystem::code(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let code = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::CodeSystem>::from_code(&code).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::unknown_variant(
                        &code,
                        &[$($code,)+],
                    )
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::CodeSystem;
    use crate::FhirError;

    fhir_code_system! {
        /// Test-only subset of the gender codes.
        pub enum Gender = "http://hl7.org/fhir/administrative-gender" {
            Male => "male",
            Female => "female",
            /// Neither of the above.
            Other => "other",
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for member in Gender::ALL {
            assert_eq!(Gender::from_code(member.code()), Some(*member));
        }
        assert_eq!(Gender::SYSTEM, "http://hl7.org/fhir/administrative-gender");
        assert_eq!(Gender::Other.to_string(), "other");
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let parsed: Gender = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(parsed, Gender::Male);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(serde_json::from_str::<Gender>("\"Male\"").is_err());
        assert!(matches!("unknown".parse::<Gender>(), Err(FhirError::Format(_))));
    }
}
