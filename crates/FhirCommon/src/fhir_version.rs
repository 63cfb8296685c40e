/// FHIR releases with a generated model in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FhirVersion {
    Stu3,
    #[default]
    R4,
}

impl FhirVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirVersion::Stu3 => "STU3",
            FhirVersion::R4 => "R4",
        }
    }

    /// The published release number.
    pub fn release(&self) -> &'static str {
        match self {
            FhirVersion::Stu3 => "3.0.2",
            FhirVersion::R4 => "4.0.1",
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FhirVersion {
    type Err = crate::FhirError;

    fn from_str(s: &str) -> crate::Result<Self> {
        if s.eq_ignore_ascii_case("STU3") {
            Ok(FhirVersion::Stu3)
        } else if s.eq_ignore_ascii_case("R4") {
            Ok(FhirVersion::R4)
        } else {
            Err(crate::FhirError::format(format!("unknown FHIR version '{}'", s)))
        }
    }
}

impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &[FhirVersion::Stu3, FhirVersion::R4]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Lists the discriminators a polymorphic type accepts.
pub trait FhirResourceTypeProvider {
    fn get_resource_type_names() -> Vec<&'static str>;

    fn is_resource_type(type_name: &str) -> bool {
        Self::get_resource_type_names()
            .iter()
            .any(|&resource_type| resource_type.eq_ignore_ascii_case(type_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_version_names() {
        assert_eq!(FhirVersion::Stu3.to_string(), "STU3");
        assert_eq!(FhirVersion::default(), FhirVersion::R4);
        assert_eq!("stu3".parse::<FhirVersion>().unwrap(), FhirVersion::Stu3);
        assert!("R5".parse::<FhirVersion>().is_err());
    }

    #[test]
    fn test_clap_values() {
        assert_eq!(FhirVersion::from_str("R4", false).unwrap(), FhirVersion::R4);
        assert_eq!(FhirVersion::from_str("stu3", true).unwrap(), FhirVersion::Stu3);
    }
}
