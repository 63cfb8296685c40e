#![cfg(all(feature = "R4", feature = "STU3"))]

mod common;

use crate::common::*;
use fhir_model::{
    FhirError, FhirResource, FhirType, FhirVersion, ParserConfig, parse_resource, r4,
    registered_types, stu3,
};
use std::any::TypeId;

#[test]
fn test_parse_resource_by_version() {
    let source = load_fixture("r4", "medicationstatementexample5.json");
    let resource = parse_resource(FhirVersion::R4, &source).unwrap();
    assert_eq!(resource.version(), FhirVersion::R4);
    assert_eq!(resource.resource_type(), "MedicationStatement");
    assert_eq!(resource.id(), Some("example005"));
    assert!(matches!(&resource, FhirResource::R4(inner) if matches!(**inner, r4::Resource::MedicationStatement(_))));
    assert_json_eq(&source, &resource.to_json(ParserConfig::default()).unwrap());

    let source = load_fixture("stu3", "medicationstatementexample7.json");
    let resource = parse_resource(FhirVersion::Stu3, &source).unwrap();
    assert_eq!(resource.version(), FhirVersion::Stu3);
    assert!(matches!(&resource, FhirResource::Stu3(_)));
    assert_json_eq(&source, &resource.to_json(ParserConfig::pretty()).unwrap());
}

#[test]
fn test_version_mismatch_is_reported() {
    // STU3 MedicationStatement requires taken.
    let r4_source = load_fixture("r4", "medicationstatementexample5.json");
    assert!(matches!(
        parse_resource(FhirVersion::Stu3, &r4_source),
        Err(FhirError::MalformedDocument(_))
    ));

    let bundle = load_fixture("r4", "bundle-collection.json");
    assert!(matches!(
        parse_resource(FhirVersion::Stu3, &bundle),
        Err(FhirError::UnknownDiscriminator(_))
    ));
}

#[test]
fn test_polymorphic_decode_requires_discriminator() {
    let result = parse_resource(FhirVersion::R4, r#"{"id":"p1"}"#);
    assert!(matches!(result, Err(FhirError::MalformedDocument(_))));

    let result = parse_resource(FhirVersion::R4, r#"{"resourceType":7}"#);
    assert!(matches!(result, Err(FhirError::MalformedDocument(_))));

    let result = parse_resource(FhirVersion::R4, r#"[{"resourceType":"Patient"}]"#);
    assert!(matches!(result, Err(FhirError::MalformedDocument(_))));

    let result = parse_resource(FhirVersion::R4, r#"{"resourceType":"Patient""#);
    assert!(matches!(result, Err(FhirError::MalformedDocument(_))));
}

#[test]
fn test_unknown_discriminator() {
    let result = parse_resource(FhirVersion::R4, r#"{"resourceType":"Unicorn","id":"u1"}"#);
    assert_eq!(
        result.unwrap_err(),
        FhirError::UnknownDiscriminator("Unicorn".to_string())
    );
}

#[test]
fn test_discriminator_lookup_is_case_insensitive() {
    let resource = parse_resource(FhirVersion::R4, r#"{"resourceType":"patient","id":"p1"}"#).unwrap();
    assert_eq!(resource.resource_type(), "Patient");
    assert_eq!(
        resource.to_json(ParserConfig::default()).unwrap(),
        r#"{"resourceType":"Patient","id":"p1"}"#
    );

    let parser = r4::FhirR4Parser::new();
    assert_eq!(parser.get_fhir_class("OBSERVATION"), Some(TypeId::of::<r4::Observation>()));
    assert_eq!(parser.get_fhir_class("Unicorn"), None);
    assert_eq!(
        parser.get_fhir_resource_type(TypeId::of::<r4::Observation>()),
        Some("Observation")
    );
    assert_eq!(parser.get_fhir_resource_type(TypeId::of::<String>()), None);
}

#[test]
fn test_typed_decode_checks_the_discriminator() {
    let parser = r4::FhirR4Parser::new();
    let result = parser.to_fhir::<r4::Observation>(r#"{"resourceType":"Patient","id":"p1"}"#);
    assert!(matches!(result, Err(FhirError::MalformedDocument(_))));

    let result = parser.to_fhir::<r4::Patient>(r#"{"resourceType":"Unicorn"}"#);
    assert!(matches!(result, Err(FhirError::UnknownDiscriminator(_))));

    let patient = parser.to_fhir::<r4::Patient>(r#"{"id":"p1"}"#).unwrap();
    assert_eq!(patient.id.as_deref(), Some("p1"));
}

#[test]
fn test_registered_types() {
    let r4_types = registered_types(FhirVersion::R4);
    assert_eq!(r4_types.first(), Some(&"Extension"));
    assert!(r4_types.contains(&"MedicationStatement"));
    assert!(r4_types.contains(&"Bundle"));
    assert!(!r4_types.contains(&"DomainResource"));
    assert_eq!(r4_types.iter().filter(|name| **name == "Patient").count(), 1);

    let stu3_types = registered_types(FhirVersion::Stu3);
    assert!(stu3_types.contains(&"DomainResource"));
    assert!(!stu3_types.contains(&"Bundle"));

    let r4_patient_pos = r4_types.iter().position(|name| *name == r4::Patient::TYPE_NAME);
    let r4_coding_pos = r4_types.iter().position(|name| *name == r4::Coding::TYPE_NAME);
    assert!(r4_coding_pos < r4_patient_pos);
}

#[test]
fn test_resource_type_names_provider() {
    use fhir_common::FhirResourceTypeProvider;

    assert!(r4::Resource::is_resource_type("medicationstatement"));
    assert!(!r4::Resource::is_resource_type("Coding"));
    assert!(stu3::Resource::is_resource_type("DomainResource"));
    assert!(!r4::Resource::is_resource_type("DomainResource"));
}

#[test]
fn test_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let json = format!(r#"{{"resourceType":"Patient","id":"p{}"}}"#, i);
                parse_resource(FhirVersion::R4, &json).unwrap().id().map(str::to_string)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(format!("p{}", i)));
    }
}
