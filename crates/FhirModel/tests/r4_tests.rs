#![cfg(feature = "R4")]

mod common;

use crate::common::*;
use fhir_common::PositiveInteger;
use fhir_model::r4::*;
use fhir_model::{FhirError, ParserConfig};
use rust_decimal_macros::dec;

fn parser() -> FhirR4Parser {
    FhirR4Parser::new()
}

#[test]
fn test_narrative_round_trip() {
    let json = r#"{"resourceType":"Narrative","status":"generated","div":"<div/>"}"#;
    let narrative: Narrative = parser().to_fhir(json).unwrap();
    assert_eq!(narrative.status, NarrativeStatus::Generated);
    assert_eq!(narrative.div, "<div/>");
    assert_eq!(narrative.id, None);

    let encoded = parser().from_fhir(&narrative).unwrap();
    assert_eq!(encoded, json);
}

#[test]
fn test_medication_statement_entered_in_error() {
    let source = load_fixture("r4", "medicationstatementexample5.json");
    let data: MedicationStatement = parser().to_fhir(&source).unwrap();

    assert_eq!(data.id.as_deref(), Some("example005"));
    assert_eq!(data.status, MedicationStatementStatusCodes::EnteredInError);
    assert_eq!(
        data.based_on.as_ref().unwrap()[0].reference.as_deref(),
        Some("CarePlan/gpvisit")
    );
    assert_eq!(
        data.context.as_ref().unwrap().reference.as_deref(),
        Some("Encounter/f203")
    );
    assert_eq!(data.date_asserted.as_ref().unwrap().to_string(), "2015-02-22");
    assert_eq!(data.effective_date_time.as_ref().unwrap().to_string(), "2014-01-23");
    assert_eq!(
        data.information_source.as_ref().unwrap().display.as_deref(),
        Some("Donald Duck")
    );
    let coding = &data.medication_codeable_concept.as_ref().unwrap().coding.as_ref().unwrap()[0];
    assert_eq!(coding.code.as_deref(), Some("27658006"));
    assert_eq!(coding.display.as_deref(), Some("Amoxicillin (product)"));
    assert_eq!(coding.system.as_deref(), Some("http://snomed.info/sct"));
    let tag = &data.meta.as_ref().unwrap().tag.as_ref().unwrap()[0];
    assert_eq!(tag.code.as_deref(), Some("HTEST"));
    assert_eq!(tag.display.as_deref(), Some("test health data"));
    assert_eq!(
        data.note.as_ref().unwrap()[0].text,
        "Patient indicated that they thought it was Amoxicillin they were taking but it was really Erythromycin"
    );
    assert_eq!(data.subject.reference.as_deref(), Some("Patient/pat1"));
    assert_eq!(data.text.as_ref().unwrap().status, NarrativeStatus::Generated);

    let json = parser().from_fhir(&data).unwrap();
    assert_json_eq(&source, &json);
}

#[test]
fn test_medication_statement_dosage() {
    let source = load_fixture("r4", "medicationstatementexample4.json");
    let data: MedicationStatement = parser().to_fhir(&source).unwrap();

    assert_eq!(data.id.as_deref(), Some("example004"));
    assert_eq!(data.status, MedicationStatementStatusCodes::Active);
    assert_eq!(
        data.part_of.as_ref().unwrap()[0].reference.as_deref(),
        Some("Observation/blood-pressure")
    );

    let dosage = &data.dosage.as_ref().unwrap()[0];
    assert_eq!(dosage.as_needed_boolean, Some(false));
    assert_eq!(dosage.text.as_deref(), Some("one capsule three times daily"));

    let max = dosage.max_dose_per_period.as_ref().unwrap();
    let denominator = max.denominator.as_ref().unwrap();
    assert_eq!(denominator.code.as_deref(), Some("d"));
    assert_eq!(denominator.value.unwrap().value(), dec!(1));
    let numerator = max.numerator.as_ref().unwrap();
    assert_eq!(numerator.unit.as_deref(), Some("capsules"));
    assert_eq!(numerator.value.unwrap().value(), dec!(3));

    let route = &dosage.route.as_ref().unwrap().coding.as_ref().unwrap()[0];
    assert_eq!(route.code.as_deref(), Some("260548002"));
    assert_eq!(route.display.as_deref(), Some("Oral"));

    let repeat = dosage.timing.as_ref().unwrap().repeat.as_ref().unwrap();
    assert_eq!(repeat.frequency, Some(PositiveInteger::new(3).unwrap()));
    assert_eq!(repeat.period.unwrap().value(), dec!(1));
    assert_eq!(repeat.period_unit, Some(UnitsOfTime::D));

    let reason = &data.reason_code.as_ref().unwrap()[0].coding.as_ref().unwrap()[0];
    assert_eq!(reason.code.as_deref(), Some("65363002"));
    assert_eq!(reason.display.as_deref(), Some("Otitis Media"));

    let json = parser().from_fhir(&data).unwrap();
    assert_json_eq(&source, &json);
}

#[test]
fn test_medication_statement_contained_medication() {
    let source = load_fixture("r4", "medicationstatementexample2.json");
    let data: MedicationStatement = parser().to_fhir(&source).unwrap();

    assert_eq!(data.id.as_deref(), Some("example002"));
    let contained = data.contained.as_ref().unwrap();
    assert_eq!(contained.len(), 1);
    assert_eq!(contained[0].id(), Some("med0309"));
    assert_eq!(contained[0].resource_type(), "Medication");
    match &contained[0] {
        Resource::Medication(medication) => {
            let ingredient = &medication.ingredient.as_ref().unwrap()[0];
            let strength = ingredient.strength.as_ref().unwrap();
            assert_eq!(
                strength.numerator.as_ref().unwrap().value.unwrap().value(),
                dec!(500)
            );
            assert_eq!(
                medication.code.as_ref().unwrap().coding.as_ref().unwrap()[0].display.as_deref(),
                Some("Tylenol PM")
            );
        }
        other => panic!("Expected a contained Medication, got {:?}", other),
    }

    assert_eq!(
        data.medication_reference.as_ref().unwrap().reference.as_deref(),
        Some("#med0309")
    );
    let status_reason = &data.status_reason.as_ref().unwrap()[0].coding.as_ref().unwrap()[0];
    assert_eq!(status_reason.code.as_deref(), Some("166643006"));
    assert_eq!(status_reason.display.as_deref(), Some("Liver enzymes abnormal"));
    assert_eq!(
        data.note.as_ref().unwrap()[0].text,
        "Patient cannot take acetaminophen as per Dr instructions"
    );

    let json = parser().from_fhir(&data).unwrap();
    assert_json_eq(&source, &json);
}

#[test]
fn test_contained_resource_with_unknown_discriminator_fails() {
    let json = r#"{
        "resourceType": "MedicationStatement",
        "status": "active",
        "subject": {"reference": "Patient/pat1"},
        "contained": [{"resourceType": "Substance", "id": "s1"}]
    }"#;
    let result: Result<MedicationStatement, _> = parser().to_fhir(json);
    assert!(matches!(result, Err(FhirError::UnknownDiscriminator(name)) if name == "Substance"));
}

#[test]
fn test_contained_element_is_not_a_resource() {
    let json = r#"{
        "resourceType": "MedicationStatement",
        "status": "active",
        "subject": {"reference": "Patient/pat1"},
        "contained": [{"resourceType": "Coding", "code": "x"}]
    }"#;
    let result: Result<MedicationStatement, _> = parser().to_fhir(json);
    assert!(matches!(result, Err(FhirError::UnknownDiscriminator(_))));
}

#[test]
fn test_patient_round_trip() {
    let source = load_fixture("r4", "patient-example.json");
    let patient: Patient = parser().to_fhir(&source).unwrap();

    assert_eq!(patient.gender, Some(AdministrativeGender::Male));
    assert_eq!(patient.birth_date.as_ref().unwrap().to_string(), "1974-12-25");
    assert_eq!(patient.active, Some(true));
    let name = &patient.name.as_ref().unwrap()[0];
    assert_eq!(name.r#use, Some(NameUse::Official));
    assert_eq!(name.given.as_deref(), Some(&["Peter".to_string(), "James".to_string()][..]));
    let telecom = &patient.telecom.as_ref().unwrap()[0];
    assert_eq!(telecom.system, Some(ContactPointSystem::Phone));
    assert_eq!(telecom.rank, Some(PositiveInteger::new(1).unwrap()));
    let address = &patient.address.as_ref().unwrap()[0];
    assert_eq!(address.r#type, Some(AddressType::Both));
    let identifier = &patient.identifier.as_ref().unwrap()[0];
    assert_eq!(
        identifier.assigner.as_ref().unwrap().display.as_deref(),
        Some("Acme Healthcare")
    );
    let contact = &patient.contact.as_ref().unwrap()[0];
    assert_eq!(contact.gender, Some(AdministrativeGender::Female));
    assert_eq!(
        contact.period.as_ref().unwrap().start.as_ref().unwrap().to_string(),
        "2012"
    );

    let json = parser().from_fhir(&patient).unwrap();
    assert_json_eq(&source, &json);
}

#[test]
fn test_observation_keeps_decimal_precision() {
    let source = load_fixture("r4", "observation-vitals.json");
    let observation: Observation = parser().to_fhir(&source).unwrap();

    assert_eq!(observation.status, ObservationStatus::Final);
    assert_eq!(observation.code.text.as_deref(), Some("Blood pressure systolic & diastolic"));

    let components = observation.component.as_ref().unwrap();
    let diastolic = components[1].value_quantity.as_ref().unwrap();
    assert_eq!(diastolic.value.unwrap().value(), dec!(60.50));
    assert_eq!(diastolic.value.unwrap().scale(), 2);
    assert_eq!(diastolic.comparator, Some(QuantityComparator::LessThan));

    let range = &observation.reference_range.as_ref().unwrap()[0];
    let low = range.low.as_ref().unwrap().value.unwrap();
    assert_eq!(low.to_string(), "0.010");

    assert_eq!(
        observation.issued.as_ref().unwrap().to_string(),
        "2013-04-03T15:30:10.01+01:00"
    );
    assert_eq!(
        observation.meta.as_ref().unwrap().last_updated.as_ref().unwrap().to_string(),
        "2019-11-01T09:29:23.356+11:00"
    );

    let json = parser().from_fhir(&observation).unwrap();
    assert!(json.starts_with(r#"{"resourceType":"Observation","#));
    assert!(json.contains(r#""value":0.010"#));
    assert!(json.contains(r#""value":60.50"#));
    assert_json_eq(&source, &json);
}

#[test]
fn test_bundle_entries_are_polymorphic() {
    let source = load_fixture("r4", "bundle-collection.json");
    let bundle: Bundle = parser().to_fhir(&source).unwrap();

    assert_eq!(bundle.r#type, BundleType::Searchset);
    let entries = bundle.entry.as_ref().unwrap();
    assert_eq!(entries.len(), 2);
    match entries[0].resource.as_ref().unwrap() {
        Resource::Patient(patient) => {
            assert_eq!(patient.birth_date.as_ref().unwrap().to_string(), "1974");
        }
        other => panic!("Expected Patient, got {:?}", other),
    }
    match entries[1].resource.as_ref().unwrap() {
        Resource::Condition(condition) => {
            assert_eq!(
                condition.onset_date_time.as_ref().unwrap().to_string(),
                "2014-01-20T10:15:00+00:00"
            );
        }
        other => panic!("Expected Condition, got {:?}", other),
    }
    let request = entries[1].request.as_ref().unwrap();
    assert_eq!(request.method, HTTPVerb::Put);

    let json = parser().from_fhir(&bundle).unwrap();
    assert_json_eq(&source, &json);
}

#[test]
fn test_polymorphic_decode_returns_any_type() {
    let source = load_fixture("r4", "patient-example.json");
    let decoded = parser().decode(&source).unwrap();
    assert!(matches!(decoded, AnyType::Patient(_)));

    let resource = parser().decode_resource(&source).unwrap();
    assert_eq!(resource.resource_type(), "Patient");
    assert_eq!(resource.id(), Some("example"));

    let coding = parser()
        .decode(r#"{"resourceType":"Coding","system":"http://loinc.org","code":"8480-6"}"#)
        .unwrap();
    match &coding {
        AnyType::Coding(inner) => assert_eq!(inner.code.as_deref(), Some("8480-6")),
        other => panic!("Expected Coding, got {:?}", other),
    }
    assert_eq!(
        parser().encode(&coding).unwrap(),
        r#"{"resourceType":"Coding","system":"http://loinc.org","code":"8480-6"}"#
    );
}

#[test]
fn test_resource_registry_rejects_elements() {
    let result = parser().decode_resource(r#"{"resourceType":"Coding","code":"x"}"#);
    assert!(matches!(result, Err(FhirError::UnknownDiscriminator(_))));
}

#[test]
fn test_domain_resource_is_excluded() {
    assert!(parser().get_fhir_class("DomainResource").is_none());
    let result = parser().decode(r#"{"resourceType":"DomainResource","id":"x"}"#);
    assert!(matches!(result, Err(FhirError::UnknownDiscriminator(_))));

    let abstract_value: DomainResource = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
    assert!(matches!(
        parser().from_fhir(&abstract_value),
        Err(FhirError::UnknownDiscriminator(_))
    ));
}

#[test]
fn test_pretty_print() {
    let parser = FhirR4Parser::with_config(ParserConfig::pretty());
    let narrative = Narrative {
        id: None,
        extension: None,
        status: NarrativeStatus::Additional,
        div: "<div/>".to_string(),
    };
    let json = parser.from_fhir(&narrative).unwrap();
    assert_eq!(
        json,
        "{\n  \"resourceType\": \"Narrative\",\n  \"status\": \"additional\",\n  \"div\": \"<div/>\"\n}"
    );
}

#[test]
fn test_primitive_failures_in_resources() {
    let bad_date = r#"{"resourceType":"Patient","birthDate":"1974-13-01"}"#;
    assert!(matches!(
        parser().to_fhir::<Patient>(bad_date),
        Err(FhirError::Range(_))
    ));

    let bad_format = r#"{"resourceType":"Patient","birthDate":"25.12.1974"}"#;
    assert!(matches!(
        parser().to_fhir::<Patient>(bad_format),
        Err(FhirError::Format(_))
    ));

    let bad_code = r#"{"resourceType":"Patient","gender":"mail"}"#;
    assert!(matches!(
        parser().to_fhir::<Patient>(bad_code),
        Err(FhirError::MalformedDocument(_))
    ));

    let missing_required = r#"{"resourceType":"Observation","status":"final"}"#;
    assert!(matches!(
        parser().to_fhir::<Observation>(missing_required),
        Err(FhirError::MalformedDocument(_))
    ));

    let zero_rank = r#"{"resourceType":"Patient","telecom":[{"rank":0}]}"#;
    assert!(matches!(
        parser().to_fhir::<Patient>(zero_rank),
        Err(FhirError::Range(_))
    ));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{"resourceType":"Patient","id":"p1","_birthDate":{"id":"x"},"animal":{}}"#;
    let patient: Patient = parser().to_fhir(json).unwrap();
    assert_eq!(patient.id.as_deref(), Some("p1"));
    assert_eq!(parser().from_fhir(&patient).unwrap(), r#"{"resourceType":"Patient","id":"p1"}"#);
}

#[test]
fn test_exponent_decimals_are_normalized() {
    let json = r#"{"resourceType":"Quantity","value":1.5E+2}"#;
    let quantity: Quantity = parser().to_fhir(json).unwrap();
    assert_eq!(quantity.value.unwrap().value(), dec!(150));
    assert_eq!(
        parser().from_fhir(&quantity).unwrap(),
        r#"{"resourceType":"Quantity","value":150}"#
    );
}

#[test]
fn test_arrays_never_decode_as_elements() {
    let top_level = r#"[null,null,"generated","<div/>"]"#;
    assert!(matches!(
        parser().to_fhir::<Narrative>(top_level),
        Err(FhirError::MalformedDocument(_))
    ));
    assert!(matches!(parser().decode(top_level), Err(FhirError::MalformedDocument(_))));

    let nested = r#"{"resourceType":"Patient","id":"p1","text":[null,null,"generated","<div/>"]}"#;
    assert!(matches!(
        parser().to_fhir::<Patient>(nested),
        Err(FhirError::MalformedDocument(_))
    ));
    assert!(matches!(
        parser().decode_resource(nested),
        Err(FhirError::MalformedDocument(_))
    ));

    let in_list = r#"{"resourceType":"Patient","name":[["official","Chalmers"]]}"#;
    assert!(matches!(
        parser().to_fhir::<Patient>(in_list),
        Err(FhirError::MalformedDocument(_))
    ));

    let in_contained = r#"{
        "resourceType": "MedicationStatement",
        "status": "active",
        "subject": {"reference": "Patient/pat1"},
        "contained": [{"resourceType": "Medication", "code": ["x"]}]
    }"#;
    assert!(matches!(
        parser().to_fhir::<MedicationStatement>(in_contained),
        Err(FhirError::MalformedDocument(_))
    ));
}

#[test]
fn test_negative_zero_quantity_is_written_as_zero() {
    let quantity: Quantity = parser()
        .to_fhir(r#"{"resourceType":"Quantity","value":-0.0}"#)
        .unwrap();
    assert_eq!(
        parser().from_fhir(&quantity).unwrap(),
        r#"{"resourceType":"Quantity","value":0.0}"#
    );
}
