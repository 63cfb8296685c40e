use clap::Parser;
use fhir_json_cli::{Args, list_types, reencode, run};
use fhir_model::{FhirVersion, ParserConfig};
use std::fs;
use tempfile::TempDir;

const OBSERVATION: &str = r#"{
  "resourceType": "observation",
  "id": "bp",
  "status": "final",
  "code": {"text": "Blood pressure"},
  "valueQuantity": {"value": 120.0, "unit": "mmHg"}
}"#;

#[test]
fn test_args_defaults() {
    let args = Args::parse_from(["fhir-json"]);
    assert_eq!(args.fhir_version, FhirVersion::R4);
    assert!(!args.pretty);
    assert!(!args.list_types);
    assert_eq!(args.log_level, "warn");
    assert!(args.input.is_none());
    assert!(args.output.is_none());
}

#[test]
fn test_args_version_values() {
    let args = Args::parse_from(["fhir-json", "--fhir-version", "STU3", "-p"]);
    assert_eq!(args.fhir_version, FhirVersion::Stu3);
    assert_eq!(args.parser_config(), ParserConfig::pretty());

    assert!(Args::try_parse_from(["fhir-json", "--fhir-version", "R5"]).is_err());
}

#[test]
fn test_reencode_canonicalizes() {
    let json = reencode(FhirVersion::R4, OBSERVATION, ParserConfig::default()).unwrap();
    assert_eq!(
        json,
        r#"{"resourceType":"Observation","id":"bp","status":"final","code":{"text":"Blood pressure"},"valueQuantity":{"value":120.0,"unit":"mmHg"}}"#
    );
}

#[test]
fn test_reencode_reports_failures() {
    let err = reencode(FhirVersion::R4, r#"{"resourceType":"Unicorn"}"#, ParserConfig::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to decode FHIR R4 document");
    assert_eq!(err.root_cause().to_string(), "unknown resourceType: Unicorn");
}

#[test]
fn test_list_types() {
    let listing = list_types(FhirVersion::Stu3);
    let names: Vec<&str> = listing.lines().collect();
    assert!(names.contains(&"DomainResource"));
    assert!(names.contains(&"MedicationStatement"));
    assert!(!names.contains(&"Bundle"));
}

#[test]
fn test_run_with_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("observation.json");
    let output = dir.path().join("out.json");
    fs::write(&input, OBSERVATION).unwrap();

    let args = Args::parse_from([
        "fhir-json",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    run(&args).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["resourceType"], "Observation");
    assert_eq!(value["valueQuantity"]["unit"], "mmHg");
}

#[test]
fn test_run_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let args = Args::parse_from(["fhir-json", "-i", missing.to_str().unwrap()]);
    let err = run(&args).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}
