//! FHIR STU3 (3.0.2) model.

pub mod code_systems;
pub mod complex_types;
pub mod parser;
pub mod resources;

pub use code_systems::*;
pub use complex_types::*;
pub use parser::FhirStu3Parser;
pub use resources::*;

use fhir_common::{FhirVersion, fhir_serialization_module};

// STU3 has no abstract-type exclusions; DomainResource is registered.
fhir_serialization_module! {
    version: FhirVersion::Stu3,
    any: AnyType,
    resource: Resource,
    excluded: [],
    elements: [
        Extension,
        Meta,
        Narrative,
        Coding,
        CodeableConcept,
        Reference,
        Identifier,
        Period,
        Quantity,
        Range,
        Ratio,
        Annotation,
        HumanName,
        ContactPoint,
        Address,
        Timing,
        TimingRepeat,
        Dosage,
        ObservationComponent,
        ObservationReferenceRange,
        MedicationIngredient,
    ],
    resources: [
        DomainResource,
        Patient,
        Observation,
        Condition,
        Medication,
        MedicationStatement,
    ],
}
