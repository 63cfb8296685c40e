//! FHIR R4 (4.0.1) model.

pub mod code_systems;
pub mod complex_types;
pub mod parser;
pub mod resources;

pub use code_systems::*;
pub use complex_types::*;
pub use parser::FhirR4Parser;
pub use resources::*;

use fhir_common::{FhirVersion, fhir_serialization_module};

fhir_serialization_module! {
    version: FhirVersion::R4,
    any: AnyType,
    resource: Resource,
    excluded: ["DomainResource"],
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
        Attachment,
        Timing,
        TimingRepeat,
        Dosage,
        DosageDoseAndRate,
        ObservationComponent,
        ObservationReferenceRange,
        PatientContact,
        MedicationIngredient,
        BundleLink,
        BundleEntry,
        BundleEntryRequest,
        BundleEntryResponse,
    ],
    resources: [
        DomainResource,
        Patient,
        Observation,
        Condition,
        Medication,
        MedicationStatement,
        Practitioner,
        Bundle,
    ],
}
