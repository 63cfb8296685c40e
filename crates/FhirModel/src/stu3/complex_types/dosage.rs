use fhir_common::Integer;
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// How the medication is/was taken or should be taken.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dosage {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// The order of the dosage instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Integer>,

    /// Free text dosage instructions e.g. SIG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Supplemental instruction - e.g. "with meals".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_instruction: Option<Vec<CodeableConcept>>,

    /// Patient or consumer oriented instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_instruction: Option<String>,

    /// When medication should be administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,

    /// Take "as needed" (for x).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_needed_boolean: Option<bool>,

    /// Take "as needed" (for x).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_needed_codeable_concept: Option<CodeableConcept>,

    /// Body site to administer to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,

    /// How drug should enter body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,

    /// Technique for administering medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Amount of medication per dose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_range: Option<Range>,

    /// Amount of medication per dose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_quantity: Option<Quantity>,

    /// Upper limit on medication per unit of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_period: Option<Ratio>,

    /// Upper limit on medication per administration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_administration: Option<Quantity>,

    /// Upper limit on medication per lifetime of the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_lifetime: Option<Quantity>,

    /// Amount of medication per unit of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_ratio: Option<Ratio>,

    /// Amount of medication per unit of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_range: Option<Range>,

    /// Amount of medication per unit of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_quantity: Option<Quantity>,
}

fhir_common::impl_fhir_element!(Extension => Dosage);
