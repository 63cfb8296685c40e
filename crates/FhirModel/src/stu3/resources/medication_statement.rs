use fhir_common::DateTime;
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Record of medication being taken by a patient.
///
/// A record of a medication that is being consumed by a patient. A MedicationStatement may indicate
/// that the patient may be taking the medication now, or has taken the medication in the past or will
/// be taking the medication in the future.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationStatement {
    /// Logical id of this artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    /// Language of the resource content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Text summary of the resource, for human interpretation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline Resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// External identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Fulfils plan, proposal or order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Part of referenced event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// Encounter / Episode associated with MedicationStatement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// active | completed | entered-in-error | intended | stopped | on-hold.
    pub status: MedicationStatementStatus,

    /// Type of medication usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// What medication was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication_codeable_concept: Option<CodeableConcept>,

    /// What medication was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication_reference: Option<Reference>,

    /// The date/time or interval when the medication was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<DateTime>,

    /// The date/time or interval when the medication was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// When the statement was asserted?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_asserted: Option<DateTime>,

    /// Person or organization that provided the information about the taking of this medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_source: Option<Reference>,

    /// Who is/was taking  the medication.
    pub subject: Reference,

    /// Additional supporting information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Vec<Reference>>,

    /// y | n | unk | na.
    pub taken: MedicationStatementTaken,

    /// True if asserting medication was not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_not_taken: Option<Vec<CodeableConcept>>,

    /// Reason for why the medication is being/was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Condition or observation that supports why the medication is being/was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Further information about the statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Details of how medication is/was taken or should be taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<Vec<Dosage>>,
}

fhir_common::impl_fhir_resource!(Extension => MedicationStatement);
