use fhir_common::DateTime;
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Detailed information about conditions, problems or diagnoses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
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

    /// External Ids for this condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | recurrence | inactive | remission | resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<ConditionClinicalStatus>,

    /// provisional | differential | confirmed | refuted | entered-in-error | unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<ConditionVerificationStatus>,

    /// problem-list-item | encounter-diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Subjective severity of condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<CodeableConcept>,

    /// Identification of the condition, problem or diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Anatomical location, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<CodeableConcept>>,

    /// Who has the condition?
    pub subject: Reference,

    /// Encounter or episode when condition first asserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Estimated or actual date,  date-time, or age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_date_time: Option<DateTime>,

    /// Estimated or actual date,  date-time, or age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_period: Option<Period>,

    /// Estimated or actual date,  date-time, or age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_range: Option<Range>,

    /// Estimated or actual date,  date-time, or age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_string: Option<String>,

    /// If/when in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_date_time: Option<DateTime>,

    /// If/when in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_boolean: Option<bool>,

    /// If/when in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_period: Option<Period>,

    /// If/when in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_range: Option<Range>,

    /// If/when in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_string: Option<String>,

    /// Date record was believed accurate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserted_date: Option<DateTime>,

    /// Person who asserts this condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserter: Option<Reference>,

    /// Additional information about the Condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

fhir_common::impl_fhir_resource!(Extension => Condition);
