use fhir_common::DateTime;
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Detailed information about conditions, problems or diagnoses.
///
/// A clinical condition, problem, diagnosis, or other event, situation, issue, or clinical concept
/// that has risen to a level of concern.
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

    /// active | recurrence | relapse | inactive | remission | resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<CodeableConcept>,

    /// unconfirmed | provisional | differential | confirmed | refuted | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<CodeableConcept>,

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

    /// Encounter created as part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

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

    /// When in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_date_time: Option<DateTime>,

    /// When in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_period: Option<Period>,

    /// When in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_range: Option<Range>,

    /// When in resolution/remission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_string: Option<String>,

    /// Date record was first recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<DateTime>,

    /// Who recorded the condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<Reference>,

    /// Person who asserts this condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserter: Option<Reference>,

    /// Additional information about the Condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

fhir_common::impl_fhir_resource!(Extension => Condition);
