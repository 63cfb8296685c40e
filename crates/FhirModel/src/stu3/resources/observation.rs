use fhir_common::{DateTime, Instant, Time};
use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Measurements and simple assertions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
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

    /// Business Identifier for observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Fulfills plan, proposal or order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// registered | preliminary | final | amended +.
    pub status: ObservationStatus,

    /// Classification of  type of observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Type of observation (code / type).
    pub code: CodeableConcept,

    /// Who and/or what this is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Healthcare event during which this observation is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Clinically relevant time/time-period for observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<DateTime>,

    /// Clinically relevant time/time-period for observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// Date/Time this was made available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<Instant>,

    /// Who is responsible for the observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<Reference>>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_range: Option<Range>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_ratio: Option<Ratio>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_time: Option<Time>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date_time: Option<DateTime>,

    /// Actual result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_period: Option<Period>,

    /// Why the result is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    /// High, low, normal, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<CodeableConcept>,

    /// Comments about result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Observed body part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,

    /// How it was done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Specimen used for this observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,

    /// (Measurement) Device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,

    /// Provides guide for interpretation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,

    /// Component results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Vec<ObservationComponent>>,
}

fhir_common::impl_fhir_resource!(Extension => Observation);

/// Component results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of component observation (code / type).
    pub code: CodeableConcept,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_range: Option<Range>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_ratio: Option<Ratio>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_time: Option<Time>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date_time: Option<DateTime>,

    /// Actual component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_period: Option<Period>,

    /// Why the component result is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    /// High, low, normal, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<CodeableConcept>,

    /// Provides guide for interpretation of component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}

fhir_common::impl_fhir_element!(Extension => ObservationComponent);

/// Provides guide for interpretation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationReferenceRange {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Low Range, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    /// High Range, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,

    /// Reference range qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,

    /// Reference range population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Vec<CodeableConcept>>,

    /// Applicable age range, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Range>,

    /// Text based reference range in an observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fhir_common::impl_fhir_element!(Extension => ObservationReferenceRange);
