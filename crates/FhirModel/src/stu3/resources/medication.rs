use serde::{Deserialize, Serialize};

use crate::stu3::*;

/// Definition of a Medication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
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

    /// Codes that identify this medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// active | inactive | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicationStatus>,

    /// True if a brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_brand: Option<bool>,

    /// True if medication does not require a prescription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_over_the_counter: Option<bool>,

    /// Manufacturer of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Reference>,

    /// powder | tablets | capsule +.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Active or inactive ingredient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Vec<MedicationIngredient>>,
}

fhir_common::impl_fhir_resource!(Extension => Medication);

/// Active or inactive ingredient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationIngredient {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The product contained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_codeable_concept: Option<CodeableConcept>,

    /// The product contained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_reference: Option<Reference>,

    /// Active ingredient indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Quantity of ingredient present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Ratio>,
}

fhir_common::impl_fhir_element!(Extension => MedicationIngredient);
