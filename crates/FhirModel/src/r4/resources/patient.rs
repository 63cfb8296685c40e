use fhir_common::{Date, DateTime, Integer};
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// Information about an individual or animal receiving health care services.
///
/// Demographics and other administrative information about an individual or animal receiving care or
/// other health-related services.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
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

    /// An identifier for this patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this patient's record is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// A name associated with the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    /// A contact detail for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// male | female | other | unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// The date of birth for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Date>,

    /// Indicates if the individual is deceased or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_boolean: Option<bool>,

    /// Indicates if the individual is deceased or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_date_time: Option<DateTime>,

    /// An address for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Vec<Address>>,

    /// Marital (civil) status of a patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodeableConcept>,

    /// Whether patient is part of a multiple birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_birth_boolean: Option<bool>,

    /// Whether patient is part of a multiple birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_birth_integer: Option<Integer>,

    /// Image of the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<Attachment>>,

    /// A contact party (e.g. guardian, partner, friend) for the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<PatientContact>>,

    /// Patient's nominated primary care provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_practitioner: Option<Vec<Reference>>,

    /// Organization that is the custodian of the patient record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,
}

fhir_common::impl_fhir_resource!(Extension => Patient);

/// A contact party (e.g. guardian, partner, friend) for the patient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientContact {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The kind of relationship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Vec<CodeableConcept>>,

    /// A name associated with the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    /// A contact detail for the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Address for the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// male | female | other | unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// Organization that is associated with the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// The period during which this contact person or organization is valid to be contacted relating to this patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

fhir_common::impl_fhir_element!(Extension => PatientContact);
