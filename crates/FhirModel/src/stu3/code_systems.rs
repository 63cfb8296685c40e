//! STU3 code systems (FHIR 3.0.2).

use fhir_common::fhir_code_system;

fhir_code_system! {
    /// The status of a resource narrative
    pub enum NarrativeStatus = "http://hl7.org/fhir/narrative-status" {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

fhir_code_system! {
    /// The gender of a person used for administrative purposes.
    pub enum AdministrativeGender = "http://hl7.org/fhir/administrative-gender" {
        Male => "male",
        Female => "female",
        Other => "other",
        Unknown => "unknown",
    }
}

fhir_code_system! {
    /// Codes providing the status of an observation.
    pub enum ObservationStatus = "http://hl7.org/fhir/observation-status" {
        Registered => "registered",
        Preliminary => "preliminary",
        Final => "final",
        Amended => "amended",
        Corrected => "corrected",
        Cancelled => "cancelled",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

fhir_code_system! {
    /// A coded concept indicating the current status of a MedicationStatement.
    pub enum MedicationStatementStatus = "http://hl7.org/fhir/medication-statement-status" {
        Active => "active",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Intended => "intended",
        Stopped => "stopped",
        OnHold => "on-hold",
    }
}

fhir_code_system! {
    /// A coded concept identifying level of certainty if patient has taken or has not taken the medication
    pub enum MedicationStatementTaken = "http://hl7.org/fhir/medication-statement-taken" {
        /// Positive assertion that patient has taken medication
        Y => "y",
        /// Positive assertion that patient has not taken medication
        N => "n",
        /// Unknown assertion if patient has taken medication
        Unk => "unk",
        /// Patient reporting does not apply
        Na => "na",
    }
}

fhir_code_system! {
    /// A coded concept defining if the medication is in active use
    pub enum MedicationStatus = "http://hl7.org/fhir/medication-status" {
        Active => "active",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
    }
}

fhir_code_system! {
    /// Preferred value set for Condition Clinical Status.
    pub enum ConditionClinicalStatus = "http://hl7.org/fhir/condition-clinical" {
        Active => "active",
        Recurrence => "recurrence",
        Inactive => "inactive",
        Remission => "remission",
        Resolved => "resolved",
    }
}

fhir_code_system! {
    /// The verification status to support or decline the clinical status of the condition or diagnosis.
    pub enum ConditionVerificationStatus = "http://hl7.org/fhir/condition-ver-status" {
        Provisional => "provisional",
        Differential => "differential",
        Confirmed => "confirmed",
        Refuted => "refuted",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

fhir_code_system! {
    /// How the Quantity should be understood and represented.
    pub enum QuantityComparator = "http://hl7.org/fhir/quantity-comparator" {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
    }
}

fhir_code_system! {
    /// Identifies the purpose for this identifier, if known .
    pub enum IdentifierUse = "http://hl7.org/fhir/identifier-use" {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
    }
}

fhir_code_system! {
    /// The use of a human name
    pub enum NameUse = "http://hl7.org/fhir/name-use" {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Nickname => "nickname",
        Anonymous => "anonymous",
        Old => "old",
        Maiden => "maiden",
    }
}

fhir_code_system! {
    /// Telecommunications form for contact point
    pub enum ContactPointSystem = "http://hl7.org/fhir/contact-point-system" {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
}

fhir_code_system! {
    /// Use of contact point
    pub enum ContactPointUse = "http://hl7.org/fhir/contact-point-use" {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

fhir_code_system! {
    /// The use of an address
    pub enum AddressUse = "http://hl7.org/fhir/address-use" {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
    }
}

fhir_code_system! {
    /// The type of an address (physical / postal)
    pub enum AddressType = "http://hl7.org/fhir/address-type" {
        Postal => "postal",
        Physical => "physical",
        Both => "both",
    }
}

fhir_code_system! {
    /// A unit of time (units from UCUM).
    pub enum UnitsOfTime = "http://unitsofmeasure.org" {
        S => "s",
        Min => "min",
        H => "h",
        D => "d",
        Wk => "wk",
        Mo => "mo",
        A => "a",
    }
}
