//! R4 code systems (FHIR 4.0.1).

use fhir_common::fhir_code_system;

fhir_code_system! {
    /// The status of a resource narrative.
    pub enum NarrativeStatus = "http://hl7.org/fhir/narrative-status" {
        /// The contents of the narrative are entirely generated from the core elements in the content.
        Generated => "generated",
        /// The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions.
        Extensions => "extensions",
        /// The contents of the narrative may contain additional information not found in the structured data.
        Additional => "additional",
        /// The contents of the narrative are some equivalent of "No human-readable text provided in this case".
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
    /// MedicationStatement Status Codes
    pub enum MedicationStatementStatusCodes = "http://hl7.org/fhir/CodeSystem/medication-statement-status" {
        Active => "active",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Intended => "intended",
        Stopped => "stopped",
        OnHold => "on-hold",
        Unknown => "unknown",
        NotTaken => "not-taken",
    }
}

fhir_code_system! {
    /// Medication Status Codes
    pub enum MedicationStatus = "http://hl7.org/fhir/CodeSystem/medication-status" {
        Active => "active",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
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
        Old => "old",
    }
}

fhir_code_system! {
    /// The use of a human name.
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
    /// Telecommunications form for contact point.
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
    /// Use of contact point.
    pub enum ContactPointUse = "http://hl7.org/fhir/contact-point-use" {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

fhir_code_system! {
    /// The use of an address.
    pub enum AddressUse = "http://hl7.org/fhir/address-use" {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Billing => "billing",
    }
}

fhir_code_system! {
    /// The type of an address (physical / postal).
    pub enum AddressType = "http://hl7.org/fhir/address-type" {
        Postal => "postal",
        Physical => "physical",
        Both => "both",
    }
}

fhir_code_system! {
    /// A unit of time (units from UCUM).
    pub enum UnitsOfTime = "http://unitsofmeasure.org" {
        /// second
        S => "s",
        /// minute
        Min => "min",
        /// hour
        H => "h",
        /// day
        D => "d",
        /// week
        Wk => "wk",
        /// month
        Mo => "mo",
        /// year
        A => "a",
    }
}

fhir_code_system! {
    /// Indicates the purpose of a bundle - how it is intended to be used.
    pub enum BundleType = "http://hl7.org/fhir/bundle-type" {
        Document => "document",
        Message => "message",
        Transaction => "transaction",
        TransactionResponse => "transaction-response",
        Batch => "batch",
        BatchResponse => "batch-response",
        History => "history",
        Searchset => "searchset",
        Collection => "collection",
    }
}

fhir_code_system! {
    /// HTTP verbs (in the HTTP command line).
    pub enum HTTPVerb = "http://hl7.org/fhir/http-verb" {
        Get => "GET",
        Head => "HEAD",
        Post => "POST",
        Put => "PUT",
        Delete => "DELETE",
        Patch => "PATCH",
    }
}
