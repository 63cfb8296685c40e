//! Version-independent building blocks for the FHIR model crates: primitive
//! types, the element trait hierarchy, code-system and registry macros, and
//! the JSON facade.

pub mod code_system;
pub mod date_time;
pub mod element;
pub mod error;
pub mod fhir_version;
pub mod json_parser;
pub mod precise_decimal;
pub mod primitive;
pub mod registry;
pub mod value_de;

pub use code_system::CodeSystem;
pub use element::{FhirElement, FhirResource, FhirType};
pub use error::{FhirError, Result};
pub use fhir_version::{FhirResourceTypeProvider, FhirVersion};
pub use json_parser::{FhirJsonParser, ParserConfig};
pub use precise_decimal::PreciseDecimal;
pub use primitive::{Date, DateTime, Instant, Integer, PositiveInteger, Time, UnsignedInteger};
pub use registry::{Polymorphic, SerializationModule};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
