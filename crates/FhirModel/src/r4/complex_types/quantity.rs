use fhir_common::PreciseDecimal;
use serde::{Deserialize, Serialize};

use crate::r4::*;

/// A measured or measurable amount.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerical value (with implicit precision).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<PreciseDecimal>,

    /// < | <= | >= | > - how to understand the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<QuantityComparator>,

    /// Unit representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// System that defines coded unit form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Coded form of the unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

fhir_common::impl_fhir_element!(Extension => Quantity);
