pub mod bundle;
pub use bundle::*;

pub mod condition;
pub use condition::*;

pub mod domain_resource;
pub use domain_resource::*;

pub mod medication;
pub use medication::*;

pub mod medication_statement;
pub use medication_statement::*;

pub mod observation;
pub use observation::*;

pub mod patient;
pub use patient::*;

pub mod practitioner;
pub use practitioner::*;
