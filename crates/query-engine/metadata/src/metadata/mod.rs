//! Metadata information regarding the database and tracked information.

pub mod database;
pub mod records;

// re-export without modules
pub use database::*;
pub use records::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub field_types: FieldTypes,
}

impl Metadata {
    /// Metadata for the exportable columns of every known record type.
    pub fn exportable() -> Self {
        Metadata {
            field_types: FieldTypes::from_records(EXPORTABLE_RECORDS),
        }
    }

    /// The declared value kind of a column. Unknown columns are text.
    pub fn type_of(&self, column_name: &str) -> ValueKind {
        self.field_types.type_of(column_name)
    }
}
