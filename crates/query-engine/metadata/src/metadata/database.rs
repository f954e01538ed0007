//! Value kinds of database columns and the registry mapping columns to them.

use std::collections::BTreeMap;

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::records::RecordDescription;

/// The kinds of value a column can hold, as far as rendering a literal
/// for it is concerned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Numeric,
    Boolean,
    Text,
}

impl ValueKind {
    /// Whether literals of this kind are written into SQL without quotes.
    pub fn is_unquoted(self) -> bool {
        match self {
            ValueKind::Numeric | ValueKind::Boolean => true,
            ValueKind::Text => false,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValueKind::Numeric => write!(f, "numeric"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// Mapping from database column name to its value kind.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldTypes(pub BTreeMap<String, ValueKind>);

impl FieldTypes {
    pub fn empty() -> Self {
        FieldTypes(BTreeMap::new())
    }

    /// Collect the columns of the given record descriptions. When two records
    /// declare the same column the later one wins.
    pub fn from_records(records: &[RecordDescription]) -> Self {
        FieldTypes(
            records
                .iter()
                .flat_map(|record| record.fields.iter())
                .map(|field| (field.name_in_db.to_string(), field.kind))
                .collect(),
        )
    }

    /// The value kind of a column, defaulting to text for unknown names.
    pub fn type_of(&self, column_name: &str) -> ValueKind {
        self.0
            .get(column_name)
            .copied()
            .unwrap_or(ValueKind::Text)
    }

    /// Add or override entries.
    pub fn merge(&mut self, other: FieldTypes) {
        self.0.extend(other.0);
    }
}
