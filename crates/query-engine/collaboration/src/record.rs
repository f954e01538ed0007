//! Author records and the attribute a collaboration is counted over.

use serde::{Deserialize, Serialize};

/// The part of an author record the aggregation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub submission_id: String,
    pub country: String,
    pub organisation: String,
}

/// Which author attribute collaborations are counted over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollaborationType {
    Country,
    Organization,
    /// Any other name. Every author's attribute is the empty string.
    Unrecognized(String),
}

impl CollaborationType {
    /// The name used in requests and as the key of output rows.
    pub fn name(&self) -> &str {
        match self {
            CollaborationType::Country => "country",
            CollaborationType::Organization => "organization",
            CollaborationType::Unrecognized(name) => name,
        }
    }

    /// The attribute of `record` selected by this collaboration type.
    pub fn attribute<'r>(&self, record: &'r AuthorRecord) -> &'r str {
        match self {
            CollaborationType::Country => &record.country,
            CollaborationType::Organization => &record.organisation,
            CollaborationType::Unrecognized(_) => "",
        }
    }
}

impl From<&str> for CollaborationType {
    fn from(name: &str) -> Self {
        match name {
            "country" => CollaborationType::Country,
            "organization" => CollaborationType::Organization,
            other => CollaborationType::Unrecognized(other.to_string()),
        }
    }
}

impl std::fmt::Display for CollaborationType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
