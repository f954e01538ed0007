//! Database connection settings.

use crate::environment::Variable;
use crate::values::{ConnectionUri, Secret};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONNECTION_URI_VARIABLE: &str = "VIZ_DATABASE_URL";

/// Database connection settings.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    /// Connection string for a MySQL-compatible database.
    pub connection_uri: ConnectionUri,
}

impl DatabaseConnectionSettings {
    pub fn empty() -> Self {
        Self {
            connection_uri: ConnectionUri(Secret::FromEnvironment {
                variable: Variable::from(DEFAULT_CONNECTION_URI_VARIABLE),
            }),
        }
    }
}
