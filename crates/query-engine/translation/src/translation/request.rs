//! The analysis request sent by callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Describes an ad-hoc aggregation over the record tables.
///
/// Every list is optional in the serialized form and treated as empty when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// The data partition to scope the query to.
    pub data_set: String,
    /// The import batch to scope the query to.
    pub record_group_id: i64,
    #[serde(default)]
    pub involved_records: Vec<InvolvedRecord>,
    #[serde(default)]
    pub selections: Vec<Selection>,
    #[serde(default)]
    pub joiners: Vec<Joiner>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub groupers: Vec<Grouper>,
    #[serde(default)]
    pub sorters: Vec<Sorter>,
    /// Mode-specific parameters, e.g. `collabType`.
    #[serde(default)]
    pub extra_data: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisRequest {
    /// A request over the given dataset and record group with everything else empty.
    pub fn new(data_set: impl Into<String>, record_group_id: i64) -> Self {
        AnalysisRequest {
            data_set: data_set.into(),
            record_group_id,
            involved_records: vec![],
            selections: vec![],
            joiners: vec![],
            filters: vec![],
            groupers: vec![],
            sorters: vec![],
            extra_data: serde_json::Map::new(),
        }
    }
}

/// A table taking part in the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InvolvedRecord {
    pub name: String,
    /// A caller-defined view, exempt from the dataset and record group filters.
    #[serde(default)]
    pub customized: bool,
}

/// `expression AS rename`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Selection {
    pub expression: String,
    pub rename: String,
}

/// `left = right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Joiner {
    pub left: String,
    pub right: String,
}

/// `field comparator value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Filter {
    pub field: String,
    pub comparator: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Grouper {
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sorter {
    pub field: String,
    pub order: String,
}
