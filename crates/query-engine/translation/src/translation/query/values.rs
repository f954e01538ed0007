//! Handle the translation of literal values.

use query_engine_metadata::metadata;
use query_engine_sql::sql;

/// Convert a filter's literal into a SQL value, based on the declared kind
/// of the field it is compared against.
///
/// Numeric and boolean fields take the literal as written; anything else,
/// including fields the registry does not know, gets it single-quoted.
pub fn translate_filter_value(
    metadata: &metadata::Metadata,
    field: &str,
    value: &str,
) -> sql::ast::Value {
    if metadata.type_of(field).is_unquoted() {
        sql::ast::Value::Literal(value.to_string())
    } else {
        sql::ast::Value::String(value.to_string())
    }
}
