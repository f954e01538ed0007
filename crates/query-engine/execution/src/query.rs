//! Execute an execution plan against the database.

use serde_json::{Map, Value};
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use tracing::{info_span, Instrument};

use query_engine_sql::sql;

use crate::error::Error;
use crate::metrics;

/// A result row: column name to value.
pub type ResultRow = Map<String, Value>;

/// Execute an analysis query against MySQL and return its rows as JSON objects.
pub async fn execute(
    pool: &MySqlPool,
    metrics: &metrics::Metrics,
    plan: sql::execution_plan::ExecutionPlan<sql::execution_plan::Query>,
) -> Result<Vec<ResultRow>, Error> {
    let query = plan.query.query_sql();

    tracing::info!(generated_sql = %query.sql, "Analysis Query");

    let timer = metrics.time_query();
    // generated statements are rarely repeated, don't keep them in the statement cache
    let rows: Vec<MySqlRow> = sqlx::query(&query.sql)
        .persistent(false)
        .fetch_all(pool)
        .instrument(info_span!("Database request"))
        .await?;
    timer.observe_duration();

    let response = async { rows.iter().map(row_to_json).collect::<Result<Vec<_>, Error>>() }
        .instrument(info_span!("Create response"))
        .await?;

    Ok(response)
}

/// Convert a row to a JSON object, keeping the column order of the result set.
fn row_to_json(row: &MySqlRow) -> Result<ResultRow, Error> {
    let mut object = Map::new();
    for column in row.columns() {
        let type_name = column.type_info().name();
        let value =
            column_to_json(row, column.ordinal(), type_name).map_err(|source| Error::Decode {
                column: column.name().to_string(),
                type_name: type_name.to_string(),
                source,
            })?;
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

fn column_to_json(row: &MySqlRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }
    let value = match type_name {
        "BOOLEAN" => Value::Bool(row.try_get::<bool, _>(index)?),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            Value::from(row.try_get::<i64, _>(index)?)
        }
        "YEAR" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => Value::from(row.try_get::<u64, _>(index)?),
        "FLOAT" => Value::from(f64::from(row.try_get::<f32, _>(index)?)),
        "DOUBLE" => Value::from(row.try_get::<f64, _>(index)?),
        // decimals come over the wire as text
        "DECIMAL" => decimal_to_json(&row.try_get_unchecked::<String, _>(index)?),
        "DATE" => Value::String(row.try_get::<chrono::NaiveDate, _>(index)?.to_string()),
        "TIME" => Value::String(row.try_get::<chrono::NaiveTime, _>(index)?.to_string()),
        "DATETIME" => Value::String(
            row.try_get::<chrono::NaiveDateTime, _>(index)?
                .format("%Y-%m-%d %H:%M:%S%.f")
                .to_string(),
        ),
        "TIMESTAMP" => Value::String(
            row.try_get::<chrono::DateTime<chrono::Utc>, _>(index)?
                .to_rfc3339(),
        ),
        "JSON" => row.try_get::<sqlx::types::Json<Value>, _>(index)?.0,
        _ => Value::String(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}

/// Decimal text as a JSON number when it fits one, otherwise as a string.
fn decimal_to_json(text: &str) -> Value {
    match serde_json::from_str::<serde_json::Number>(text) {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_become_numbers() {
        assert_eq!(decimal_to_json("3.5000"), serde_json::json!(3.5));
        assert_eq!(decimal_to_json("42"), serde_json::json!(42));
        assert_eq!(decimal_to_json("-0.25"), serde_json::json!(-0.25));
    }

    #[test]
    fn unparseable_decimals_stay_text() {
        assert_eq!(decimal_to_json("NaN"), serde_json::json!("NaN"));
    }
}
