//! Handle filtering/where clauses translation.

use query_engine_metadata::metadata;
use query_engine_sql::sql;

use super::values;
use crate::translation::request::{AnalysisRequest, Filter, InvolvedRecord, Joiner};

const DATA_SET_COLUMN: &str = "data_set";
const RECORD_GROUP_COLUMN: &str = "rg_id";

/// Build the WHERE predicate: `true`, followed by the dataset scopes, the
/// record group scopes, the join conditions and the user filters, all ANDed.
pub(crate) fn translate_where(
    metadata: &metadata::Metadata,
    request: &AnalysisRequest,
) -> sql::ast::Expression {
    let data_set = sql::ast::Value::String(request.data_set.clone());
    let record_group = sql::ast::Value::String(request.record_group_id.to_string());

    let data_set_scopes = scope_expressions(&request.involved_records, DATA_SET_COLUMN, &data_set);
    let record_group_scopes =
        scope_expressions(&request.involved_records, RECORD_GROUP_COLUMN, &record_group);
    let joins = request.joiners.iter().map(translate_joiner);
    let filters = request
        .filters
        .iter()
        .map(|filter| translate_filter(metadata, filter));

    sql::helpers::and_all(
        data_set_scopes
            .chain(record_group_scopes)
            .chain(joins)
            .chain(filters),
    )
}

/// `<table>.<column> = '<value>'` for every table that is not customized.
fn scope_expressions<'a>(
    involved_records: &'a [InvolvedRecord],
    column: &'a str,
    value: &'a sql::ast::Value,
) -> impl Iterator<Item = sql::ast::Expression> + 'a {
    involved_records
        .iter()
        .filter(|record| !record.customized)
        .map(move |record| {
            sql::helpers::equals(
                sql::ast::Expression::ColumnReference(sql::ast::ColumnReference::TableColumn {
                    table: sql::ast::TableName(record.name.clone()),
                    name: sql::ast::ColumnName(column.to_string()),
                }),
                sql::ast::Expression::Value(value.clone()),
            )
        })
}

fn translate_joiner(joiner: &Joiner) -> sql::ast::Expression {
    sql::helpers::equals(
        sql::ast::Expression::RawSql(joiner.left.clone()),
        sql::ast::Expression::RawSql(joiner.right.clone()),
    )
}

fn translate_filter(metadata: &metadata::Metadata, filter: &Filter) -> sql::ast::Expression {
    sql::ast::Expression::BinaryOperation {
        left: Box::new(sql::ast::Expression::RawSql(filter.field.clone())),
        operator: sql::ast::BinaryOperator(filter.comparator.clone()),
        right: Box::new(sql::ast::Expression::Value(values::translate_filter_value(
            metadata,
            &filter.field,
            &filter.value,
        ))),
    }
}
