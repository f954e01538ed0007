//! Handle the select list and table list translation.

use query_engine_sql::sql;

use crate::translation::request::{InvolvedRecord, Selection};

/// Translate the selections of a request to a select list.
/// No selections means selecting every column.
pub(crate) fn translate_selections(selections: &[Selection]) -> sql::ast::SelectList {
    if selections.is_empty() {
        return sql::ast::SelectList::SelectStar;
    }
    sql::ast::SelectList::SelectList(
        selections
            .iter()
            .map(|selection| {
                (
                    sql::helpers::make_column_alias(selection.rename.clone()),
                    sql::ast::Expression::RawSql(selection.expression.clone()),
                )
            })
            .collect(),
    )
}

/// Every involved table is listed in the FROM clause, customized or not.
pub(crate) fn translate_from(involved_records: &[InvolvedRecord]) -> sql::ast::From {
    sql::ast::From {
        tables: involved_records
            .iter()
            .map(|record| sql::ast::TableName(record.name.clone()))
            .collect(),
    }
}
