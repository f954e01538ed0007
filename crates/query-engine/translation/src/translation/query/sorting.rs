//! Translate the grouping and sorting of a request.

use query_engine_sql::sql;

use crate::translation::request::{Grouper, Sorter};

pub(crate) fn translate_group_by(groupers: &[Grouper]) -> sql::ast::GroupBy {
    sql::ast::GroupBy {
        elements: groupers
            .iter()
            .map(|grouper| sql::ast::Expression::RawSql(grouper.field.clone()))
            .collect(),
    }
}

/// The sort direction is passed through as the caller wrote it.
pub(crate) fn translate_order_by(sorters: &[Sorter]) -> sql::ast::OrderBy {
    sql::ast::OrderBy {
        elements: sorters
            .iter()
            .map(|sorter| sql::ast::OrderByElement {
                target: sql::ast::Expression::RawSql(sorter.field.clone()),
                direction: sql::ast::OrderByDirection(sorter.order.clone()),
            })
            .collect(),
    }
}
