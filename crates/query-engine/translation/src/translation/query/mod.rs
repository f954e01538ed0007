//! Translate an analysis request into a single SQL SELECT.

mod fields;
mod filtering;
mod sorting;
pub mod values;

use query_engine_metadata::metadata;
use query_engine_sql::sql;

use super::request::AnalysisRequest;

/// Translate an analysis request to an execution plan.
///
/// Clauses follow the order of the lists in the request, so translating the
/// same request twice yields the same SQL text.
pub fn translate(
    metadata: &metadata::Metadata,
    request: &AnalysisRequest,
) -> sql::execution_plan::ExecutionPlan<sql::execution_plan::Query> {
    sql::execution_plan::simple_query_execution_plan(translate_query(metadata, request))
}

/// Translate an analysis request to a select AST.
pub fn translate_query(metadata: &metadata::Metadata, request: &AnalysisRequest) -> sql::ast::Select {
    sql::ast::Select {
        select_list: fields::translate_selections(&request.selections),
        from: fields::translate_from(&request.involved_records),
        where_: sql::ast::Where(filtering::translate_where(metadata, request)),
        group_by: sorting::translate_group_by(&request.groupers),
        order_by: sorting::translate_order_by(&request.sorters),
    }
}
