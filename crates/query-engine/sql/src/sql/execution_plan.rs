//! Describe the SQL execution plan.

use super::ast;
use super::string;

/// Definition of an execution plan to be run against the database.
#[derive(Debug)]
pub struct ExecutionPlan<Query> {
    /// The query.
    pub query: Query,
}

/// The analysis query to run.
#[derive(Debug)]
pub struct Query {
    /// The query.
    pub query: ast::Select,
}

impl Query {
    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> string::SQL {
        select_to_sql(&self.query)
    }
}

/// Build an execution plan around a single select.
pub fn simple_query_execution_plan(query: ast::Select) -> ExecutionPlan<Query> {
    ExecutionPlan {
        query: Query { query },
    }
}

/// Convert a select AST to a SQL string.
pub fn select_to_sql(select: &ast::Select) -> string::SQL {
    let mut sql = string::SQL::new();
    select.to_sql(&mut sql);
    sql
}
