//! SQL AST, its conversion to a SQL string, and the execution plan wrapping it.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
