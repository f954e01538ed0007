//! Translate the incoming AnalysisRequest to an ExecutionPlan (SQL) to be run against the database.

pub mod query;
pub mod request;
