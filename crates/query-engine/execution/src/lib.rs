//! Query execution against a MySQL database.

pub mod authors;
pub mod error;
pub mod metrics;
pub mod query;
