//! Pairwise co-authorship counting over author records.

pub mod aggregate;
pub mod record;

pub use aggregate::{aggregate, pair_key, CollaborationCount};
pub use record::{AuthorRecord, CollaborationType};
