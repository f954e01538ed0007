//! Load the author records a co-authorship analysis runs over.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use tracing::{info_span, Instrument};

use query_engine_collaboration::AuthorRecord;

use crate::error::Error;

const AUTHORS_BY_RECORD_GROUP: &str =
    "SELECT a_submission_id, a_country, a_organisation FROM author_record WHERE rg_id = ?";

/// Somewhere author records can be read from.
#[async_trait]
pub trait AuthorRecordSource {
    /// The author records of one record group, in storage order.
    /// `None` when the record group has no authors at all.
    async fn find_by_record_group(
        &self,
        record_group_id: i64,
    ) -> Result<Option<Vec<AuthorRecord>>, Error>;
}

/// Author records stored in the `author_record` table.
#[derive(Debug, Clone)]
pub struct MySqlAuthorRecords {
    pool: MySqlPool,
}

impl MySqlAuthorRecords {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRecordSource for MySqlAuthorRecords {
    async fn find_by_record_group(
        &self,
        record_group_id: i64,
    ) -> Result<Option<Vec<AuthorRecord>>, Error> {
        let rows: Vec<(Option<String>, Option<String>, Option<String>)> =
            sqlx::query_as(AUTHORS_BY_RECORD_GROUP)
                .bind(record_group_id)
                .fetch_all(&self.pool)
                .instrument(info_span!("Fetch author records", record_group_id))
                .await?;

        if rows.is_empty() {
            return Ok(None);
        }

        // missing values take part in the aggregation as empty strings
        Ok(Some(
            rows.into_iter()
                .map(|(submission_id, country, organisation)| AuthorRecord {
                    submission_id: submission_id.unwrap_or_default(),
                    country: country.unwrap_or_default(),
                    organisation: organisation.unwrap_or_default(),
                })
                .collect(),
        ))
    }
}
