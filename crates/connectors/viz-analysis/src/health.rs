//! Health check for the service.

use sqlx::mysql::MySqlPool;
use tracing::{info_span, Instrument};

use query_engine_execution::error::Error;

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &MySqlPool) -> Result<(), Error> {
    let one: i64 = sqlx::query_scalar("SELECT 1")
        .fetch_one(pool)
        .instrument(info_span!("Health check"))
        .await?;

    if one == 1 {
        Ok(())
    } else {
        Err(Error::DB(sqlx::Error::Protocol(format!(
            "health check returned {one} instead of 1"
        ))))
    }
}
