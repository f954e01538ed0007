//! Transient state used by the service.
//!
//! This is initialized on startup.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::{info_span, Instrument};

use query_engine_execution::metrics;
use viz_analysis_configuration::{Configuration, PoolSettings};

/// State for our service.
#[derive(Debug, Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
    pub pool: MySqlPool,
}

/// Create a connection pool and wrap it inside a service State.
pub async fn create_state(
    configuration: &Configuration,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let pool = info_span!("Create connection pool")
        .in_scope(|| create_pool(&configuration.connection_uri, &configuration.pool_settings))
        .map_err(InitializationError::UnableToCreatePool)?;

    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        Ok::<_, InitializationError>(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    Ok(State { metrics, pool })
}

/// Create a connection pool with the given settings. Connections are opened
/// on first use.
fn create_pool(
    connection_uri: &str,
    pool_settings: &PoolSettings,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(pool_settings.max_connections)
        .acquire_timeout(Duration::from_secs(pool_settings.pool_timeout))
        .idle_timeout(pool_settings.idle_timeout.map(Duration::from_secs))
        .max_lifetime(pool_settings.connection_lifetime.map(Duration::from_secs))
        .connect_lazy(connection_uri)
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
