//! Configuration for the analysis service.

use query_engine_metadata::metadata;

use crate::values::PoolSettings;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration': secrets are resolved, and the configured
/// field types are layered over the built-in record metadata.
#[derive(Debug)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub pool_settings: PoolSettings,
    pub connection_uri: String,
}
