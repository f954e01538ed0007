//! Convert the parsed configuration into the runtime configuration.

use std::path::PathBuf;

use query_engine_metadata::metadata;

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ConnectionUri, Secret};
use crate::version1::{ParsedConfiguration, CONFIGURATION_FILENAME};

/// Resolve secrets and build the field-type registry.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let connection_uri = match parsed_config.connection_settings.connection_uri {
        ConnectionUri(Secret::Plain(uri)) => Ok(uri),
        ConnectionUri(Secret::FromEnvironment { variable }) => {
            environment.read(&variable).map_err(|error| {
                MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                    file_path: PathBuf::from(CONFIGURATION_FILENAME),
                    message: error.to_string(),
                }
            })
        }
    }?;

    let mut metadata = metadata::Metadata::exportable();
    metadata.field_types.merge(parsed_config.field_types);

    Ok(Configuration {
        metadata,
        pool_settings: parsed_config.pool_settings,
        connection_uri,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::environment::{FixedEnvironment, Variable};

    #[test]
    fn reads_connection_uri_from_environment() {
        let environment = FixedEnvironment::from([(
            Variable::from("VIZ_DATABASE_URL"),
            "mysql://root@localhost/viz".to_string(),
        )]);
        let configuration =
            make_runtime_configuration(ParsedConfiguration::initial(), environment).unwrap();
        assert_eq!(configuration.connection_uri, "mysql://root@localhost/viz");
    }

    #[test]
    fn missing_variable_is_an_error() {
        let result =
            make_runtime_configuration(ParsedConfiguration::initial(), FixedEnvironment::default());
        assert!(matches!(
            result,
            Err(MakeRuntimeConfigurationError::MissingEnvironmentVariable { .. })
        ));
    }

    #[test]
    fn configured_field_types_override_builtin_ones() {
        let mut parsed = ParsedConfiguration::initial();
        parsed.connection_settings.connection_uri = "mysql://localhost/viz".into();
        parsed.field_types = metadata::FieldTypes(BTreeMap::from([
            ("a_country".to_string(), metadata::ValueKind::Numeric),
            ("view_score".to_string(), metadata::ValueKind::Numeric),
        ]));
        let configuration =
            make_runtime_configuration(parsed, FixedEnvironment::default()).unwrap();
        assert_eq!(
            configuration.metadata.type_of("view_score"),
            metadata::ValueKind::Numeric
        );
        assert_eq!(
            configuration.metadata.type_of("a_country"),
            metadata::ValueKind::Numeric
        );
        assert_eq!(
            configuration.metadata.type_of("s_is_accepted"),
            metadata::ValueKind::Boolean
        );
    }
}
