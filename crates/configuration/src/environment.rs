//! Read configuration values from the process environment, or a fixed set of
//! variables in tests.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The name of an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("the environment variable {0} is not set")]
    VariableNotPresent(Variable),
    #[error("the environment variable {0} is not valid unicode")]
    VariableNotUnicode(Variable),
}

/// A source of environment variables.
pub trait Environment {
    fn read(&self, variable: &Variable) -> Result<String, Error>;
}

impl<T: Environment> Environment for &T {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        (**self).read(variable)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        std::env::var(&variable.0).map_err(|error| match error {
            std::env::VarError::NotPresent => Error::VariableNotPresent(variable.clone()),
            std::env::VarError::NotUnicode(_) => Error::VariableNotUnicode(variable.clone()),
        })
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(HashMap<Variable, String>);

impl<const N: usize> From<[(Variable, String); N]> for FixedEnvironment {
    fn from(entries: [(Variable, String); N]) -> Self {
        Self(HashMap::from(entries))
    }
}

impl Environment for FixedEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        self.0
            .get(variable)
            .cloned()
            .ok_or_else(|| Error::VariableNotPresent(variable.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_environment_reads_known_variables() {
        let environment = FixedEnvironment::from([(
            Variable::from("VIZ_DATABASE_URL"),
            "mysql://localhost/viz".to_string(),
        )]);
        assert_eq!(
            environment.read(&"VIZ_DATABASE_URL".into()).unwrap(),
            "mysql://localhost/viz"
        );
        assert!(matches!(
            environment.read(&"OTHER".into()),
            Err(Error::VariableNotPresent(_))
        ));
    }
}
