use crate::participant::ParticipantError;
use shuttle_container::ContainerError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems found while building or applying a bootstrap
/// configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Could not find a module named '{name}' to bootstrap")]
    ModuleNotFound { name: String },

    #[error("Type '{type_name}' implements '{capability}' but has no default constructor")]
    DefaultConstructorRequired {
        capability: &'static str,
        type_name: String,
    },

    #[error("Type '{type_name}' is not assignable to '{capability}'")]
    NotAssignable {
        capability: &'static str,
        type_name: String,
    },

    #[error("Invalid configuration section '{group}/{section}': {source}")]
    InvalidSection {
        group: String,
        section: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Could not read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid module name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ConfigurationError {
    pub fn module_not_found(name: impl Into<String>) -> Self {
        Self::ModuleNotFound { name: name.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// Error surfaced by the bootstrap runners
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Bootstrap configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid argument: {0}")]
    Argument(#[from] ContainerError),

    #[error("Participant '{participant}' ({capability}) failed: {source}")]
    Participant {
        participant: String,
        capability: &'static str,
        #[source]
        source: ParticipantError,
    },
}

impl BootstrapError {
    /// The configuration error behind this failure, if any
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            BootstrapError::Configuration(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, BootstrapError::Argument(_))
    }

    /// Take the participant's own error back out, unmodified
    pub fn into_participant_error(self) -> Option<ParticipantError> {
        match self {
            BootstrapError::Participant { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;
