use thiserror::Error;

/// Errors raised by container adapters and the argument guards
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Argument '{parameter}' may not be null")]
    ArgumentNull { parameter: String },

    #[error("Invalid lifestyle: {lifestyle}")]
    InvalidLifestyle { lifestyle: String },

    #[error("Service not found: {service_type}")]
    ServiceNotFound { service_type: String },

    #[error("Registration of '{service_type}' failed: {message}")]
    RegistrationFailed {
        service_type: String,
        message: String,
    },

    #[error("Resolution of '{service_type}' failed: {message}")]
    ResolutionFailed {
        service_type: String,
        message: String,
    },
}

impl ContainerError {
    /// Create a new argument null error
    pub fn argument_null(parameter: impl Into<String>) -> Self {
        Self::ArgumentNull {
            parameter: parameter.into(),
        }
    }

    /// Create a new service not found error
    pub fn service_not_found(service_type: impl Into<String>) -> Self {
        Self::ServiceNotFound {
            service_type: service_type.into(),
        }
    }

    pub fn registration_failed(service_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RegistrationFailed {
            service_type: service_type.into(),
            message: message.into(),
        }
    }

    pub fn resolution_failed(service_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResolutionFailed {
            service_type: service_type.into(),
            message: message.into(),
        }
    }
}
