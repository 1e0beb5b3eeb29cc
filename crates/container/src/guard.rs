use crate::ContainerError;

/// Argument guards for public entry points that accept optional handles
pub struct Guard;

impl Guard {
    /// Unwrap `value` or fail with [`ContainerError::ArgumentNull`] naming `parameter`
    pub fn against_null<T>(value: Option<T>, parameter: &str) -> Result<T, ContainerError> {
        value.ok_or_else(|| ContainerError::argument_null(parameter))
    }
}
