use thiserror::Error;

/// Constraint violation raised while building a Block Kit object.
///
/// Every variant is produced at the moment a field is set; serialization
/// itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at most {max} characters long (got {actual})")]
    LengthExceeded {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("a maximum of {max} {field} are allowed")]
    TooManyItems { field: &'static str, max: usize },

    #[error("initial option `{value}` does not match any of the element's options")]
    UnknownInitialOption { value: String },
}

/// Failure to load a [`crate::core::config::BlockKitConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Reject `value` when it is longer than `max` characters.
pub(crate) fn ensure_max_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        tracing::debug!(field, max, actual, "Rejecting value over length limit");
        return Err(ValidationError::LengthExceeded { field, max, actual });
    }
    Ok(())
}
