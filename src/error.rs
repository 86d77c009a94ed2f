/// Errors returned by blink sequence operations.
///
/// All failures are synchronous and leave existing state untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BlinkError {
    /// Malformed config, or tile count / target index out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A sequence is already running on this board.
    #[error("a blink sequence is already running")]
    ConflictingOperation,
    /// Settings file could not be read or parsed.
    #[error("blink settings error: {0}")]
    Config(String),
}

impl BlinkError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BlinkError::invalid("tile_count must be > 0").to_string(),
            "invalid argument: tile_count must be > 0"
        );
        assert_eq!(
            BlinkError::ConflictingOperation.to_string(),
            "a blink sequence is already running"
        );
    }
}
