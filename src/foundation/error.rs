//! Error taxonomy shared across the crate.

/// Convenience result type used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy.
///
/// Every failure is a programming error in composition setup; nothing here is
/// transient or retryable.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Malformed interpolation or keyframe ranges (non-monotonic input,
    /// length mismatch, non-finite values).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A frame index outside the composition's `[0, total_frames)` window.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Invalid composition or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`ReelError::OutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let e = ReelError::invalid_range("inputRange must be strictly increasing");
        assert_eq!(
            e.to_string(),
            "invalid range: inputRange must be strictly increasing"
        );

        let e = ReelError::out_of_range("frame 99 >= total 60");
        assert!(e.to_string().starts_with("out of range:"));
    }
}
