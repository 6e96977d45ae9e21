//! Error taxonomy for coordinate normalization

use thiserror::Error;

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Why a raw coordinate pair could not be turned into a confident position.
///
/// None of these escape `normalize_coordinates`; they collapse into the
/// sentinel there. `normalize` hands them to callers that want to tell
/// "unknown" apart from a real (0, 0).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Value out of domain: {message}")]
    OutOfDomain { message: String },

    #[error("Projection failed: {message}")]
    ProjectionFailure { message: String },

    #[error("Ambiguous coordinate: {message}")]
    Ambiguous { message: String },
}

impl NormalizeError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    pub fn out_of_domain(message: impl Into<String>) -> Self {
        Self::OutOfDomain {
            message: message.into(),
        }
    }

    pub fn projection(message: impl Into<String>) -> Self {
        Self::ProjectionFailure {
            message: message.into(),
        }
    }

    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self::Ambiguous {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = NormalizeError::projection("no valid result after swap");
        let text = err.to_string();
        assert!(text.starts_with("Projection failed"));
        assert!(text.contains("no valid result after swap"));
    }

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(
            NormalizeError::malformed("x"),
            NormalizeError::MalformedInput { .. }
        ));
        assert!(matches!(
            NormalizeError::out_of_domain("x"),
            NormalizeError::OutOfDomain { .. }
        ));
        assert!(matches!(
            NormalizeError::ambiguous("x"),
            NormalizeError::Ambiguous { .. }
        ));
    }
}
