//! Error types for importing host variables.

/// Errors raised while building a [`GameState`](crate::GameState) from the
/// host engine's variable store.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The variable store was not a JSON object.
    #[error("host variables must be a JSON object")]
    NotAnObject,

    /// A required variable was absent.
    #[error("missing state variable `{field}`")]
    MissingField { field: String },

    /// A variable was present but held the wrong kind of value.
    #[error("state variable `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// The raw text could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StateError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }
}
