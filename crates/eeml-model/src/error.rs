//! Error types for the EEML data model.

/// Errors raised while building or validating an EEML object graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EemlError {
    /// A field received a value outside its allowed set, or a required field is empty.
    #[error("{0}")]
    Validation(String),

    /// A textual value could not be turned into the type the field requires.
    #[error("{field} must be {expected}, got {found:?}")]
    TypeMismatch {
        /// Field being assigned.
        field: &'static str,
        /// Human readable description of the accepted kind.
        expected: &'static str,
        /// The offending input.
        found: String,
    },

    /// An environment was serialized without any data items.
    #[error("EEML requires at least one data item")]
    NoData,
}

impl EemlError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Convenience result type for model operations.
pub type EemlResult<T> = Result<T, EemlError>;
