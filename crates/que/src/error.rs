//! Error types for que

use thiserror::Error;

/// Result type alias for que operations
pub type QueResult<T> = Result<T, QueError>;

/// Errors raised while building or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueError {
    /// Table name missing or blank at render time
    #[error("Empty table: a statement needs a table name")]
    EmptyTable,

    /// INSERT/UPDATE rendered without any fields
    #[error("Empty fields: {statement} requires at least one field")]
    EmptyFields { statement: &'static str },

    /// Unknown parameter style name
    #[error("Unsupported param style: '{0}'")]
    UnsupportedStyle(String),

    /// Two placeholders resolved to the same named parameter
    #[error("Field name collision: parameter '{token}' is bound more than once")]
    FieldNameCollision { token: String },

    /// Numbered placeholders must be numbered from 1 up without overflowing
    #[error("Invalid offset: placeholder number {offset} is out of range")]
    InvalidOffset { offset: usize },

    /// A sequence-only consumer was handed named parameters
    #[error("Named parameters cannot be passed positionally")]
    NamedParams,
}

impl QueError {
    /// Create an empty-fields error for the given statement kind
    pub fn empty_fields(statement: &'static str) -> Self {
        Self::EmptyFields { statement }
    }

    /// Create a collision error for a named placeholder
    pub fn collision(token: impl Into<String>) -> Self {
        Self::FieldNameCollision {
            token: token.into(),
        }
    }

    /// Check if this is a collision error
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::FieldNameCollision { .. })
    }

    /// Check if this is an empty-fields error
    pub fn is_empty_fields(&self) -> bool {
        matches!(self, Self::EmptyFields { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QueError::empty_fields("INSERT").to_string(),
            "Empty fields: INSERT requires at least one field"
        );
        assert_eq!(
            QueError::collision("id").to_string(),
            "Field name collision: parameter 'id' is bound more than once"
        );
        assert_eq!(
            QueError::InvalidOffset { offset: 0 }.to_string(),
            "Invalid offset: placeholder number 0 is out of range"
        );
        assert_eq!(
            QueError::UnsupportedStyle("bogus".into()).to_string(),
            "Unsupported param style: 'bogus'"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(QueError::collision("x").is_collision());
        assert!(QueError::empty_fields("UPDATE").is_empty_fields());
        assert!(!QueError::EmptyTable.is_collision());
    }
}
