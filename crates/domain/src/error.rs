//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `#[from]`.

/// Top-level error for folio operations.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("failed to parse profile document")]
    Parse(#[from] serde_json::Error),

    #[error("profile source error")]
    Source(#[from] SourceError),

    #[error("preference storage error")]
    Storage(#[from] StorageError),
}

/// A domain invariant was violated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

/// A named page element or document resource does not exist.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{kind} `{id}` not found")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub id: String,
}

/// The profile document could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("failed to read profile file")]
    Io(#[from] std::io::Error),
}

/// The persisted preference could not be read or written.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_folio_error() {
        let err: FolioError = ValidationError::EmptyField("name").into();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::EmptyField("name"))
        ));
    }

    #[test]
    fn should_describe_missing_element() {
        let err = NotFoundError {
            kind: "element",
            id: "about".to_string(),
        };
        assert_eq!(err.to_string(), "element `about` not found");
    }
}
