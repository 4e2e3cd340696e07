//! Error handling and result types for AvlTree operations.
//!
//! Both failure kinds are local and recoverable: the tree is left exactly as
//! it was before the failing call and remains fully usable afterwards.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvlTreeError {
    /// An absent key was passed to insert, delete, or search.
    InvalidKey,
    /// The key being inserted is already present.
    DuplicateKey,
}

impl AvlTreeError {
    /// Check if this error is a duplicate-key rejection
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey)
    }

    /// Check if this error is an absent-key rejection
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey)
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::InvalidKey => write!(f, "Invalid key: key must not be absent"),
            AvlTreeError::DuplicateKey => write!(f, "Duplicate key is not permitted"),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// General result type for tree operations
pub type TreeResult<T> = Result<T, AvlTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, AvlTreeError>;

/// Result extension trait for callers that treat tree errors as recoverable.
pub trait AvlResultExt<T> {
    /// Log the error and continue with the default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> AvlResultExt<T> for Result<T, AvlTreeError> {
    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "AVL tree operation failed, continuing");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        assert!(AvlTreeError::DuplicateKey.is_duplicate_key());
        assert!(!AvlTreeError::DuplicateKey.is_invalid_key());
        assert!(AvlTreeError::InvalidKey.is_invalid_key());
        assert!(!AvlTreeError::InvalidKey.is_duplicate_key());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AvlTreeError::DuplicateKey.to_string(),
            "Duplicate key is not permitted"
        );
        assert_eq!(
            AvlTreeError::InvalidKey.to_string(),
            "Invalid key: key must not be absent"
        );
    }

    #[test]
    fn test_or_default_with_log_recovers() {
        let failed: ModifyResult<bool> = Err(AvlTreeError::DuplicateKey);
        assert!(!failed.or_default_with_log());

        let ok: KeyResult<bool> = Ok(true);
        assert!(ok.or_default_with_log());
    }
}
