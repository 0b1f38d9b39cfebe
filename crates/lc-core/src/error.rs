//! Error types shared by every collection in the workspace.

use thiserror::Error;

/// Contract violations reported by the collections.
///
/// None of these are transient: the operation was rejected before any
/// state was touched, so the collection is exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Index out of bounds: {index} (length: {length})")]
    IndexOutOfBounds { index: usize, length: usize },

    #[error("Stack is empty")]
    EmptyStack,

    #[error("Queue is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CollectionError::IndexOutOfBounds { index: 7, length: 3 };
        assert_eq!(err.to_string(), "Index out of bounds: 7 (length: 3)");
        assert_eq!(CollectionError::EmptyStack.to_string(), "Stack is empty");
        assert_eq!(CollectionError::EmptyQueue.to_string(), "Queue is empty");
    }

    #[test]
    fn test_errors_are_distinguishable() {
        assert_ne!(
            CollectionError::EmptyStack,
            CollectionError::IndexOutOfBounds { index: 0, length: 0 }
        );
    }
}
