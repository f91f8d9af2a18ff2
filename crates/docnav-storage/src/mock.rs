//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use crate::storage::{Document, Storage, StorageError, StorageErrorKind};

/// Mock storage for testing.
///
/// Stores documents in memory. Use the builder methods to configure the mock
/// with test data.
///
/// # Example
///
/// ```ignore
/// use docnav_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_document("basics-intro", "Introduction")
///     .with_document("api-query", "Query");
///
/// let docs = storage.scan().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: Vec<Document>,
    fail_scan: bool,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given slug and title.
    #[must_use]
    pub fn with_document(mut self, slug: impl Into<String>, title: impl Into<String>) -> Self {
        self.documents.push(Document::new(slug, title));
        self
    }

    /// Add a fully specified document.
    #[must_use]
    pub fn with(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Make every `scan()` call fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_scan = true;
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if self.fail_scan {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend("Mock"));
        }
        Ok(self.documents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_returns_documents_in_insertion_order() {
        let storage = MockStorage::new()
            .with_document("b", "B")
            .with_document("a", "A");

        let docs = storage.scan().unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].slug, "b");
        assert_eq!(docs[1].slug, "a");
    }

    #[test]
    fn test_failing_scan() {
        let err = MockStorage::new().failing().scan().unwrap_err();
        assert_eq!(err.to_string(), "[Mock] Error");
    }
}
