//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting document discovery,
//! along with [`StorageError`] for unified error handling across backends.

use std::path::PathBuf;

/// Document discovered by a storage scan.
///
/// # Slug Convention
///
/// The `slug` is the document's unique key and is used to derive its
/// canonical route:
/// - `"basics-intro"` - top-level document
/// - `"guides/setup"` - document in a subdirectory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Unique document key (front matter `id` or file path without `.md`).
    pub slug: String,
    /// Document title (resolved: front matter `title` > H1 > filename).
    pub title: String,
    /// Shorter label for navigation surfaces.
    pub sidebar_label: Option<String>,
    /// Source file path relative to the storage root. `None` for documents
    /// that were declared rather than discovered.
    pub source: Option<PathBuf>,
}

impl Document {
    /// Create a document with only slug and title.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            sidebar_label: None,
            source: None,
        }
    }

    /// Label to use in navigation (sidebar label if set, otherwise title).
    #[must_use]
    pub fn label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }
}

/// Storage abstraction for document discovery.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait Storage: Send + Sync {
    /// Scan storage and return all documents.
    ///
    /// Returns an empty list when the storage root does not exist.
    fn scan(&self) -> Result<Vec<Document>, StorageError>;
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_label_prefers_sidebar_label() {
        let mut doc = Document::new("api-query", "Query Reference");
        assert_eq!(doc.label(), "Query Reference");

        doc.sidebar_label = Some("Query".to_owned());
        assert_eq!(doc.label(), "Query");
    }

    #[test]
    fn test_error_display_full() {
        let err = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            Some(PathBuf::from("docs/intro.md")),
        )
        .with_backend("Fs");

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "[Fs] Not found: missing (path: docs/intro.md)"
        );
    }

    #[test]
    fn test_error_display_minimal() {
        let err = StorageError::new(StorageErrorKind::InvalidPath);
        assert_eq!(err.to_string(), "Invalid path");
    }

    #[test]
    fn test_error_source_is_exposed() {
        use std::error::Error as _;

        let err = StorageError::io(std::io::Error::other("boom"), None);
        assert!(err.source().is_some());
        assert_eq!(err.kind, StorageErrorKind::Other);
    }
}
