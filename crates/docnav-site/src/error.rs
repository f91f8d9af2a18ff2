//! Error types for navigation resolution.

use docnav_storage::StorageError;

/// Fatal navigation error. The build must abort.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// A document has an empty slug.
    #[error("Document slug cannot be empty")]
    EmptySlug,
    /// A document slug cannot form a URL path.
    #[error("Invalid document slug '{slug}': {reason}")]
    InvalidSlug {
        /// Offending slug.
        slug: String,
        /// Why the slug was rejected.
        reason: &'static str,
    },
    /// Two documents share a slug and would share a canonical path.
    #[error("Duplicate document slug '{slug}'")]
    DuplicateSlug {
        /// Shared slug.
        slug: String,
    },
    /// A static page collides with an existing route.
    #[error("Duplicate route '{path}'")]
    DuplicateRoute {
        /// Colliding path.
        path: String,
    },
    /// A sidebar category lists a slug with no document.
    #[error("Sidebar category '{category}' references unknown document '{slug}'")]
    DanglingReference {
        /// Category label.
        category: String,
        /// Missing slug.
        slug: String,
    },
}

/// Error returned by [`Site::build`](crate::Site::build).
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Document discovery failed.
    #[error("{0}")]
    Storage(#[from] StorageError),
    /// Navigation structure is inconsistent.
    #[error("{0}")]
    Nav(#[from] NavError),
}
