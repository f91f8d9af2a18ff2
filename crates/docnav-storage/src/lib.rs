//! Document discovery for docnav.
//!
//! This crate provides a [`Storage`] trait for abstracting document discovery
//! from the underlying backend, so the navigation resolver can be exercised
//! without touching the real filesystem.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with a single `scan()` method
//! - [`FsStorage`] implementation reading markdown files and their front matter
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docnav_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for doc in storage.scan()? {
//!     println!("{}: {}", doc.slug, doc.title);
//! }
//! ```

mod front_matter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;
mod title;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Document, Storage, StorageError, StorageErrorKind};
