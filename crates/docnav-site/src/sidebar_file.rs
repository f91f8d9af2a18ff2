//! Sidebar declaration files.
//!
//! The sidebar is declared in a YAML or JSON file, chosen by extension:
//!
//! ```yaml
//! categories:
//!   - label: Basics
//!     items: [basics-intro, basics-setup]
//!   - label: API Reference
//!     items: [api-query]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::sidebar::Category;

/// On-disk sidebar layout.
#[derive(Debug, Default, Deserialize)]
struct SidebarFile {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Supported sidebar file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl SidebarFormat {
    /// Detect format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Error loading a sidebar declaration.
#[derive(Debug, thiserror::Error)]
pub enum SidebarFileError {
    /// Extension is neither YAML nor JSON.
    #[error("Unsupported sidebar format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// File could not be read.
    #[error("Failed to read sidebar {}: {source}", .path.display())]
    Io {
        /// Sidebar file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// YAML parse failure.
    #[error("Invalid sidebar YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parse failure.
    #[error("Invalid sidebar JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse sidebar categories from file content.
///
/// Empty content yields no categories.
///
/// # Errors
///
/// Returns `SidebarFileError::Yaml` or `SidebarFileError::Json` for malformed input.
pub fn parse_sidebar(content: &str, format: SidebarFormat) -> Result<Vec<Category>, SidebarFileError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let file: SidebarFile = match format {
        SidebarFormat::Yaml => serde_yaml::from_str(trimmed)?,
        SidebarFormat::Json => serde_json::from_str(trimmed)?,
    };
    Ok(file.categories)
}

/// Load sidebar categories from a file.
///
/// A missing file yields no categories (every document is then reported as
/// an orphan).
///
/// # Errors
///
/// Returns an error for unsupported extensions, unreadable files, or
/// malformed content.
pub fn load_sidebar(path: &Path) -> Result<Vec<Category>, SidebarFileError> {
    let format = SidebarFormat::from_path(path)
        .ok_or_else(|| SidebarFileError::UnsupportedFormat(path.to_path_buf()))?;

    if !path.exists() {
        tracing::warn!(path = %path.display(), "Sidebar file not found, using empty sidebar");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| SidebarFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sidebar(&content, format)
}
