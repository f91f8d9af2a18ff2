//! CLI error types.

use docnav_config::ConfigError;
use docnav_site::{SidebarFileError, SiteError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sidebar(#[from] SidebarFileError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
