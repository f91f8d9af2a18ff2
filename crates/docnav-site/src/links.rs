//! Persistent navigation links (navbar and footer).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal placement hint for a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPosition {
    /// Leading edge.
    Left,
    /// Trailing edge.
    #[default]
    Right,
}

/// Navigation surface a link is shown on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkLocation {
    /// Top navigation bar.
    Navbar,
    /// Page footer.
    Footer,
}

impl fmt::Display for LinkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navbar => f.write_str("navbar"),
            Self::Footer => f.write_str("footer"),
        }
    }
}

/// Where a link points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NavTarget {
    /// Document slug, resolved through the route table.
    Doc(String),
    /// Internal route path. Normalized with [`normalize_path`] before lookup.
    Path(String),
    /// External URL.
    External(String),
}

impl NavTarget {
    /// Create an internal path target, normalizing the path.
    #[must_use]
    pub fn path(path: &str) -> Self {
        Self::Path(normalize_path(path))
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doc(slug) => write!(f, "doc:{slug}"),
            Self::Path(path) | Self::External(path) => f.write_str(path),
        }
    }
}

/// Link shown in persistent navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Link target.
    pub target: NavTarget,
    /// Placement hint.
    pub position: LinkPosition,
    /// Navigation surface.
    pub location: LinkLocation,
}

impl NavLink {
    /// Create a link with the default position.
    #[must_use]
    pub fn new(label: impl Into<String>, target: NavTarget, location: LinkLocation) -> Self {
        Self {
            label: label.into(),
            target,
            position: LinkPosition::default(),
            location,
        }
    }

    /// Set the placement hint.
    #[must_use]
    pub fn with_position(mut self, position: LinkPosition) -> Self {
        self.position = position;
        self
    }
}

/// Normalize an internal route path.
///
/// Ensures a single leading slash and strips trailing slashes:
/// - `"docs/intro"` -> `"/docs/intro"`
/// - `"/help/"` -> `"/help"`
/// - `""` -> `"/"`
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}
