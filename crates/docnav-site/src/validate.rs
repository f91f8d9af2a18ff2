//! Navigation integrity checks.
//!
//! [`validate_navigation`] is a pure function over the route table, the
//! sidebar, and the persistent links. It reports every finding instead of
//! stopping at the first one.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::links::{LinkLocation, NavLink, NavTarget, normalize_path};
use crate::routes::{RouteTable, RouteTarget};
use crate::sidebar::Sidebar;

/// How serious an issue is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported; the build continues.
    Warning,
    /// The navigation graph is broken.
    Error,
}

/// Navigation integrity finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavIssue {
    /// Document listed in no sidebar category; reachable only by direct path.
    #[error("Document '{slug}' is not listed in any sidebar category")]
    OrphanDocument {
        /// Document slug.
        slug: String,
    },
    /// Document listed more than once across the sidebar.
    #[error("Document '{slug}' is listed {} times in the sidebar ({})", .categories.len(), .categories.join(", "))]
    DuplicateSidebarEntry {
        /// Document slug.
        slug: String,
        /// Category label of every occurrence, in order.
        categories: Vec<String>,
    },
    /// Sidebar entry with no document route.
    #[error("Sidebar category '{category}' lists '{slug}' which has no route")]
    UnresolvedSidebarEntry {
        /// Category label.
        category: String,
        /// Document slug.
        slug: String,
    },
    /// Internal link with no matching route.
    #[error("{location} link '{label}' points to '{target}' which has no route")]
    UnresolvedLink {
        /// Link label.
        label: String,
        /// Navigation surface.
        location: LinkLocation,
        /// Link target as written.
        target: String,
    },
    /// External link that is not an http(s) URL.
    #[error("{location} link '{label}' has invalid external URL '{url}'")]
    InvalidExternalUrl {
        /// Link label.
        label: String,
        /// Navigation surface.
        location: LinkLocation,
        /// Offending URL.
        url: String,
    },
    /// Static page linked from no navigation surface.
    #[error("Page '{path}' is not linked from the navbar or footer")]
    UnreachablePage {
        /// Page path.
        path: String,
    },
}

impl NavIssue {
    /// Severity of this issue.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::OrphanDocument { .. }
            | Self::DuplicateSidebarEntry { .. }
            | Self::UnreachablePage { .. } => Severity::Warning,
            Self::UnresolvedSidebarEntry { .. }
            | Self::UnresolvedLink { .. }
            | Self::InvalidExternalUrl { .. } => Severity::Error,
        }
    }
}

/// Validate the navigation graph.
///
/// Returns an empty list when every sidebar entry and link resolves, every
/// document is listed in the sidebar, and every static page other than `/`
/// is linked from the navbar or footer.
#[must_use]
pub fn validate_navigation(routes: &RouteTable, sidebar: &Sidebar, links: &[NavLink]) -> Vec<NavIssue> {
    let mut issues = Vec::new();

    // Sidebar entries must resolve; record occurrences for duplicate detection
    let mut occurrences: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for (category, slug) in sidebar.entries() {
        if routes.document_path(slug).is_none() {
            issues.push(NavIssue::UnresolvedSidebarEntry {
                category: category.to_owned(),
                slug: slug.to_owned(),
            });
        }
        let seen = occurrences.entry(slug).or_default();
        if seen.is_empty() {
            first_seen.push(slug);
        }
        seen.push(category.to_owned());
    }

    for slug in first_seen {
        if let Some(categories) = occurrences.remove(slug)
            && categories.len() > 1
        {
            issues.push(NavIssue::DuplicateSidebarEntry {
                slug: slug.to_owned(),
                categories,
            });
        }
    }

    for slug in routes.document_slugs() {
        if !sidebar.contains(slug) {
            issues.push(NavIssue::OrphanDocument {
                slug: slug.to_owned(),
            });
        }
    }

    let mut linked_paths: HashSet<String> = HashSet::new();
    for link in links {
        match &link.target {
            NavTarget::Doc(slug) => {
                if routes.document_path(slug).is_none() {
                    issues.push(unresolved(link));
                }
            }
            NavTarget::Path(path) => {
                let path = normalize_path(path);
                if routes.contains(&path) {
                    linked_paths.insert(path);
                } else {
                    issues.push(unresolved(link));
                }
            }
            NavTarget::External(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    issues.push(NavIssue::InvalidExternalUrl {
                        label: link.label.clone(),
                        location: link.location,
                        url: url.clone(),
                    });
                }
            }
        }
    }

    for (path, target) in routes.iter() {
        if matches!(target, RouteTarget::Page { .. }) && path != "/" && !linked_paths.contains(path)
        {
            issues.push(NavIssue::UnreachablePage {
                path: path.to_owned(),
            });
        }
    }

    issues
}

fn unresolved(link: &NavLink) -> NavIssue {
    NavIssue::UnresolvedLink {
        label: link.label.clone(),
        location: link.location,
        target: link.target.to_string(),
    }
}
