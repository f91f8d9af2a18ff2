//! Sidebar: ordered categories of document slugs.
//!
//! The sidebar is built verbatim from its declaration. Category order and
//! in-category order are preserved exactly; entries are never reordered or
//! deduplicated.

use std::collections::HashSet;

use docnav_storage::Document;
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::validate::NavIssue;

/// Declared sidebar category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category label.
    pub label: String,
    /// Document slugs in display order.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Category {
    /// Create a category from a label and slugs.
    #[must_use]
    pub fn new<I, S>(label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Position of a document within the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Label of the category listing the document.
    pub category: &'a str,
    /// Zero-based position within the category.
    pub position: usize,
}

/// Resolved sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    categories: Vec<Category>,
}

impl Sidebar {
    /// Categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All slugs in display order, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|category| {
            category
                .items
                .iter()
                .map(move |slug| (category.label.as_str(), slug.as_str()))
        })
    }

    /// Check whether any category lists the slug.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.entries().any(|(_, s)| s == slug)
    }

    /// Category and position of the first occurrence of a slug.
    #[must_use]
    pub fn placement(&self, slug: &str) -> Option<Placement<'_>> {
        self.categories.iter().find_map(|category| {
            category
                .items
                .iter()
                .position(|s| s == slug)
                .map(|position| Placement {
                    category: &category.label,
                    position,
                })
        })
    }

    /// Slugs in reading order, keeping only the first occurrence of each.
    #[must_use]
    pub fn reading_order(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries()
            .map(|(_, slug)| slug)
            .filter(|slug| seen.insert(*slug))
            .collect()
    }
}

/// Result of [`build_sidebar`]: the sidebar plus non-fatal findings.
#[derive(Clone, Debug)]
pub struct SidebarBuild {
    /// Resolved sidebar.
    pub sidebar: Sidebar,
    /// Orphan document warnings.
    pub warnings: Vec<NavIssue>,
}

/// Build the sidebar from declared categories.
///
/// Documents that no category lists are reported as
/// [`NavIssue::OrphanDocument`] warnings; they stay reachable by direct path.
///
/// # Errors
///
/// Returns `NavError::DanglingReference` for the first category entry that
/// names no document. No partial sidebar is produced.
pub fn build_sidebar(categories: &[Category], documents: &[Document]) -> Result<SidebarBuild, NavError> {
    let known: HashSet<&str> = documents.iter().map(|d| d.slug.as_str()).collect();

    for category in categories {
        if let Some(slug) = category.items.iter().find(|s| !known.contains(s.as_str())) {
            return Err(NavError::DanglingReference {
                category: category.label.clone(),
                slug: slug.clone(),
            });
        }
    }

    let sidebar = Sidebar {
        categories: categories.to_vec(),
    };

    let listed: HashSet<&str> = sidebar.entries().map(|(_, slug)| slug).collect();
    let warnings: Vec<NavIssue> = documents
        .iter()
        .filter(|d| !listed.contains(d.slug.as_str()))
        .map(|d| NavIssue::OrphanDocument {
            slug: d.slug.clone(),
        })
        .collect();

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    Ok(SidebarBuild { sidebar, warnings })
}
