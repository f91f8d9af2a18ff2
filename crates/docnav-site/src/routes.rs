//! Route table: URL path to renderable unit.
//!
//! Every document yields exactly one canonical route at
//! `/<docs_route>/<slug>`. Static pages (landing, help, blog index) are
//! added on top and must not collide with document routes.
//!
//! Routes are kept in a `BTreeMap` so iteration and serialization order is
//! stable across builds.

use std::collections::BTreeMap;

use docnav_storage::Document;
use serde::Serialize;

use crate::error::NavError;
use crate::links::normalize_path;

/// What a route renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RouteTarget {
    /// A content document.
    Document {
        /// Document slug.
        slug: String,
    },
    /// A static, non-document page.
    Page {
        /// Page title.
        title: String,
    },
}

/// Flat mapping of URL paths to route targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    #[serde(skip)]
    docs_route: String,
    routes: BTreeMap<String, RouteTarget>,
}

impl RouteTable {
    /// Create an empty table serving documents under `/<docs_route>/`.
    #[must_use]
    pub fn new(docs_route: &str) -> Self {
        Self {
            docs_route: docs_route.trim_matches('/').to_owned(),
            routes: BTreeMap::new(),
        }
    }

    /// Route segment documents are served under.
    #[must_use]
    pub fn docs_route(&self) -> &str {
        &self.docs_route
    }

    /// Get the target for a path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RouteTarget> {
        self.routes.get(path)
    }

    /// Check whether a path is routed.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate routes in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteTarget)> {
        self.routes.iter().map(|(path, target)| (path.as_str(), target))
    }

    /// Iterate document slugs in path order.
    pub fn document_slugs(&self) -> impl Iterator<Item = &str> {
        self.routes.values().filter_map(|target| match target {
            RouteTarget::Document { slug } => Some(slug.as_str()),
            RouteTarget::Page { .. } => None,
        })
    }

    /// Canonical path of a document, if the document is routed.
    #[must_use]
    pub fn document_path(&self, slug: &str) -> Option<String> {
        let path = doc_route_path(&self.docs_route, slug);
        match self.routes.get(&path) {
            Some(RouteTarget::Document { slug: routed }) if routed == slug => Some(path),
            _ => None,
        }
    }

    /// Add a static page.
    ///
    /// The path is normalized to a single leading slash.
    ///
    /// # Errors
    ///
    /// Returns `NavError::DuplicateRoute` if the path is already routed.
    pub fn insert_page(&mut self, path: &str, title: &str) -> Result<(), NavError> {
        let path = normalize_path(path);
        if self.routes.contains_key(&path) {
            return Err(NavError::DuplicateRoute { path });
        }
        self.routes.insert(
            path,
            RouteTarget::Page {
                title: title.to_owned(),
            },
        );
        Ok(())
    }
}

/// Canonical path for a document slug.
#[must_use]
pub fn doc_route_path(docs_route: &str, slug: &str) -> String {
    format!("/{}/{slug}", docs_route.trim_matches('/'))
}

/// Build the route table for a document set.
///
/// # Errors
///
/// - `NavError::EmptySlug` / `NavError::InvalidSlug` for unusable slugs
/// - `NavError::DuplicateSlug` if two documents share a slug
pub fn build_route_table(documents: &[Document], docs_route: &str) -> Result<RouteTable, NavError> {
    let mut table = RouteTable::new(docs_route);

    for doc in documents {
        validate_slug(&doc.slug)?;

        let path = doc_route_path(&table.docs_route, &doc.slug);
        if table.routes.contains_key(&path) {
            return Err(NavError::DuplicateSlug {
                slug: doc.slug.clone(),
            });
        }
        table.routes.insert(
            path,
            RouteTarget::Document {
                slug: doc.slug.clone(),
            },
        );
    }

    tracing::debug!(routes = table.len(), "Built route table");
    Ok(table)
}

/// Check that a slug can form a URL path.
fn validate_slug(slug: &str) -> Result<(), NavError> {
    let invalid = |reason| NavError::InvalidSlug {
        slug: slug.to_owned(),
        reason,
    };

    if slug.is_empty() {
        return Err(NavError::EmptySlug);
    }
    if slug.contains(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    if slug.starts_with('/') || slug.ends_with('/') {
        return Err(invalid("leading or trailing slash"));
    }
    if slug.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return Err(invalid("empty or parent path segment"));
    }
    Ok(())
}
