//! Site navigation build.
//!
//! Provides [`Site`], the immutable result of resolving a document set, a
//! sidebar declaration and persistent links against each other.
//!
//! # Build Order
//!
//! 1. Scan documents from [`Storage`]
//! 2. Build the route table (fatal on duplicate or invalid slugs)
//! 3. Add static pages (fatal on path collisions)
//! 4. Build the sidebar (fatal on dangling references)
//! 5. Validate links and reachability (non-fatal issues)
//!
//! Every input comes from an explicit [`SiteConfig`]; nothing is looked up
//! from global state, so building twice from the same input yields equal
//! structures.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docnav_site::{Site, SiteConfig};
//! use docnav_storage::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let site = Site::build(&SiteConfig::default(), &storage)?;
//! for issue in site.issues() {
//!     println!("{issue}");
//! }
//! ```

use std::collections::BTreeMap;

use docnav_storage::{Document, Storage};
use serde::Serialize;

use crate::error::{NavError, SiteError};
use crate::links::{LinkLocation, NavLink};
use crate::routes::{RouteTable, build_route_table};
use crate::sidebar::{Category, Sidebar, build_sidebar};
use crate::validate::{NavIssue, Severity, validate_navigation};

/// Static, non-document page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticPage {
    /// Route path (normalized to a leading slash).
    pub path: String,
    /// Page title.
    pub title: String,
}

/// Declarative inputs for [`Site::build`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Route segment documents are served under.
    pub docs_route: String,
    /// Declared sidebar categories.
    pub sidebar: Vec<Category>,
    /// Static pages.
    pub pages: Vec<StaticPage>,
    /// Navbar and footer links.
    pub links: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_route: "docs".to_owned(),
            sidebar: Vec::new(),
            pages: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Link to a neighbouring document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Document slug.
    pub slug: String,
    /// Navigation label.
    pub label: String,
    /// Route path.
    pub path: String,
}

/// Previous/next documents in sidebar reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Preceding document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
    /// Following document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

/// Sidebar entry with resolved label and path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// Document slug.
    pub slug: String,
    /// Navigation label.
    pub label: String,
    /// Route path.
    pub path: String,
}

/// Sidebar category with resolved entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Category label.
    pub label: String,
    /// Entries in declaration order.
    pub items: Vec<SidebarEntry>,
}

/// Immutable resolved navigation for one build.
#[derive(Clone, Debug)]
pub struct Site {
    documents: BTreeMap<String, Document>,
    routes: RouteTable,
    sidebar: Sidebar,
    links: Vec<NavLink>,
    issues: Vec<NavIssue>,
}

impl Site {
    /// Scan storage and resolve navigation.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Storage` if scanning fails, or `SiteError::Nav`
    /// for fatal navigation errors.
    pub fn build(config: &SiteConfig, storage: &dyn Storage) -> Result<Self, SiteError> {
        let documents = storage.scan()?;
        if documents.is_empty() {
            tracing::warn!("No documents found");
        }
        Ok(Self::from_documents(config, documents)?)
    }

    /// Resolve navigation for an already-discovered document set.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`NavError`].
    pub fn from_documents(config: &SiteConfig, mut documents: Vec<Document>) -> Result<Self, NavError> {
        documents.sort_by(|a, b| a.slug.cmp(&b.slug));

        let mut routes = build_route_table(&documents, &config.docs_route)?;
        for page in &config.pages {
            routes.insert_page(&page.path, &page.title)?;
        }

        // Orphans are reported again by validate_navigation
        let sidebar = build_sidebar(&config.sidebar, &documents)?.sidebar;
        let issues = validate_navigation(&routes, &sidebar, &config.links);

        for issue in &issues {
            if issue.severity() == Severity::Error {
                tracing::warn!("{issue}");
            }
        }

        tracing::info!(
            documents = documents.len(),
            routes = routes.len(),
            categories = sidebar.categories().len(),
            issues = issues.len(),
            "Resolved site navigation"
        );

        let documents = documents
            .into_iter()
            .map(|doc| (doc.slug.clone(), doc))
            .collect();

        Ok(Self {
            documents,
            routes,
            sidebar,
            links: config.links.clone(),
            issues,
        })
    }

    /// Route table.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Resolved sidebar.
    #[must_use]
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Navbar and footer links.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Navigation issues found during the build.
    #[must_use]
    pub fn issues(&self) -> &[NavIssue] {
        &self.issues
    }

    /// Whether any issue has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity() == Severity::Error)
    }

    /// Get a document by slug.
    #[must_use]
    pub fn document(&self, slug: &str) -> Option<&Document> {
        self.documents.get(slug)
    }

    /// Sidebar with labels and paths resolved for rendering.
    #[must_use]
    pub fn sidebar_sections(&self) -> Vec<SidebarSection> {
        self.sidebar
            .categories()
            .iter()
            .map(|category| SidebarSection {
                label: category.label.clone(),
                items: category
                    .items
                    .iter()
                    .filter_map(|slug| self.page_link(slug))
                    .map(|link| SidebarEntry {
                        slug: link.slug,
                        label: link.label,
                        path: link.path,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Previous and next documents in sidebar reading order.
    ///
    /// Documents outside the sidebar have no neighbours.
    #[must_use]
    pub fn pagination(&self, slug: &str) -> Pagination {
        let order = self.sidebar.reading_order();
        let Some(idx) = order.iter().position(|s| *s == slug) else {
            return Pagination::default();
        };

        Pagination {
            previous: idx
                .checked_sub(1)
                .and_then(|i| order.get(i))
                .and_then(|s| self.page_link(s)),
            next: order.get(idx + 1).and_then(|s| self.page_link(s)),
        }
    }

    /// Breadcrumbs for a document.
    ///
    /// Starts with "Home", followed by the document's category (linking to
    /// the category's first document). The document itself is not included.
    #[must_use]
    pub fn breadcrumbs(&self, slug: &str) -> Vec<BreadcrumbItem> {
        let mut breadcrumbs = vec![BreadcrumbItem {
            title: "Home".to_owned(),
            path: "/".to_owned(),
        }];

        let Some(placement) = self.sidebar.placement(slug) else {
            return breadcrumbs;
        };

        let first = self
            .sidebar
            .categories()
            .iter()
            .find(|c| c.label == placement.category)
            .and_then(|c| c.items.first())
            .and_then(|s| self.routes.document_path(s));

        if let Some(path) = first {
            breadcrumbs.push(BreadcrumbItem {
                title: placement.category.to_owned(),
                path,
            });
        }

        breadcrumbs
    }

    /// Serializable summary of the build.
    #[must_use]
    pub fn manifest(&self) -> Manifest<'_> {
        Manifest {
            routes: &self.routes,
            sidebar: self.sidebar_sections(),
            navbar: self.links_at(LinkLocation::Navbar).collect(),
            footer: self.links_at(LinkLocation::Footer).collect(),
            issues: &self.issues,
        }
    }

    /// Links shown on one navigation surface, in declaration order.
    pub fn links_at(&self, location: LinkLocation) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(move |link| link.location == location)
    }

    fn page_link(&self, slug: &str) -> Option<PageLink> {
        let doc = self.documents.get(slug)?;
        let path = self.routes.document_path(slug)?;
        Some(PageLink {
            slug: doc.slug.clone(),
            label: doc.label().to_owned(),
            path,
        })
    }
}

/// Serializable view of a [`Site`].
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    /// Route table.
    pub routes: &'a RouteTable,
    /// Resolved sidebar.
    pub sidebar: Vec<SidebarSection>,
    /// Navbar links.
    pub navbar: Vec<&'a NavLink>,
    /// Footer links.
    pub footer: Vec<&'a NavLink>,
    /// Navigation issues.
    pub issues: &'a [NavIssue],
}
