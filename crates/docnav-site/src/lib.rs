//! Route table, sidebar and navigation resolution for docnav.
//!
//! This crate provides:
//! - [`build_route_table`]: one canonical route per document
//! - [`build_sidebar`]: ordered categories with dangling-reference checks
//! - [`validate_navigation`]: non-fatal integrity findings
//! - [`Site`]: the resolved navigation, with pagination, breadcrumbs and a
//!   serializable manifest
//! - [`chrome`]: navbar and footer links resolved to hrefs
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::{Path, PathBuf};
//! use docnav_site::{ChromeConfig, Site, SiteConfig, chrome, load_sidebar};
//! use docnav_storage::FsStorage;
//!
//! let config = SiteConfig {
//!     sidebar: load_sidebar(Path::new("sidebars.yaml"))?,
//!     ..SiteConfig::default()
//! };
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let site = Site::build(&config, &storage)?;
//!
//! let nav = chrome(&ChromeConfig::default(), &site, None);
//! # Ok(())
//! # }
//! ```

mod chrome;
mod error;
mod links;
mod routes;
mod sidebar;
mod sidebar_file;
mod site;
mod validate;

pub use chrome::{Chrome, ChromeConfig, ResolvedLink, chrome};
pub use error::{NavError, SiteError};
pub use links::{LinkLocation, LinkPosition, NavLink, NavTarget, normalize_path};
pub use routes::{RouteTable, RouteTarget, build_route_table, doc_route_path};
pub use sidebar::{Category, Placement, Sidebar, SidebarBuild, build_sidebar};
pub use sidebar_file::{SidebarFileError, SidebarFormat, load_sidebar, parse_sidebar};
pub use site::{
    BreadcrumbItem, Manifest, PageLink, Pagination, SidebarEntry, SidebarSection, Site,
    SiteConfig, StaticPage,
};
pub use validate::{NavIssue, Severity, validate_navigation};

// Re-export Document so callers can build sites without naming the storage crate
pub use docnav_storage::Document;
