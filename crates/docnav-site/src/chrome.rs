//! Navigation chrome: navbar and footer resolved to hrefs.
//!
//! [`chrome`] turns the site's [`NavLink`]s into concrete hrefs for a given
//! base URL and optional language, so templates only need to render strings.
//!
//! # Href Rules
//!
//! - Document links: `<base_url><docs_route>/<language>/<slug>`
//! - Internal paths: `<base_url><language>/<path>`
//! - External links are kept as written
//!
//! When `clean_url` is disabled, internal hrefs other than the root get an
//! `.html` suffix. Links whose targets have no route are left out.

use serde::Serialize;

use crate::links::{LinkLocation, LinkPosition, NavLink, NavTarget, normalize_path};
use crate::site::Site;

/// Presentation settings for [`chrome`].
#[derive(Clone, Debug)]
pub struct ChromeConfig {
    /// Site title shown in the navbar.
    pub title: String,
    /// Short tagline.
    pub tagline: Option<String>,
    /// URL prefix every internal href starts with.
    pub base_url: String,
    /// Omit the `.html` suffix from internal hrefs.
    pub clean_url: bool,
    /// Footer copyright line.
    pub copyright: Option<String>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: None,
            base_url: "/".to_owned(),
            clean_url: true,
            copyright: None,
        }
    }
}

/// Link with a concrete href.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    /// Display label.
    pub label: String,
    /// Target href.
    pub href: String,
    /// Whether the href leaves the site.
    pub external: bool,
    /// Placement hint.
    pub position: LinkPosition,
}

/// Resolved persistent navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chrome {
    /// Site title.
    pub title: String,
    /// Short tagline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Navbar links in declaration order.
    pub navbar: Vec<ResolvedLink>,
    /// Footer links in declaration order.
    pub footer: Vec<ResolvedLink>,
    /// Footer copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Resolve navbar and footer links for rendering.
#[must_use]
pub fn chrome(config: &ChromeConfig, site: &Site, language: Option<&str>) -> Chrome {
    let hrefs = HrefBuilder::new(config, site.routes().docs_route(), language);

    let resolve = |location: LinkLocation| -> Vec<ResolvedLink> {
        site.links_at(location)
            .filter_map(|link| resolve_link(&hrefs, site, link))
            .collect()
    };

    Chrome {
        title: config.title.clone(),
        tagline: config.tagline.clone(),
        navbar: resolve(LinkLocation::Navbar),
        footer: resolve(LinkLocation::Footer),
        copyright: config.copyright.clone(),
    }
}

fn resolve_link(hrefs: &HrefBuilder<'_>, site: &Site, link: &NavLink) -> Option<ResolvedLink> {
    let (href, external) = match &link.target {
        NavTarget::Doc(slug) => {
            site.routes().document_path(slug)?;
            (hrefs.doc(slug), false)
        }
        NavTarget::Path(path) => {
            let path = normalize_path(path);
            if !site.routes().contains(&path) {
                return None;
            }
            (hrefs.page(&path), false)
        }
        NavTarget::External(url) => (url.clone(), true),
    };

    Some(ResolvedLink {
        label: link.label.clone(),
        href,
        external,
        position: link.position,
    })
}

struct HrefBuilder<'a> {
    base_url: String,
    docs_route: &'a str,
    language: Option<&'a str>,
    clean_url: bool,
}

impl<'a> HrefBuilder<'a> {
    fn new(config: &ChromeConfig, docs_route: &'a str, language: Option<&'a str>) -> Self {
        let base = config.base_url.trim_end_matches('/');
        Self {
            base_url: format!("{base}/"),
            docs_route,
            language: language.filter(|l| !l.is_empty()),
            clean_url: config.clean_url,
        }
    }

    fn doc(&self, slug: &str) -> String {
        let mut href = format!("{}{}/", self.base_url, self.docs_route);
        if let Some(lang) = self.language {
            href.push_str(lang);
            href.push('/');
        }
        href.push_str(slug);
        self.finish(href)
    }

    fn page(&self, path: &str) -> String {
        let mut href = self.base_url.clone();
        if let Some(lang) = self.language {
            href.push_str(lang);
            href.push('/');
        }
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return href;
        }
        href.push_str(trimmed);
        self.finish(href)
    }

    fn finish(&self, mut href: String) -> String {
        if !self.clean_url {
            href.push_str(".html");
        }
        href
    }
}
