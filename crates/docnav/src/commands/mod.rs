//! CLI command implementations.

mod build;
mod check;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config, LinkConfig, LinkTarget};
use docnav_site::{
    ChromeConfig, LinkLocation, NavLink, NavTarget, Severity, Site, SiteConfig, StaticPage,
    load_sidebar,
};
use docnav_storage::FsStorage;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, env = "DOCNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration, applying CLI overrides.
    fn load_config(&self, out_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            out_dir,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build the site from a loaded configuration.
fn resolve_site(config: &Config, output: &Output) -> Result<Site, CliError> {
    if let Some(path) = &config.config_path {
        output.info(&format!("Config: {}", path.display()));
    }
    output.info(&format!(
        "Source: {}",
        config.docs_resolved.source_dir.display()
    ));
    output.info(&format!(
        "Sidebar: {}",
        config.docs_resolved.sidebar_path.display()
    ));

    let site_config = site_config_from_config(config)?;
    let storage = FsStorage::new(config.docs_resolved.source_dir.clone());
    Ok(Site::build(&site_config, &storage)?)
}

/// Print issues and fail if any has error severity.
fn report_issues(site: &Site, output: &Output) -> Result<(), CliError> {
    for issue in site.issues() {
        output.issue(issue);
    }

    let errors = site
        .issues()
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    if errors > 0 {
        return Err(CliError::Validation(format!(
            "{errors} navigation error(s) found"
        )));
    }
    Ok(())
}

/// Convert the loaded configuration into navigation inputs.
pub(crate) fn site_config_from_config(config: &Config) -> Result<SiteConfig, CliError> {
    let sidebar = load_sidebar(&config.docs_resolved.sidebar_path)?;

    let pages = config
        .pages
        .iter()
        .map(|page| StaticPage {
            path: page.path.clone(),
            title: page.title.clone(),
        })
        .collect();

    let navbar = config
        .navbar
        .iter()
        .map(|link| nav_link(link, LinkLocation::Navbar));
    let footer = config
        .footer
        .iter()
        .map(|link| nav_link(link, LinkLocation::Footer));
    let links = navbar.chain(footer).collect::<Result<Vec<_>, _>>()?;

    Ok(SiteConfig {
        docs_route: config.docs_resolved.route.clone(),
        sidebar,
        pages,
        links,
    })
}

/// Presentation settings from the `[site]` section.
pub(crate) fn chrome_config_from_config(config: &Config) -> ChromeConfig {
    ChromeConfig {
        title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
        base_url: config.site.base_url.clone(),
        clean_url: config.site.clean_url,
        copyright: config.site.copyright.clone(),
    }
}

fn nav_link(link: &LinkConfig, location: LinkLocation) -> Result<NavLink, CliError> {
    let target = match link.target()? {
        LinkTarget::Doc(slug) => NavTarget::Doc(slug),
        LinkTarget::Path(path) => NavTarget::path(&path),
        LinkTarget::External(url) => NavTarget::External(url),
    };
    Ok(NavLink::new(link.label.clone(), target, location).with_position(link.position))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use docnav_site::LinkPosition;
    use pretty_assertions::assert_eq;

    use super::*;

    pub(super) fn write_project(dir: &Path) -> PathBuf {
        let docs = dir.join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("basics-intro.md"), "# Overview\n\nBowler is a refactoring tool.").unwrap();
        fs::write(
            docs.join("api-query.md"),
            "---\ntitle: Query\nsidebar_label: Query API\n---\n\nBuild a query.",
        )
        .unwrap();
        fs::write(docs.join("dev-roadmap.md"), "# Roadmap\n").unwrap();
        fs::write(
            dir.join("sidebars.yaml"),
            "categories:\n  - label: Basics\n    items: [basics-intro]\n  - label: API Reference\n    items: [api-query]\n  - label: Contributing\n    items: [dev-roadmap]\n",
        )
        .unwrap();

        let config_path = dir.join("docnav.toml");
        fs::write(
            &config_path,
            r#"
[site]
title = "Bowler"
url = "https://pybowler.io"
copyright = "Copyright © 2018 Facebook"

[[pages]]
path = "/"
title = "Bowler"

[[pages]]
path = "/help"
title = "Help"

[[navbar]]
label = "Getting Started"
doc = "basics-intro"

[[navbar]]
label = "GitHub"
href = "https://github.com/facebookincubator/bowler"

[[footer]]
label = "Help"
to = "help"
position = "left"
"#,
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_site_config_from_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path());
        let config = Config::load(Some(config_path.as_path()), None).unwrap();

        let site_config = site_config_from_config(&config).unwrap();

        assert_eq!(site_config.docs_route, "docs");
        assert_eq!(site_config.sidebar.len(), 3);
        assert_eq!(site_config.pages.len(), 2);
        assert_eq!(site_config.links.len(), 3);
        assert_eq!(
            site_config.links[2],
            NavLink::new("Help", NavTarget::Path("/help".to_owned()), LinkLocation::Footer)
                .with_position(LinkPosition::Left)
        );
    }

    #[test]
    fn test_resolve_site_without_issues() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path());
        let config = Config::load(Some(config_path.as_path()), None).unwrap();

        let site = resolve_site(&config, &Output::new()).unwrap();

        assert_eq!(site.routes().len(), 5);
        assert!(site.issues().is_empty());
        assert!(report_issues(&site, &Output::new()).is_ok());
    }

    #[test]
    fn test_report_issues_fails_on_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path());
        let mut content = fs::read_to_string(&config_path).unwrap();
        content.push_str("\n[[footer]]\nlabel = \"Users\"\nto = \"/users\"\n");
        fs::write(&config_path, content).unwrap();
        let config = Config::load(Some(config_path.as_path()), None).unwrap();

        let site = resolve_site(&config, &Output::new()).unwrap();
        let err = report_issues(&site, &Output::new()).unwrap_err();

        assert_eq!(err.to_string(), "1 navigation error(s) found");
    }

    #[test]
    fn test_dangling_sidebar_entry_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path());
        fs::write(
            temp_dir.path().join("sidebars.yaml"),
            "categories:\n  - label: Basics\n    items: [basics-intro, basics-usage]\n",
        )
        .unwrap();
        let config = Config::load(Some(config_path.as_path()), None).unwrap();

        let err = resolve_site(&config, &Output::new()).unwrap_err();

        assert!(matches!(err, CliError::Site(_)));
        assert!(err.to_string().contains("basics-usage"));
    }

    #[test]
    fn test_bowler_demo_resolves_cleanly() {
        let config_path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/bowler/docnav.toml");
        let config = Config::load(Some(config_path.as_path()), None).unwrap();

        let site = resolve_site(&config, &Output::new()).unwrap();

        assert!(site.issues().is_empty(), "{:?}", site.issues());
        assert_eq!(site.sidebar().categories().len(), 3);
        let footer: Vec<_> = site
            .links_at(LinkLocation::Footer)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(
            footer,
            vec![
                "Facebook Open Source",
                "News",
                "Twitter",
                "GitHub",
                "Contribute to Bowler",
                "Help",
                "Users",
            ]
        );
    }

    #[test]
    fn test_chrome_config_from_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_project(temp_dir.path());
        let config = Config::load(Some(config_path.as_path()), None).unwrap();

        let chrome = chrome_config_from_config(&config);

        assert_eq!(chrome.title, "Bowler");
        assert_eq!(chrome.base_url, "/");
        assert!(chrome.clean_url);
    }
}
