//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.base_url`
//! - `navbar[].href`
//! - `footer[].href`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use docnav_site::LinkPosition;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory for generated navigation files.
    pub out_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and URL settings.
    pub site: SiteSection,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Static, non-document pages.
    pub pages: Vec<PageConfig>,
    /// Navbar links.
    pub navbar: Vec<LinkConfig>,
    /// Footer links.
    pub footer: Vec<LinkConfig>,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title shown in the navbar.
    pub title: String,
    /// Short tagline.
    pub tagline: Option<String>,
    /// Public site URL (e.g., `https://docs.example.com`).
    pub url: Option<String>,
    /// Base URL all links are prefixed with. Must start and end with `/`.
    pub base_url: String,
    /// Serve pages without `.html` suffix.
    pub clean_url: bool,
    /// Footer copyright line.
    pub copyright: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: None,
            url: None,
            base_url: "/".to_owned(),
            clean_url: true,
            copyright: None,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    route: Option<String>,
    sidebar: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Route segment documents are served under (`docs` → `/docs/<slug>`).
    pub route: String,
    /// Sidebar declaration file (YAML or JSON).
    pub sidebar_path: PathBuf,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory for generated `routes.json`, `sidebar.json` and `navigation.json`.
    pub dir: PathBuf,
}

/// Static page configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Route path with leading slash (e.g., `/help`).
    pub path: String,
    /// Page title.
    pub title: String,
}

/// Navbar or footer link as declared in TOML.
///
/// Exactly one of `doc`, `to`, or `href` must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// Display label.
    pub label: String,
    /// Document slug.
    #[serde(default)]
    pub doc: Option<String>,
    /// Internal route path.
    #[serde(default)]
    pub to: Option<String>,
    /// External URL.
    #[serde(default)]
    pub href: Option<String>,
    /// Placement hint.
    #[serde(default)]
    pub position: LinkPosition,
}

/// Validated link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Document slug.
    Doc(String),
    /// Internal route path.
    Path(String),
    /// External URL.
    External(String),
}

impl LinkConfig {
    /// Get the link target, checking that exactly one target kind is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if zero or several targets are set.
    pub fn target(&self) -> Result<LinkTarget, ConfigError> {
        match (&self.doc, &self.to, &self.href) {
            (Some(doc), None, None) => Ok(LinkTarget::Doc(doc.clone())),
            (None, Some(to), None) => Ok(LinkTarget::Path(to.clone())),
            (None, None, Some(href)) => Ok(LinkTarget::External(href.clone())),
            _ => Err(ConfigError::Validation(format!(
                "link '{}' must set exactly one of doc, to, href",
                self.label
            ))),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.output_resolved.dir.clone_from(out_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSection::default(),
            docs: DocsConfigRaw::default(),
            pages: Vec::new(),
            navbar: Vec::new(),
            footer: Vec::new(),
            output: OutputConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                route: "docs".to_owned(),
                sidebar_path: base.join("sidebars.yaml"),
            },
            output_resolved: OutputConfig {
                dir: base.join("build"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks structural correctness only. Whether link targets resolve to
    /// real routes is decided by navigation validation after the site is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        self.validate_pages()?;
        for link in self.navbar.iter().chain(&self.footer) {
            require_non_empty(&link.label, "link label")?;
            link.target()?;
        }
        Ok(())
    }

    /// Validate site section.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        if let Some(ref url) = self.site.url {
            require_http_url(url, "site.url")?;
        }

        let base_url = &self.site.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start and end with '/', got '{base_url}'"
            )));
        }

        Ok(())
    }

    /// Validate resolved docs configuration.
    fn validate_docs(&self) -> Result<(), ConfigError> {
        let route = &self.docs_resolved.route;
        require_non_empty(route, "docs.route")?;
        if route.starts_with('/') || route.ends_with('/') || route.contains(char::is_whitespace)
        {
            return Err(ConfigError::Validation(format!(
                "docs.route must be a bare path segment, got '{route}'"
            )));
        }
        Ok(())
    }

    /// Validate static page declarations.
    fn validate_pages(&self) -> Result<(), ConfigError> {
        for page in &self.pages {
            if !page.path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "pages.path must start with '/', got '{}'",
                    page.path
                )));
            }
            require_non_empty(&page.title, "pages.title")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.url {
            self.site.url = Some(expand::expand_env(url, "site.url")?);
        }
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;

        for (section, links) in [("navbar", &mut self.navbar), ("footer", &mut self.footer)] {
            for link in links.iter_mut() {
                if let Some(ref href) = link.href {
                    link.href = Some(expand::expand_env(href, &format!("{section}.href"))?);
                }
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            route: self
                .docs
                .route
                .clone()
                .unwrap_or_else(|| "docs".to_owned()),
            sidebar_path: resolve(self.docs.sidebar.as_deref(), "sidebars.yaml"),
        };

        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), "build"),
        };
    }
}
