//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for discovering markdown documents in a local
//! directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::front_matter::{FrontMatter, FrontMatterParser};
use crate::storage::{Document, Storage, StorageError, StorageErrorKind};
use crate::title::first_heading;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Scans a source directory recursively for markdown files. Hidden entries
/// (`.name`) and partials (`_name`) are skipped.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use docnav_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let docs = storage.scan()?;
/// ```
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
    parser: FrontMatterParser,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            source_dir,
            parser: FrontMatterParser::new(),
        }
    }

    /// Recursively collect markdown documents below `dir`.
    fn scan_directory(&self, dir: &Path, out: &mut Vec<Document>) -> Result<(), StorageError> {
        let entries = fs::read_dir(dir)
            .map_err(|e| StorageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| StorageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, out)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                out.push(self.build_document(&path)?);
            }
        }

        Ok(())
    }

    /// Read a markdown file and build its [`Document`].
    fn build_document(&self, path: &Path) -> Result<Document, StorageError> {
        let rel_path = path.strip_prefix(&self.source_dir).map_err(|_| {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND)
        })?;

        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))?;

        let (block, body) = self.parser.split(&content);
        let front_matter = match block {
            Some(block) => FrontMatterParser::parse(block).unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "Failed to parse front matter");
                FrontMatter::default()
            }),
            None => FrontMatter::default(),
        };

        let slug = slug_for(rel_path, front_matter.id.as_deref());
        let title = front_matter
            .title
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| title_from_slug(&slug));

        tracing::debug!(slug = %slug, path = %rel_path.display(), "Discovered document");

        Ok(Document {
            slug,
            title,
            sidebar_label: front_matter.sidebar_label,
            source: Some(rel_path.to_path_buf()),
        })
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if !self.source_dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        self.scan_directory(&self.source_dir, &mut documents)?;

        // Directory iteration order is platform dependent
        documents.sort_by(|a, b| a.slug.cmp(&b.slug).then_with(|| a.source.cmp(&b.source)));
        Ok(documents)
    }
}

/// Derive a document slug from its relative path and optional front matter id.
///
/// The id replaces the file stem but keeps the directory prefix:
/// - `intro.md` -> `"intro"`
/// - `guides/setup.md` -> `"guides/setup"`
/// - `guides/setup.md` with id `install` -> `"guides/install"`
fn slug_for(rel_path: &Path, id: Option<&str>) -> String {
    let mut segments: Vec<String> = rel_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let stem = rel_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    segments.push(id.map_or(stem, str::to_owned));

    segments.join("/")
}

/// Generate title from the last slug segment.
fn title_from_slug(slug: &str) -> String {
    let name = slug.rsplit('/').next().unwrap_or(slug);

    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for(Path::new("intro.md"), None), "intro");
        assert_eq!(slug_for(Path::new("guides/setup.md"), None), "guides/setup");
        assert_eq!(
            slug_for(Path::new("guides/setup.md"), Some("install")),
            "guides/install"
        );
        assert_eq!(slug_for(Path::new("a/b/c.md"), None), "a/b/c");
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("basics-intro"), "Basics Intro");
        assert_eq!(title_from_slug("guides/dev_roadmap"), "Dev Roadmap");
    }

    #[test]
    fn test_scan_missing_dir_returns_empty() {
        let storage = FsStorage::new(PathBuf::from("/nonexistent/docnav/docs"));
        assert!(storage.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_reads_front_matter() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("query.md"),
            "---\nid: api-query\ntitle: Query\nsidebar_label: Queries\n---\n# Ignored\n",
        )
        .unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(
            docs,
            vec![Document {
                slug: "api-query".to_owned(),
                title: "Query".to_owned(),
                sidebar_label: Some("Queries".to_owned()),
                source: Some(PathBuf::from("query.md")),
            }]
        );
    }

    #[test]
    fn test_scan_title_falls_back_to_heading_then_filename() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("setup.md"), "# Installing Bowler\n").unwrap();
        fs::write(temp_dir.path().join("dev-roadmap.md"), "No heading here.").unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].slug, "dev-roadmap");
        assert_eq!(docs[0].title, "Dev Roadmap");
        assert_eq!(docs[1].slug, "setup");
        assert_eq!(docs[1].title, "Installing Bowler");
    }

    #[test]
    fn test_scan_nested_and_sorted() {
        let temp_dir = create_test_dir();
        let guides = temp_dir.path().join("guides");
        fs::create_dir(&guides).unwrap();
        fs::write(guides.join("setup.md"), "# Setup").unwrap();
        fs::write(temp_dir.path().join("intro.md"), "# Intro").unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();
        let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();

        assert_eq!(slugs, vec!["guides/setup", "intro"]);
        assert_eq!(docs[0].source, Some(PathBuf::from("guides/setup.md")));
    }

    #[test]
    fn test_scan_skips_hidden_and_partials() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(".draft.md"), "# Draft").unwrap();
        fs::write(temp_dir.path().join("_partial.md"), "# Partial").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not markdown").unwrap();
        fs::write(temp_dir.path().join("intro.md"), "# Intro").unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "intro");
    }

    #[test]
    fn test_scan_title_ignores_comments_in_code_blocks() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("basics-usage.md"),
            "Run bowler on a tree.\n\n```python\n# rename every call site\nquery.execute()\n```\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("dev-intro.md"), "#\nContributing notes\n").unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs[0].slug, "basics-usage");
        assert_eq!(docs[0].title, "Basics Usage");
        assert_eq!(docs[1].slug, "dev-intro");
        assert_eq!(docs[1].title, "Dev Intro");
    }

    #[test]
    fn test_scan_malformed_front_matter_uses_defaults() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("broken.md"),
            "---\nid: [unclosed\n---\n# Broken Page\n",
        )
        .unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs[0].slug, "broken");
        assert_eq!(docs[0].title, "Broken Page");
    }

    #[test]
    fn test_scan_keeps_duplicate_ids() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("a.md"), "---\nid: api-query\n---\n").unwrap();
        fs::write(temp_dir.path().join("b.md"), "---\nid: api-query\n---\n").unwrap();

        let docs = FsStorage::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.slug == "api-query"));
        assert_eq!(docs[0].source, Some(PathBuf::from("a.md")));
    }
}
