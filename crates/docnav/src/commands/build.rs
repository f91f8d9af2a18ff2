//! `docnav build` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use docnav_site::{Chrome, Site, chrome};
use serde::Serialize;

use super::{CommonArgs, chrome_config_from_config, report_issues, resolve_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for generated JSON (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Language segment inserted into internal hrefs.
    #[arg(long)]
    language: Option<String>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation is invalid or the output cannot be
    /// written. Nothing is written when navigation has errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.out_dir.clone())?;

        let site = resolve_site(&config, &output)?;
        report_issues(&site, &output)?;

        let out_dir = &config.output_resolved.dir;
        output.info(&format!("Output: {}", out_dir.display()));

        let chrome = chrome(
            &chrome_config_from_config(&config),
            &site,
            self.language.as_deref(),
        );
        write_artifacts(&site, &chrome, out_dir)?;

        output.highlight(&format!(
            "Wrote {} routes to {}",
            site.routes().len(),
            out_dir.display()
        ));
        output.success("Build complete");
        Ok(())
    }
}

/// Write the navigation artifacts into `out_dir`.
///
/// Every artifact is serialized before any file is touched, then each is
/// written to a temporary sibling and renamed into place.
fn write_artifacts(site: &Site, chrome: &Chrome, out_dir: &Path) -> Result<(), CliError> {
    let artifacts = [
        ("routes.json", to_json(site.routes())?),
        ("sidebar.json", to_json(&site.sidebar_sections())?),
        ("navigation.json", to_json(chrome)?),
        ("manifest.json", to_json(&site.manifest())?),
    ];

    fs::create_dir_all(out_dir)?;

    let mut staged = Vec::with_capacity(artifacts.len());
    for (name, json) in &artifacts {
        let tmp_path = out_dir.join(format!(".{name}.tmp"));
        if let Err(err) = fs::write(&tmp_path, json) {
            discard(&staged);
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        staged.push((tmp_path, out_dir.join(name)));
    }

    for (tmp_path, path) in &staged {
        fs::rename(tmp_path, path)?;
        tracing::debug!(path = %path.display(), "Wrote artifact");
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (tmp_path, _) in staged {
        let _ = fs::remove_file(tmp_path);
    }
}
