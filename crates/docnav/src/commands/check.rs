//! `docnav check` command implementation.

use clap::Args;

use super::{CommonArgs, report_issues, resolve_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or navigation resolution fails, or
    /// if any navigation issue has error severity.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;

        let site = resolve_site(&config, &output)?;
        report_issues(&site, &output)?;

        output.success(&format!(
            "Navigation OK: {} routes, {} sidebar categories, {} warning(s)",
            site.routes().len(),
            site.sidebar().categories().len(),
            site.issues().len()
        ));
        Ok(())
    }
}
