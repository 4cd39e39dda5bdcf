//! `gh-scaffold doctor`: find unfilled placeholders.

use tracing::instrument;

use gh_scaffold_adapters::local_service;

use crate::{
    cli::{DoctorArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Exits non-zero (5) when any problem is found, whatever the format.
#[instrument(skip_all, fields(repo = %args.repo.repo.display()))]
pub fn execute(args: DoctorArgs, output: OutputManager) -> CliResult<()> {
    let root = super::repo_root(&args.repo)?;
    let report = local_service()?.doctor(&root, args.repo.config.as_deref())?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    } else if report.is_ok() {
        output.success("doctor: ok")?;
    } else {
        output.data("doctor: issues found")?;
        for problem in &report.problems {
            output.data(&format!("- {problem}"))?;
        }
    }

    if report.is_ok() {
        Ok(())
    } else {
        Err(CliError::DiagnosticsFailed {
            count: report.problems.len(),
        })
    }
}
