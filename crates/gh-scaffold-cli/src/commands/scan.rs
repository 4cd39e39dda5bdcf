//! `gh-scaffold scan`: report which community files exist.

use tracing::instrument;

use gh_scaffold_adapters::local_service;
use gh_scaffold_core::domain::format_scan_report;

use crate::{
    cli::{OutputFormat, ScanArgs},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(repo = %args.repo.repo.display()))]
pub fn execute(args: ScanArgs, output: OutputManager) -> CliResult<()> {
    let root = super::repo_root(&args.repo)?;
    let scan = local_service()?.scan(&root, args.repo.config.as_deref())?;

    if args.json || output.format() == OutputFormat::Json {
        output.json(&scan)?;
    } else {
        output.data(&format_scan_report(&scan))?;
    }

    Ok(())
}
