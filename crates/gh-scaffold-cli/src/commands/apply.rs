//! `gh-scaffold apply`: generate missing files.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, instrument};

use gh_scaffold_adapters::local_service;
use gh_scaffold_core::{application::ApplyOptions, domain::ApplyResult};

use crate::{
    cli::{ApplyArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(repo = %args.repo.repo.display()))]
pub fn execute(args: ApplyArgs, output: OutputManager) -> CliResult<()> {
    let root = super::repo_root(&args.repo)?;
    let options = apply_options(&args, root);
    debug!(?options, "Apply options");

    let service = local_service()?;
    let json = output.format() == OutputFormat::Json;

    // Previews go to stdout unless stdout carries the JSON document.
    let result = if json {
        service.apply(&options, &mut io::stderr().lock())?
    } else {
        let mut stdout = io::stdout().lock();
        let result = service.apply(&options, &mut stdout)?;
        stdout.flush()?;
        result
    };

    if json {
        output.json(&result)?;
    } else {
        render(&result, &output)?;
    }

    Ok(())
}

fn render(result: &ApplyResult, output: &OutputManager) -> io::Result<()> {
    output.success(&result.summary)?;

    if !result.warnings.is_empty() {
        output.print("")?;
        output.header("Warnings:")?;
        for warning in &result.warnings {
            output.warning(warning)?;
        }
    }
    output.list("Written", &result.written)?;
    output.list("Skipped", &result.skipped)?;

    if !result.diffs.is_empty() {
        output.print("")?;
        output.header("Diffs:")?;
        for diff in &result.diffs {
            output.diff(&diff.patch)?;
        }
    }

    Ok(())
}

fn apply_options(args: &ApplyArgs, repo_root: PathBuf) -> ApplyOptions {
    ApplyOptions {
        repo_root,
        config_path: args.repo.config.clone(),
        preset: args.preset.map(Into::into),
        issue_templates: args.issue_templates.map(Into::into),
        license: args.license.map(Into::into),
        templates_dir: args.templates.clone(),
        scope_mode: args.scope.map(Into::into),
        force: args.force,
        update: args.update,
        dry_run: args.dry_run,
        print: args.print,
        diff: args.diff,
        minimal: args.minimal,
        only: keys(&args.only),
        skip: keys(&args.skip),
    }
}

/// Trimmed, non-empty keys; `--only "A, B,"` is `[A, B]`.
fn keys(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}
