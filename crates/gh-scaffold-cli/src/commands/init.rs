//! `gh-scaffold init`: write a starter `gh-scaffold.yml`.

use std::fs;

use tracing::{info, instrument};

use gh_scaffold_adapters::{YamlConfigLoader, config_loader::CONFIG_CANDIDATES, default_config_yaml};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the defaults to `--config`, the existing config file, or
/// `gh-scaffold.yml`, in that order. Refuses to overwrite without `--force`.
#[instrument(skip_all, fields(repo = %args.repo.repo.display()))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let root = super::repo_root(&args.repo)?;

    let path = match &args.repo.config {
        Some(explicit) => super::in_repo(&root, explicit),
        None => YamlConfigLoader::find(&root).unwrap_or_else(|| root.join(CONFIG_CANDIDATES[0])),
    };

    if path.exists() && !args.force {
        return Err(CliError::ConfigExists { path });
    }

    let text = default_config_yaml()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    info!(path = %path.display(), "Config written");
    output.success(&format!("Configuration created at {}", path.display()))?;

    Ok(())
}
