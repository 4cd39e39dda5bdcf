//! Command handlers. Each one translates arguments into a core call and
//! renders the result; no business logic lives here.

use std::path::PathBuf;

use crate::{
    cli::RepoArgs,
    error::{CliError, CliResult},
};

pub mod apply;
pub mod completions;
pub mod config;
pub mod doctor;
pub mod init;
pub mod scan;

/// The `--repo` directory, which must exist.
fn repo_root(args: &RepoArgs) -> CliResult<PathBuf> {
    if args.repo.is_dir() {
        Ok(args.repo.clone())
    } else {
        Err(CliError::RepoNotFound {
            path: args.repo.clone(),
        })
    }
}

/// `path` when absolute, otherwise relative to the repository root.
fn in_repo(root: &std::path::Path, path: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
