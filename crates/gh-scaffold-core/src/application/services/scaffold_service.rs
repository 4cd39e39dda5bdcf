//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole apply workflow:
//! 1. Load configuration and fold in command-line overrides
//! 2. Expand the scope into one or more repository roots
//! 3. Per root: choose targets, decide per file, build content, reconcile
//! 4. Aggregate the per-root results
//!
//! Roots and targets are processed strictly in order so diff and print
//! output is deterministic.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigLoader, Filesystem, PackageLocator, RepoDetector, TemplateStore},
    },
    domain::{
        Action, ApplyResult, CATALOG, DomainError, DoctorReport, FileDiff, FileState, FileStatus,
        IssueTemplateFormat, LicenseChoice, PresetTier, ScaffoldConfig, ScanResult, Scope,
        ScopeMode, TargetDescriptor, catalog, content, markers, reconcile, templates,
    },
    error::ScaffoldResult,
};

/// Inputs to [`ScaffoldService::apply`].
///
/// `Option` fields override the loaded configuration when set. `update` is
/// OR-ed with `behavior.update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub preset: Option<PresetTier>,
    pub issue_templates: Option<IssueTemplateFormat>,
    pub license: Option<LicenseChoice>,
    pub templates_dir: Option<PathBuf>,
    pub scope_mode: Option<ScopeMode>,
    pub force: bool,
    pub update: bool,
    pub dry_run: bool,
    pub print: bool,
    pub diff: bool,
    /// Restrict to the minimal tier whatever the preset says.
    pub minimal: bool,
    pub only: Vec<String>,
    pub skip: Vec<String>,
}

impl ApplyOptions {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            ..Self::default()
        }
    }

    /// Overrides carried by the options, as a config overlay.
    fn as_overlay(&self) -> ScaffoldConfig {
        ScaffoldConfig {
            preset: self.preset,
            issue_templates: self.issue_templates,
            license: self.license,
            templates_dir: self.templates_dir.clone(),
            scope: Scope {
                mode: self.scope_mode,
                packages_globs: None,
            },
            ..ScaffoldConfig::default()
        }
    }
}

/// Where template text comes from for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatesDir {
    /// A user directory laid out like the built-in set.
    Custom(PathBuf),
    /// Templates embedded in the binary.
    Builtin,
}

/// Placeholders that `doctor` reports when left in a file. The contact
/// placeholder is matched by prefix so hand-edited variants are caught too.
const DOCTOR_PLACEHOLDERS: [(&str, &str); 3] = [
    (content::SECURITY_EMAIL_PLACEHOLDER, "<INSERT SECURITY EMAIL>"),
    ("<INSERT CONTACT METHOD", "<INSERT CONTACT METHOD ...>"),
    (content::SUPPORT_URL_PLACEHOLDER, "<INSERT SUPPORT URL>"),
];

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn TemplateStore>,
    config_loader: Box<dyn ConfigLoader>,
    detector: Box<dyn RepoDetector>,
    locator: Box<dyn PackageLocator>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        store: Box<dyn TemplateStore>,
        config_loader: Box<dyn ConfigLoader>,
        detector: Box<dyn RepoDetector>,
        locator: Box<dyn PackageLocator>,
    ) -> Self {
        Self {
            filesystem,
            store,
            config_loader,
            detector,
            locator,
        }
    }

    // -------------------------------------------------------------------------
    // Use cases
    // -------------------------------------------------------------------------

    /// Report which catalog files exist. Read-only.
    #[instrument(skip_all, fields(repo = %repo_root.display()))]
    pub fn scan(&self, repo_root: &Path, config_path: Option<&Path>) -> ScaffoldResult<ScanResult> {
        let loaded = self.config_loader.load(repo_root, config_path)?;
        let meta = self.detector.detect(repo_root);
        let format = loaded.config.issue_templates();

        let files: Vec<FileStatus> = CATALOG
            .iter()
            .map(|descriptor| {
                let path = catalog::resolve_path(descriptor, format);
                FileStatus {
                    key: descriptor.key.to_string(),
                    exists: self.filesystem.exists(&repo_root.join(&path)),
                    path,
                }
            })
            .collect();

        let missing = files
            .iter()
            .filter(|f| !f.exists)
            .map(|f| f.key.clone())
            .collect();

        Ok(ScanResult {
            repo_path: repo_root.to_path_buf(),
            config_path: loaded.path,
            meta,
            files,
            missing,
        })
    }

    /// Scaffold every in-scope root. Previews (print) go to `out`.
    #[instrument(skip_all, fields(repo = %options.repo_root.display()))]
    pub fn apply(&self, options: &ApplyOptions, out: &mut dyn Write) -> ScaffoldResult<ApplyResult> {
        let root = options.repo_root.as_path();
        let loaded = self.config_loader.load(root, options.config_path.as_deref())?;
        let config = loaded.config.merge(&options.as_overlay());
        let mode = config.scope_mode();

        info!(
            preset = %config.preset(),
            scope = %mode,
            dry_run = options.dry_run,
            "Applying gh-scaffold"
        );

        let mut total = ApplyResult::default();
        for key in catalog::unknown_keys(&options.only)
            .into_iter()
            .chain(catalog::unknown_keys(&options.skip))
        {
            let unknown = DomainError::UnknownTargetKey(key.to_string());
            warn!(key, "{unknown}");
            total.warnings.push(unknown.to_string());
        }

        let templates = self.resolve_templates_dir(root, &config);
        for package_root in self.expand_scope(root, &config)? {
            let rel = relative_to(root, &package_root);
            let part = self.apply_root(&package_root, &rel, &config, &templates, options, out)?;
            total.absorb(&rel, part);
        }

        total.summary = format!(
            "Applied gh-scaffold to {} (scope={}). Wrote {}, skipped {}.",
            root.display(),
            mode,
            total.written.len(),
            total.skipped.len()
        );
        info!(
            written = total.written.len(),
            skipped = total.skipped.len(),
            warnings = total.warnings.len(),
            "Apply finished"
        );

        Ok(total)
    }

    /// Find existing files that still carry unfilled placeholders.
    #[instrument(skip_all, fields(repo = %repo_root.display()))]
    pub fn doctor(
        &self,
        repo_root: &Path,
        config_path: Option<&Path>,
    ) -> ScaffoldResult<DoctorReport> {
        let scan = self.scan(repo_root, config_path)?;
        let mut report = DoctorReport::default();

        for file in scan.files.iter().filter(|f| f.exists) {
            let text = match self.filesystem.read_to_string(&repo_root.join(&file.path)) {
                Ok(text) => text,
                Err(e) => {
                    debug!(path = %file.path, error = %e, "Unreadable file ignored");
                    continue;
                }
            };

            for (needle, label) in DOCTOR_PLACEHOLDERS {
                if text.contains(needle) {
                    report.problems.push(format!("{}: contains {label}", file.path));
                }
            }
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Engine steps
    // -------------------------------------------------------------------------

    /// Custom directory when `templatesDir` names an existing directory,
    /// otherwise the built-in set. Never fails.
    pub fn resolve_templates_dir(&self, repo_root: &Path, config: &ScaffoldConfig) -> TemplatesDir {
        let Some(dir) = &config.templates_dir else {
            return TemplatesDir::Builtin;
        };

        let dir = if dir.is_absolute() {
            dir.clone()
        } else {
            repo_root.join(dir)
        };

        if self.filesystem.is_dir(&dir) {
            debug!(dir = %dir.display(), "Using custom templates");
            TemplatesDir::Custom(dir)
        } else {
            warn!(dir = %dir.display(), "Templates directory not found, using built-in templates");
            TemplatesDir::Builtin
        }
    }

    /// Repository roots for the configured scope mode, root first.
    pub fn expand_scope(
        &self,
        repo_root: &Path,
        config: &ScaffoldConfig,
    ) -> ScaffoldResult<Vec<PathBuf>> {
        let mode = config.scope_mode();
        let mut roots = Vec::new();

        if mode.includes_root() {
            roots.push(repo_root.to_path_buf());
        }

        if mode.includes_packages() {
            let mut globs = config.packages_globs();
            for glob in self.detector.detect(repo_root).workspace_globs {
                if !globs.contains(&glob) {
                    globs.push(glob);
                }
            }

            for package in self.locator.locate(repo_root, &globs)? {
                if !roots.contains(&package) {
                    roots.push(package);
                }
            }
        }

        debug!(count = roots.len(), scope = %mode, "Scope expanded");
        Ok(roots)
    }

    /// Desired content for `key`: template text with placeholders filled and
    /// CODEOWNERS/FUNDING generated from config when configured.
    pub fn build_content(
        &self,
        key: &str,
        config: &ScaffoldConfig,
        templates: &TemplatesDir,
    ) -> ScaffoldResult<String> {
        let name =
            templates::resolve_template_name(key, config.issue_templates(), config.license())
                .ok_or_else(|| DomainError::TemplateNotMapped {
                    key: key.to_string(),
                })?;

        let raw = match templates {
            TemplatesDir::Custom(dir) => {
                let path = dir.join(name);
                if !self.filesystem.exists(&path) {
                    return Err(ApplicationError::TemplateMissing {
                        name: name.to_string(),
                        path: Some(dir.clone()),
                    }
                    .into());
                }
                self.filesystem.read_to_string(&path)?
            }
            TemplatesDir::Builtin => self.store.read(name)?,
        };

        Ok(content::render(key, &raw, config))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply_root(
        &self,
        root: &Path,
        root_rel: &str,
        config: &ScaffoldConfig,
        templates: &TemplatesDir,
        options: &ApplyOptions,
        out: &mut dyn Write,
    ) -> ScaffoldResult<ApplyResult> {
        let format = config.issue_templates();
        let update = options.update || config.update();

        let targets = catalog::choose_targets(config.preset(), options.minimal);
        let selected = catalog::filter_by_include_exclude(
            targets.iter().map(|d| d.key),
            &options.only,
            &options.skip,
        );

        let mut result = ApplyResult::default();

        for descriptor in targets.into_iter().filter(|d| selected.contains(&d.key)) {
            let rel = catalog::resolve_path(descriptor, format);
            let path = root.join(&rel);
            let exists = self.filesystem.exists(&path);

            let action = reconcile::decide(FileState {
                exists,
                force: options.force,
                update,
                markdown: catalog::is_markdown(&rel),
                managed_markers: config.managed_markers(),
            });
            debug!(key = descriptor.key, path = %rel, ?action, "Reconcile decision");

            let wrap = match action {
                Action::Skip => {
                    result.skipped.push(rel);
                    continue;
                }
                Action::SkipNonMarkdown => {
                    result
                        .skipped
                        .push(format!("{rel} ({})", Action::NON_MARKDOWN_REASON));
                    continue;
                }
                Action::ManagedUpdate => None,
                Action::Write { wrap } => Some(wrap),
            };

            let desired = match self.build_content(descriptor.key, config, templates) {
                Ok(desired) => desired,
                Err(e) => {
                    warn!(key = descriptor.key, error = %e, "Content build failed, skipping");
                    result.warnings.push(format!("{}: {e}", descriptor.key));
                    continue;
                }
            };

            let target = Target {
                descriptor,
                path: &path,
                rel: &rel,
                banner: join_banner(root_rel, &rel),
                exists,
            };

            match wrap {
                None => self.managed_update(&target, &desired, options, out, &mut result)?,
                Some(wrap) => {
                    let desired = if wrap {
                        markers::wrap(&descriptor.block_id(), &desired)
                    } else {
                        desired
                    };
                    self.write_target(&target, &desired, options, out, &mut result)?;
                }
            }
        }

        Ok(result)
    }

    /// Rule 1: refresh the engine-owned block, leave the rest of the file alone.
    fn managed_update(
        &self,
        target: &Target<'_>,
        desired: &str,
        options: &ApplyOptions,
        out: &mut dyn Write,
        result: &mut ApplyResult,
    ) -> ScaffoldResult<()> {
        let current = self.filesystem.read_to_string(target.path)?;
        let next = markers::upsert(&current, &target.descriptor.block_id(), desired);

        if options.diff {
            let diff = FileDiff::compute(target.rel, &current, &next);
            if !diff.is_empty() {
                result.diffs.push(diff);
            }
        }
        if options.print {
            print_preview(out, &target.banner, &next)?;
        }

        if options.dry_run {
            result.written.push(format!("{} (dry-run update)", target.rel));
        } else {
            self.filesystem.write_file(target.path, &next)?;
            result.written.push(format!("{} (update)", target.rel));
        }

        Ok(())
    }

    /// Rule 4: create or overwrite the whole file.
    fn write_target(
        &self,
        target: &Target<'_>,
        desired: &str,
        options: &ApplyOptions,
        out: &mut dyn Write,
        result: &mut ApplyResult,
    ) -> ScaffoldResult<()> {
        if options.diff {
            let prior = if target.exists {
                self.filesystem.read_to_string(target.path)?
            } else {
                String::new()
            };
            let diff = FileDiff::compute(target.rel, &prior, desired);
            if !diff.is_empty() {
                result.diffs.push(diff);
            }
        }
        if options.print {
            print_preview(out, &target.banner, desired)?;
        }

        if options.dry_run {
            result.written.push(format!("{} (dry-run)", target.rel));
            return Ok(());
        }

        if let Some(parent) = target.path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(target.path, desired)?;
        result.written.push(target.rel.to_string());

        Ok(())
    }
}

/// One file being reconciled.
struct Target<'a> {
    descriptor: &'static TargetDescriptor,
    path: &'a Path,
    rel: &'a str,
    /// Path shown in print banners, qualified with the package path.
    banner: String,
    exists: bool,
}

fn print_preview(out: &mut dyn Write, banner: &str, content: &str) -> ScaffoldResult<()> {
    write_preview(out, banner, content).map_err(|e| {
        ApplicationError::OutputFailed {
            reason: e.to_string(),
        }
        .into()
    })
}

fn write_preview(out: &mut dyn Write, banner: &str, content: &str) -> std::io::Result<()> {
    writeln!(out, "===== {banner} =====")?;
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out)
}

/// `path` relative to `root` with `/` separators; empty for the root itself.
fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

fn join_banner(root_rel: &str, rel: &str) -> String {
    if root_rel.is_empty() {
        rel.to_string()
    } else {
        format!("{root_rel}/{rel}")
    }
}
