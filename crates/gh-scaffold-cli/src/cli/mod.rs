//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gh_scaffold_core::domain::{IssueTemplateFormat, LicenseChoice, PresetTier, ScopeMode};

pub mod global;
pub use global::{GlobalArgs, OutputFormat, RepoArgs};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gh-scaffold",
    bin_name = "gh-scaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scan a repo and generate missing GitHub community health files",
    long_about = "gh-scaffold scans a repository for community health files \
                  (.github templates, CONTRIBUTING, SECURITY, etc.) and \
                  generates the missing ones. Existing files are never \
                  overwritten unless asked.",
    after_help = "EXAMPLES:\n\
        \x20 gh-scaffold scan\n\
        \x20 gh-scaffold apply --preset strict --dry-run --diff\n\
        \x20 gh-scaffold apply --update --only SECURITY,CONTRIBUTING\n\
        \x20 gh-scaffold doctor --repo ../my-project",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report which community files exist.
    #[command(
        about = "Scan a repository and print what is missing",
        after_help = "EXAMPLES:\n\
            \x20 gh-scaffold scan\n\
            \x20 gh-scaffold scan --repo ../other --json"
    )]
    Scan(ScanArgs),

    /// Generate missing files.
    #[command(
        about = "Generate missing files into the repo (safe by default)",
        after_help = "EXAMPLES:\n\
            \x20 gh-scaffold apply\n\
            \x20 gh-scaffold apply --preset minimal --dry-run --print\n\
            \x20 gh-scaffold apply --force --diff --only CONTRIBUTING\n\
            \x20 gh-scaffold apply --scope all --skip FUNDING,CODEOWNERS"
    )]
    Apply(ApplyArgs),

    /// Check generated files for unfilled placeholders.
    #[command(
        about = "Validate placeholders in existing files",
        after_help = "Exits with status 5 when problems are found."
    )]
    Doctor(DoctorArgs),

    /// Write a starter gh-scaffold.yml.
    #[command(
        about = "Create a starter gh-scaffold.yml",
        after_help = "EXAMPLES:\n\
            \x20 gh-scaffold init\n\
            \x20 gh-scaffold init --repo ../my-project --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gh-scaffold completions bash > ~/.local/share/bash-completion/completions/gh-scaffold\n\
            \x20 gh-scaffold completions zsh  > ~/.zfunc/_gh-scaffold\n\
            \x20 gh-scaffold completions fish > ~/.config/fish/completions/gh-scaffold.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gh-scaffold config show\n\
            \x20 gh-scaffold config path --repo ../my-project\n\
            \x20 gh-scaffold config prefs"
    )]
    Config(ConfigCommands),
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `gh-scaffold scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Print the scan result as JSON.
    #[arg(long = "json", help = "Output JSON")]
    pub json: bool,
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `gh-scaffold apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    #[arg(long = "preset", value_enum, help = "Preset: minimal|standard|strict")]
    pub preset: Option<Preset>,

    #[arg(
        long = "issue-templates",
        value_name = "FORMAT",
        value_enum,
        help = "Issue templates format: markdown|forms"
    )]
    pub issue_templates: Option<IssueFormat>,

    #[arg(long = "license", value_enum, help = "License file to generate")]
    pub license: Option<License>,

    /// Directory laid out like the built-in templates.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Custom templates directory"
    )]
    pub templates: Option<PathBuf>,

    #[arg(long = "scope", value_enum, help = "Scope mode: root|packages|all")]
    pub scope: Option<Scope>,

    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    #[arg(long = "update", help = "Update mode (managed markers, no overwrite)")]
    pub update: bool,

    #[arg(long = "dry-run", help = "Show what would be written, without writing")]
    pub dry_run: bool,

    #[arg(long = "print", help = "Print generated file contents to stdout")]
    pub print: bool,

    #[arg(long = "diff", help = "Show unified diffs")]
    pub diff: bool,

    #[arg(long = "minimal", help = "Only create essential files")]
    pub minimal: bool,

    #[arg(
        long = "only",
        value_name = "KEYS",
        value_delimiter = ',',
        help = "Comma-separated keys to include (e.g. SECURITY,CONTRIBUTING)"
    )]
    pub only: Vec<String>,

    #[arg(
        long = "skip",
        value_name = "KEYS",
        value_delimiter = ',',
        help = "Comma-separated keys to skip (e.g. FUNDING,CODEOWNERS)"
    )]
    pub skip: Vec<String>,
}

// ── doctor ────────────────────────────────────────────────────────────────────

/// Arguments for `gh-scaffold doctor`.
#[derive(Debug, Args)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub repo: RepoArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gh-scaffold init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gh-scaffold completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gh-scaffold config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (defaults plus the config file).
    Show(RepoArgs),
    /// Print the path of the config file in use.
    Path(RepoArgs),
    /// Print the CLI preferences and where they are read from.
    Prefs,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Preset tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Minimal,
    Standard,
    Strict,
}

impl From<Preset> for PresetTier {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Minimal => Self::Minimal,
            Preset::Standard => Self::Standard,
            Preset::Strict => Self::Strict,
        }
    }
}

/// Issue template formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IssueFormat {
    /// Also accepted as `md`.
    #[value(alias = "md")]
    Markdown,
    /// Also accepted as `yml`.
    #[value(alias = "yml")]
    Forms,
}

impl From<IssueFormat> for IssueTemplateFormat {
    fn from(format: IssueFormat) -> Self {
        match format {
            IssueFormat::Markdown => Self::Markdown,
            IssueFormat::Forms => Self::Forms,
        }
    }
}

/// License choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum License {
    None,
    Mit,
    #[value(name = "apache-2.0", alias = "apache")]
    Apache2,
    #[value(name = "gpl-3.0", alias = "gpl")]
    Gpl3,
}

impl From<License> for LicenseChoice {
    fn from(license: License) -> Self {
        match license {
            License::None => Self::None,
            License::Mit => Self::Mit,
            License::Apache2 => Self::Apache2,
            License::Gpl3 => Self::Gpl3,
        }
    }
}

/// Scope modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    Root,
    Packages,
    All,
}

impl From<Scope> for ScopeMode {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Root => Self::Root,
            Scope::Packages => Self::Packages,
            Scope::All => Self::All,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
