//! Domain value objects: PresetTier, IssueTemplateFormat, LicenseChoice, ScopeMode.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. The serde names match the
//! keys users write in `gh-scaffold.yml`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PresetTier ───────────────────────────────────────────────────────────────

/// Ordered bundle of target files: `minimal ⊂ standard ⊂ strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetTier {
    Minimal,
    Standard,
    Strict,
}

impl PresetTier {
    pub const ALL: [PresetTier; 3] = [Self::Minimal, Self::Standard, Self::Strict];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Strict => "strict",
        }
    }

    /// Position in the superset chain. A descriptor is in scope for a tier
    /// iff its own rank is less than or equal to the tier's rank.
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Minimal => 0,
            Self::Standard => 1,
            Self::Strict => 2,
        }
    }
}

impl fmt::Display for PresetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            other => Err(DomainError::InvalidValue {
                field: "preset",
                value: other.to_string(),
                expected: "minimal, standard, strict",
            }),
        }
    }
}

// ── IssueTemplateFormat ──────────────────────────────────────────────────────

/// Flavour of the bug/feature issue templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueTemplateFormat {
    /// Classic markdown templates (`.md`).
    Markdown,
    /// GitHub issue forms (`.yml`).
    Forms,
}

impl IssueTemplateFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Forms => "forms",
        }
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Forms => "yml",
        }
    }
}

impl fmt::Display for IssueTemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueTemplateFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "forms" | "yml" | "yaml" => Ok(Self::Forms),
            other => Err(DomainError::InvalidValue {
                field: "issue template format",
                value: other.to_string(),
                expected: "markdown, forms",
            }),
        }
    }
}

// ── LicenseChoice ────────────────────────────────────────────────────────────

/// License text to scaffold into `LICENSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseChoice {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "mit")]
    Mit,
    #[serde(rename = "apache-2.0")]
    Apache2,
    #[serde(rename = "gpl-3.0")]
    Gpl3,
}

impl LicenseChoice {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mit => "mit",
            Self::Apache2 => "apache-2.0",
            Self::Gpl3 => "gpl-3.0",
        }
    }
}

impl fmt::Display for LicenseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "mit" => Ok(Self::Mit),
            "apache-2.0" | "apache" | "apache2" => Ok(Self::Apache2),
            "gpl-3.0" | "gpl" | "gpl3" => Ok(Self::Gpl3),
            other => Err(DomainError::InvalidValue {
                field: "license",
                value: other.to_string(),
                expected: "none, mit, apache-2.0, gpl-3.0",
            }),
        }
    }
}

// ── ScopeMode ────────────────────────────────────────────────────────────────

/// Which repository roots a single invocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    /// Only the invocation root.
    Root,
    /// Only discovered workspace/package directories.
    Packages,
    /// The root plus every discovered package.
    All,
}

impl ScopeMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Packages => "packages",
            Self::All => "all",
        }
    }

    pub const fn includes_root(&self) -> bool {
        matches!(self, Self::Root | Self::All)
    }

    pub const fn includes_packages(&self) -> bool {
        matches!(self, Self::Packages | Self::All)
    }
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "root" => Ok(Self::Root),
            "packages" => Ok(Self::Packages),
            "all" => Ok(Self::All),
            other => Err(DomainError::InvalidValue {
                field: "scope mode",
                value: other.to_string(),
                expected: "root, packages, all",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_parses_case_insensitively() {
        assert_eq!("STRICT".parse::<PresetTier>().unwrap(), PresetTier::Strict);
        assert!("huge".parse::<PresetTier>().is_err());
    }

    #[test]
    fn preset_ranks_form_a_chain() {
        assert!(PresetTier::Minimal.rank() < PresetTier::Standard.rank());
        assert!(PresetTier::Standard.rank() < PresetTier::Strict.rank());
    }

    #[test]
    fn issue_format_extension() {
        assert_eq!(IssueTemplateFormat::Markdown.extension(), "md");
        assert_eq!(IssueTemplateFormat::Forms.extension(), "yml");
    }

    #[test]
    fn license_round_trips_through_display() {
        for license in [
            LicenseChoice::None,
            LicenseChoice::Mit,
            LicenseChoice::Apache2,
            LicenseChoice::Gpl3,
        ] {
            assert_eq!(license.to_string().parse::<LicenseChoice>().unwrap(), license);
        }
    }

    #[test]
    fn scope_mode_membership() {
        assert!(ScopeMode::Root.includes_root());
        assert!(!ScopeMode::Root.includes_packages());
        assert!(!ScopeMode::Packages.includes_root());
        assert!(ScopeMode::All.includes_root() && ScopeMode::All.includes_packages());
    }

    #[test]
    fn invalid_scope_reports_expected_values() {
        let err = "everything".parse::<ScopeMode>().unwrap_err();
        assert!(err.to_string().contains("root, packages, all"));
    }
}
