//! Scaffold configuration model and its field-wise merge.
//!
//! Every field is optional so the same type describes both the defaults and
//! a user overlay read from `gh-scaffold.yml`. [`ScaffoldConfig::merge`] is
//! written out field by field: scalars from the overlay replace the base,
//! nested records are merged key by key.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{IssueTemplateFormat, LicenseChoice, PresetTier, ScopeMode};

/// Package globs used when nothing else is configured.
pub const DEFAULT_PACKAGE_GLOBS: [&str; 2] = ["packages/*", "apps/*"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaffoldConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<PresetTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_templates: Option<IssueTemplateFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseChoice>,
    #[serde(skip_serializing_if = "Contacts::is_empty")]
    pub contacts: Contacts,
    #[serde(skip_serializing_if = "Ownership::is_empty")]
    pub ownership: Ownership,
    #[serde(skip_serializing_if = "Funding::is_empty")]
    pub funding: Funding,
    #[serde(skip_serializing_if = "Behavior::is_empty")]
    pub behavior: Behavior,
    /// Overrides the built-in templates; absolute or relative to the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Scope::is_empty")]
    pub scope: Scope,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coc_contact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ownership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_owners: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<OwnershipRule>>,
}

/// `pattern owner...` line in CODEOWNERS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRule {
    pub pattern: String,
    pub owners: Vec<String>,
}

/// Keys mirror GitHub's own FUNDING.yml keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Funding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubSponsors>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "koFi")]
    pub ko_fi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "openCollective")]
    pub open_collective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<String>>,
}

/// `github:` accepts a single handle or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GithubSponsors {
    One(String),
    Many(Vec<String>),
}

impl GithubSponsors {
    pub fn handles(&self) -> Vec<&str> {
        match self {
            Self::One(handle) => vec![handle.as_str()],
            Self::Many(handles) => handles.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Behavior {
    /// Managed-marker update mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<bool>,
    /// Wrap freshly created markdown files in a managed block when updating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_markers: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ScopeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages_globs: Option<Vec<String>>,
}

// ── Merge ────────────────────────────────────────────────────────────────────

impl ScaffoldConfig {
    /// Built-in defaults applied before any user overlay.
    pub fn defaults() -> Self {
        Self {
            preset: Some(PresetTier::Standard),
            issue_templates: Some(IssueTemplateFormat::Markdown),
            license: Some(LicenseChoice::None),
            behavior: Behavior {
                update: Some(false),
                managed_markers: Some(true),
            },
            scope: Scope {
                mode: Some(ScopeMode::Root),
                packages_globs: Some(DEFAULT_PACKAGE_GLOBS.iter().map(|g| g.to_string()).collect()),
            },
            ..Self::default()
        }
    }

    /// Merge `overlay` on top of `self`. Overlay wins on every field it sets.
    pub fn merge(&self, overlay: &ScaffoldConfig) -> ScaffoldConfig {
        ScaffoldConfig {
            preset: overlay.preset.or(self.preset),
            issue_templates: overlay.issue_templates.or(self.issue_templates),
            license: overlay.license.or(self.license),
            contacts: self.contacts.merge(&overlay.contacts),
            ownership: self.ownership.merge(&overlay.ownership),
            funding: self.funding.merge(&overlay.funding),
            behavior: self.behavior.merge(&overlay.behavior),
            templates_dir: pick(&overlay.templates_dir, &self.templates_dir),
            scope: self.scope.merge(&overlay.scope),
        }
    }

    pub fn preset(&self) -> PresetTier {
        self.preset.unwrap_or(PresetTier::Standard)
    }

    pub fn issue_templates(&self) -> IssueTemplateFormat {
        self.issue_templates.unwrap_or(IssueTemplateFormat::Markdown)
    }

    pub fn license(&self) -> LicenseChoice {
        self.license.unwrap_or(LicenseChoice::None)
    }

    pub fn update(&self) -> bool {
        self.behavior.update.unwrap_or(false)
    }

    pub fn managed_markers(&self) -> bool {
        self.behavior.managed_markers.unwrap_or(true)
    }

    pub fn scope_mode(&self) -> ScopeMode {
        self.scope.mode.unwrap_or(ScopeMode::Root)
    }

    pub fn packages_globs(&self) -> Vec<String> {
        self.scope
            .packages_globs
            .clone()
            .unwrap_or_else(|| DEFAULT_PACKAGE_GLOBS.iter().map(|g| g.to_string()).collect())
    }
}

impl Contacts {
    fn merge(&self, overlay: &Contacts) -> Contacts {
        Contacts {
            support_url: pick(&overlay.support_url, &self.support_url),
            security_email: pick(&overlay.security_email, &self.security_email),
            coc_contact: pick(&overlay.coc_contact, &self.coc_contact),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Ownership {
    fn merge(&self, overlay: &Ownership) -> Ownership {
        Ownership {
            default_owners: pick(&overlay.default_owners, &self.default_owners),
            patterns: pick(&overlay.patterns, &self.patterns),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Funding {
    fn merge(&self, overlay: &Funding) -> Funding {
        Funding {
            github: pick(&overlay.github, &self.github),
            ko_fi: pick(&overlay.ko_fi, &self.ko_fi),
            open_collective: pick(&overlay.open_collective, &self.open_collective),
            custom: pick(&overlay.custom, &self.custom),
        }
    }

    /// No funding field set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Behavior {
    fn merge(&self, overlay: &Behavior) -> Behavior {
        Behavior {
            update: overlay.update.or(self.update),
            managed_markers: overlay.managed_markers.or(self.managed_markers),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Scope {
    fn merge(&self, overlay: &Scope) -> Scope {
        Scope {
            mode: overlay.mode.or(self.mode),
            packages_globs: pick(&overlay.packages_globs, &self.packages_globs),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn pick<T: Clone>(overlay: &Option<T>, base: &Option<T>) -> Option<T> {
    overlay.as_ref().or(base.as_ref()).cloned()
}
