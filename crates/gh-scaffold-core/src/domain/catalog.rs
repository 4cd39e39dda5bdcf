//! Static catalog of community-health files and the target set resolver.
//!
//! The catalog is data, not behaviour: one flat [`TargetDescriptor`] per
//! scaffolded file, in the order files are processed. Everything that
//! varies per key (format-sensitive paths, generated content) is a small
//! function keyed by [`TargetDescriptor::key`].

use std::collections::HashSet;

use crate::domain::value_objects::{IssueTemplateFormat, PresetTier};

/// One scaffolded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Stable logical identifier, e.g. `SECURITY`.
    pub key: &'static str,
    /// Path relative to a repository root. For format-sensitive descriptors
    /// this is the stem; the extension comes from [`resolve_path`].
    pub relative_path: &'static str,
    /// Reported under "missing essentials" by `scan`.
    pub essential: bool,
    /// Lowest preset that includes this file.
    pub tier: PresetTier,
    /// Extension depends on the issue-template format.
    pub format_sensitive: bool,
}

impl TargetDescriptor {
    const fn fixed(
        key: &'static str,
        relative_path: &'static str,
        essential: bool,
        tier: PresetTier,
    ) -> Self {
        Self {
            key,
            relative_path,
            essential,
            tier,
            format_sensitive: false,
        }
    }

    const fn issue_template(key: &'static str, stem: &'static str) -> Self {
        Self {
            key,
            relative_path: stem,
            essential: true,
            tier: PresetTier::Standard,
            format_sensitive: true,
        }
    }

    /// Managed-block id used for this file: the lower-cased key.
    pub fn block_id(&self) -> String {
        self.key.to_ascii_lowercase()
    }
}

/// Every target, in processing order.
pub const CATALOG: &[TargetDescriptor] = &[
    TargetDescriptor::fixed("CONTRIBUTING", "CONTRIBUTING.md", true, PresetTier::Minimal),
    TargetDescriptor::fixed("CODE_OF_CONDUCT", "CODE_OF_CONDUCT.md", false, PresetTier::Standard),
    TargetDescriptor::fixed("SECURITY", "SECURITY.md", true, PresetTier::Minimal),
    TargetDescriptor::fixed("SUPPORT", "SUPPORT.md", false, PresetTier::Standard),
    TargetDescriptor::fixed(
        "PULL_REQUEST_TEMPLATE",
        ".github/PULL_REQUEST_TEMPLATE.md",
        true,
        PresetTier::Minimal,
    ),
    TargetDescriptor::issue_template("ISSUE_TEMPLATE_BUG", ".github/ISSUE_TEMPLATE/bug_report"),
    TargetDescriptor::issue_template(
        "ISSUE_TEMPLATE_FEATURE",
        ".github/ISSUE_TEMPLATE/feature_request",
    ),
    TargetDescriptor::fixed(
        "ISSUE_TEMPLATE_CONFIG",
        ".github/ISSUE_TEMPLATE/config.yml",
        false,
        PresetTier::Standard,
    ),
    TargetDescriptor::fixed("FUNDING", ".github/FUNDING.yml", false, PresetTier::Strict),
    TargetDescriptor::fixed("CODEOWNERS", ".github/CODEOWNERS", false, PresetTier::Strict),
    TargetDescriptor::fixed("GOVERNANCE", "GOVERNANCE.md", false, PresetTier::Strict),
    TargetDescriptor::fixed("MAINTAINERS", "MAINTAINERS.md", false, PresetTier::Strict),
    TargetDescriptor::fixed("CHANGELOG", "CHANGELOG.md", false, PresetTier::Strict),
    TargetDescriptor::fixed("LICENSE", "LICENSE", false, PresetTier::Strict),
];

/// Look up a descriptor by key (exact match).
pub fn find(key: &str) -> Option<&'static TargetDescriptor> {
    CATALOG.iter().find(|d| d.key == key)
}

/// Descriptors in scope for a preset, in catalog order.
///
/// `minimal_only` restricts the result to rank-0 descriptors regardless of
/// the named tier.
pub fn choose_targets(tier: PresetTier, minimal_only: bool) -> Vec<&'static TargetDescriptor> {
    let max_rank = if minimal_only {
        PresetTier::Minimal.rank()
    } else {
        tier.rank()
    };

    CATALOG.iter().filter(|d| d.tier.rank() <= max_rank).collect()
}

/// Apply `--only` / `--skip` to a list of keys.
///
/// `skip` always wins over `only` for the same key. An empty `only` lets
/// every non-skipped key through.
pub fn filter_by_include_exclude<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    only: &[String],
    skip: &[String],
) -> Vec<&'a str> {
    let only: HashSet<&str> = only.iter().map(String::as_str).collect();
    let skip: HashSet<&str> = skip.iter().map(String::as_str).collect();

    keys.into_iter()
        .filter(|key| !skip.contains(key))
        .filter(|key| only.is_empty() || only.contains(key))
        .collect()
}

/// Keys from a user list that name no descriptor at all.
pub fn unknown_keys(keys: &[String]) -> Vec<&str> {
    keys.iter()
        .map(String::as_str)
        .filter(|k| find(k).is_none())
        .collect()
}

/// Concrete relative path for a descriptor.
pub fn resolve_path(descriptor: &TargetDescriptor, format: IssueTemplateFormat) -> String {
    if descriptor.format_sensitive {
        format!("{}.{}", descriptor.relative_path, format.extension())
    } else {
        descriptor.relative_path.to_string()
    }
}

/// Markdown-ness decides whether managed blocks may be used.
pub fn is_markdown(relative_path: &str) -> bool {
    relative_path.to_ascii_lowercase().ends_with(".md")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tier: PresetTier) -> HashSet<&'static str> {
        choose_targets(tier, false).iter().map(|d| d.key).collect()
    }

    #[test]
    fn keys_are_unique() {
        let unique: HashSet<_> = CATALOG.iter().map(|d| d.key).collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn presets_are_monotonic() {
        let minimal = keys(PresetTier::Minimal);
        let standard = keys(PresetTier::Standard);
        let strict = keys(PresetTier::Strict);

        assert!(minimal.is_subset(&standard));
        assert!(standard.is_subset(&strict));
        assert_eq!(strict.len(), CATALOG.len());
    }

    #[test]
    fn minimal_preset_contents() {
        let minimal: Vec<_> = choose_targets(PresetTier::Minimal, false)
            .iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(minimal, ["CONTRIBUTING", "SECURITY", "PULL_REQUEST_TEMPLATE"]);
    }

    #[test]
    fn minimal_flag_overrides_named_tier() {
        let strict_minimal = choose_targets(PresetTier::Strict, true);
        assert!(strict_minimal.iter().all(|d| d.tier == PresetTier::Minimal));
        assert_eq!(strict_minimal.len(), 3);
    }

    #[test]
    fn choose_targets_keeps_catalog_order() {
        let chosen: Vec<_> = choose_targets(PresetTier::Strict, false)
            .iter()
            .map(|d| d.key)
            .collect();
        let catalog: Vec<_> = CATALOG.iter().map(|d| d.key).collect();
        assert_eq!(chosen, catalog);
    }

    #[test]
    fn skip_beats_only() {
        let only = vec!["CHANGELOG".to_string()];
        let skip = vec!["CHANGELOG".to_string()];
        let out = filter_by_include_exclude(["CHANGELOG", "LICENSE"], &only, &skip);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_only_passes_everything_not_skipped() {
        let skip = vec!["FUNDING".to_string()];
        let out = filter_by_include_exclude(["FUNDING", "CODEOWNERS"], &[], &skip);
        assert_eq!(out, ["CODEOWNERS"]);
    }

    #[test]
    fn only_restricts() {
        let only = vec!["SECURITY".to_string()];
        let out = filter_by_include_exclude(["CONTRIBUTING", "SECURITY"], &only, &[]);
        assert_eq!(out, ["SECURITY"]);
    }

    #[test]
    fn issue_paths_follow_format() {
        let bug = find("ISSUE_TEMPLATE_BUG").unwrap();
        assert_eq!(
            resolve_path(bug, IssueTemplateFormat::Forms),
            ".github/ISSUE_TEMPLATE/bug_report.yml"
        );
        assert_eq!(
            resolve_path(bug, IssueTemplateFormat::Markdown),
            ".github/ISSUE_TEMPLATE/bug_report.md"
        );

        let config = find("ISSUE_TEMPLATE_CONFIG").unwrap();
        assert_eq!(
            resolve_path(config, IssueTemplateFormat::Markdown),
            ".github/ISSUE_TEMPLATE/config.yml"
        );
    }

    #[test]
    fn unknown_keys_are_reported() {
        let keys = vec!["SECURITY".to_string(), "NOPE".to_string()];
        assert_eq!(unknown_keys(&keys), ["NOPE"]);
    }

    #[test]
    fn markdown_detection() {
        assert!(is_markdown("SECURITY.md"));
        assert!(!is_markdown(".github/CODEOWNERS"));
        assert!(!is_markdown(".github/FUNDING.yml"));
    }

    #[test]
    fn block_id_is_lower_cased_key() {
        assert_eq!(find("SECURITY").unwrap().block_id(), "security");
    }
}
