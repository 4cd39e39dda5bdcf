//! Target key → template name lookup.
//!
//! Template names are paths relative to a templates directory, e.g.
//! `ISSUE_TEMPLATE/bug_report.yml`. The built-in store and custom template
//! directories use the same names.

use crate::domain::value_objects::{IssueTemplateFormat, LicenseChoice};

/// Every template name the built-in store provides.
pub const BUILTIN_TEMPLATE_NAMES: &[&str] = &[
    "CONTRIBUTING.md",
    "CODE_OF_CONDUCT.md",
    "SECURITY.md",
    "SUPPORT.md",
    "PULL_REQUEST_TEMPLATE.md",
    "ISSUE_TEMPLATE/bug_report.md",
    "ISSUE_TEMPLATE/bug_report.yml",
    "ISSUE_TEMPLATE/feature_request.md",
    "ISSUE_TEMPLATE/feature_request.yml",
    "ISSUE_TEMPLATE/config.yml",
    "FUNDING.yml",
    "CODEOWNERS",
    "GOVERNANCE.md",
    "MAINTAINERS.md",
    "CHANGELOG.md",
    "LICENSE_MIT",
    "LICENSE_APACHE_2_0",
    "LICENSE_GPL_3_0",
];

/// Template to read for a target key, or `None` for unknown keys.
pub fn template_name_for(key: &str, format: IssueTemplateFormat) -> Option<&'static str> {
    let forms = format == IssueTemplateFormat::Forms;

    let name = match key {
        "CONTRIBUTING" => "CONTRIBUTING.md",
        "CODE_OF_CONDUCT" => "CODE_OF_CONDUCT.md",
        "SECURITY" => "SECURITY.md",
        "SUPPORT" => "SUPPORT.md",
        "PULL_REQUEST_TEMPLATE" => "PULL_REQUEST_TEMPLATE.md",
        "ISSUE_TEMPLATE_BUG" if forms => "ISSUE_TEMPLATE/bug_report.yml",
        "ISSUE_TEMPLATE_BUG" => "ISSUE_TEMPLATE/bug_report.md",
        "ISSUE_TEMPLATE_FEATURE" if forms => "ISSUE_TEMPLATE/feature_request.yml",
        "ISSUE_TEMPLATE_FEATURE" => "ISSUE_TEMPLATE/feature_request.md",
        "ISSUE_TEMPLATE_CONFIG" => "ISSUE_TEMPLATE/config.yml",
        "FUNDING" => "FUNDING.yml",
        "CODEOWNERS" => "CODEOWNERS",
        "GOVERNANCE" => "GOVERNANCE.md",
        "MAINTAINERS" => "MAINTAINERS.md",
        "CHANGELOG" => "CHANGELOG.md",
        "LICENSE" => "LICENSE_MIT",
        _ => return None,
    };

    Some(name)
}

/// Template holding the text of a license, `None` for [`LicenseChoice::None`].
pub fn license_template_name(license: LicenseChoice) -> Option<&'static str> {
    match license {
        LicenseChoice::None => None,
        LicenseChoice::Mit => Some("LICENSE_MIT"),
        LicenseChoice::Apache2 => Some("LICENSE_APACHE_2_0"),
        LicenseChoice::Gpl3 => Some("LICENSE_GPL_3_0"),
    }
}

/// Template for `key` taking the configured license into account.
pub fn resolve_template_name(
    key: &str,
    format: IssueTemplateFormat,
    license: LicenseChoice,
) -> Option<&'static str> {
    if key == "LICENSE" {
        if let Some(name) = license_template_name(license) {
            return Some(name);
        }
    }
    template_name_for(key, format)
}
