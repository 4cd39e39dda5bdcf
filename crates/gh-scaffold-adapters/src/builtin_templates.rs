//! Built-in templates, embedded at compile time.
//!
//! Every entry is a template name (as used by the core's key → template
//! lookup) paired with the text of `templates/<name>` in this crate. The
//! set must cover `gh_scaffold_core::domain::templates::BUILTIN_TEMPLATE_NAMES`;
//! a test below keeps the two in sync.

macro_rules! builtin {
    ($($name:literal),+ $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name)))),+]
    };
}

/// `(name, content)` for every shipped template.
pub static BUILTIN_TEMPLATES: &[(&str, &str)] = builtin![
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

/// Look up one built-in template by name.
pub fn get(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, content)| *content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_scaffold_core::domain::{content, templates::BUILTIN_TEMPLATE_NAMES};

    #[test]
    fn every_core_template_name_is_embedded() {
        for name in BUILTIN_TEMPLATE_NAMES {
            assert!(get(name).is_some(), "{name} is not embedded");
        }
        assert_eq!(BUILTIN_TEMPLATES.len(), BUILTIN_TEMPLATE_NAMES.len());
    }

    #[test]
    fn contact_templates_carry_placeholders() {
        let security = get("SECURITY.md").unwrap();
        assert!(security.contains(content::SECURITY_EMAIL_PLACEHOLDER));

        let coc = get("CODE_OF_CONDUCT.md").unwrap();
        assert!(coc.contains(content::COC_CONTACT_PLACEHOLDER));

        let support = get("SUPPORT.md").unwrap();
        assert!(support.contains(content::SUPPORT_URL_PLACEHOLDER));
    }

    #[test]
    fn issue_forms_are_yaml_with_a_body() {
        for name in ["ISSUE_TEMPLATE/bug_report.yml", "ISSUE_TEMPLATE/feature_request.yml"] {
            let text = get(name).unwrap();
            let parsed: serde_yaml::Value = serde_yaml::from_str(text).unwrap();
            assert!(parsed.get("body").is_some(), "{name} has no body");
        }
    }

    #[test]
    fn templates_end_with_newline() {
        for (name, text) in BUILTIN_TEMPLATES {
            assert!(text.ends_with('\n'), "{name} does not end with a newline");
        }
    }
}
