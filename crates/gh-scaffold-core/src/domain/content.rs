//! Desired file content: placeholder substitution plus the two structured
//! generators (CODEOWNERS and FUNDING.yml).
//!
//! Everything here is a pure function of template text and configuration;
//! reading the template is the application layer's job.

use crate::domain::config::{Funding, Ownership, ScaffoldConfig};

/// Placeholder replaced by `contacts.securityEmail`.
pub const SECURITY_EMAIL_PLACEHOLDER: &str = "<INSERT SECURITY EMAIL>";
/// Placeholder replaced by `contacts.cocContact`.
pub const COC_CONTACT_PLACEHOLDER: &str = "<INSERT CONTACT METHOD>";
/// Placeholder replaced by `contacts.supportUrl`.
pub const SUPPORT_URL_PLACEHOLDER: &str = "<INSERT SUPPORT URL>";

/// Render the desired content for `key` from its raw template.
pub fn render(key: &str, template: &str, config: &ScaffoldConfig) -> String {
    let content = substitute_placeholders(template, config);

    match key {
        "CODEOWNERS" => codeowners(&config.ownership).unwrap_or(content),
        "FUNDING" => funding_yaml(&config.funding).unwrap_or(content),
        _ => content,
    }
}

/// Replace contact placeholders. Unset fields leave the placeholder alone.
pub fn substitute_placeholders(template: &str, config: &ScaffoldConfig) -> String {
    let contacts = &config.contacts;
    let mut out = template.to_string();

    for (placeholder, value) in [
        (SECURITY_EMAIL_PLACEHOLDER, &contacts.security_email),
        (COC_CONTACT_PLACEHOLDER, &contacts.coc_contact),
        (SUPPORT_URL_PLACEHOLDER, &contacts.support_url),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            out = out.replace(placeholder, value);
        }
    }

    out
}

/// Generated CODEOWNERS, or `None` when no default owner is configured.
pub fn codeowners(ownership: &Ownership) -> Option<String> {
    let owners = ownership
        .default_owners
        .as_deref()
        .filter(|owners| !owners.is_empty())?;

    let mut lines = vec![
        "# CODEOWNERS generated by gh-scaffold".to_string(),
        format!("* {}", owners.join(" ")),
    ];

    for rule in ownership.patterns.iter().flatten() {
        lines.push(format!("{} {}", rule.pattern, rule.owners.join(" ")));
    }

    Some(lines.join("\n") + "\n")
}

/// Generated FUNDING.yml, or `None` when no funding field is configured.
pub fn funding_yaml(funding: &Funding) -> Option<String> {
    if funding.is_empty() {
        return None;
    }

    let mut lines = Vec::new();

    if let Some(github) = &funding.github {
        let handles: Vec<String> = github.handles().into_iter().map(yaml_scalar).collect();
        lines.push(format!("github: [{}]", handles.join(", ")));
    }
    if let Some(ko_fi) = &funding.ko_fi {
        lines.push(format!("ko_fi: {}", yaml_scalar(ko_fi)));
    }
    if let Some(open_collective) = &funding.open_collective {
        lines.push(format!("open_collective: {}", yaml_scalar(open_collective)));
    }
    if let Some(custom) = funding.custom.as_deref().filter(|c| !c.is_empty()) {
        let urls: Vec<String> = custom.iter().map(|url| quoted(url)).collect();
        lines.push(format!("custom: [{}]", urls.join(", ")));
    }

    Some(lines.join("\n") + "\n")
}

/// Handles and slugs stay plain; anything else is double-quoted.
fn yaml_scalar(value: &str) -> String {
    let plain = value.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if plain { value.to_string() } else { quoted(value) }
}

/// JSON string syntax is a valid YAML double-quoted scalar.
fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
