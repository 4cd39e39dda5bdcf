//! The service over `MemoryFilesystem`, with the built-in template store.

use std::path::Path;

use gh_scaffold_adapters::{
    GlobPackageLocator, InMemoryStore, ManifestDetector, MemoryFilesystem, YamlConfigLoader,
};
use gh_scaffold_core::{
    domain::{LicenseChoice, PresetTier, markers},
    prelude::*,
};
use pretty_assertions::assert_eq;

/// Nothing lives here on disk; every file is in memory.
const ROOT: &str = "/gh-scaffold-memory-repo";

fn service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(YamlConfigLoader::new()),
        Box::new(ManifestDetector::new()),
        Box::new(GlobPackageLocator::new()),
    )
}

fn path(rel: &str) -> std::path::PathBuf {
    Path::new(ROOT).join(rel)
}

#[test]
fn strict_preset_creates_every_catalog_file() {
    let fs = MemoryFilesystem::new();
    let result = service(&fs)
        .apply(
            &ApplyOptions {
                preset: Some(PresetTier::Strict),
                license: Some(LicenseChoice::Apache2),
                ..ApplyOptions::new(ROOT)
            },
            &mut Vec::new(),
        )
        .unwrap();

    assert_eq!(result.written.len(), 14);
    assert_eq!(fs.list_files().len(), 14);
    assert!(
        fs.read_file(&path("LICENSE"))
            .unwrap()
            .contains("Apache License, Version 2.0")
    );
}

#[test]
fn custom_templates_are_read_through_the_filesystem_port() {
    let fs = MemoryFilesystem::new();
    fs.insert(path("tpl/SECURITY.md"), "Mail <INSERT SECURITY EMAIL>\n");

    let result = service(&fs)
        .apply(
            &ApplyOptions {
                templates_dir: Some("tpl".into()),
                only: vec!["SECURITY".into(), "CONTRIBUTING".into()],
                ..ApplyOptions::new(ROOT)
            },
            &mut Vec::new(),
        )
        .unwrap();

    assert_eq!(result.written, ["SECURITY.md"]);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].starts_with("CONTRIBUTING: "));
    assert_eq!(
        fs.read_file(&path("SECURITY.md")).as_deref(),
        Some("Mail <INSERT SECURITY EMAIL>\n")
    );
}

#[test]
fn update_appends_a_block_to_an_unmarked_file() {
    let fs = MemoryFilesystem::new();
    fs.insert(path("SUPPORT.md"), "# Help\n\nAsk in chat.\n");

    let options = ApplyOptions {
        update: true,
        only: vec!["SUPPORT".into()],
        ..ApplyOptions::new(ROOT)
    };
    let result = service(&fs).apply(&options, &mut Vec::new()).unwrap();
    assert_eq!(result.written, ["SUPPORT.md (update)"]);

    let text = fs.read_file(&path("SUPPORT.md")).unwrap();
    assert!(text.starts_with("# Help\n\nAsk in chat.\n"));
    assert!(markers::has_block(&text, "support"));

    let before = fs.snapshot();
    service(&fs).apply(&options, &mut Vec::new()).unwrap();
    assert_eq!(fs.snapshot(), before);
}
