use std::fs;

use docsite_core::Language;
use docsite_loader::{ChangelogLoader, FileSystemChangelogSource};
use tempfile::TempDir;

fn write_datasets(dir: &TempDir) {
    fs::write(
        dir.path().join("components-changelog-en.json"),
        r#"{
            "TreeSelect": [
                {"version": "5.1.0", "changelog": "Fix `treeData` update", "refs": ["https://github.com/org/repo/pull/40000"]},
                {"version": "5.0.0", "changelog": "Initial", "refs": []}
            ]
        }"#,
    )
    .expect("write en dataset");
    fs::write(dir.path().join("components-changelog-cn.json"), "{ broken")
        .expect("write cn dataset");
}

#[test]
fn loads_component_from_directory() {
    let dir = TempDir::new().expect("create temp dir");
    write_datasets(&dir);
    let mut loader = ChangelogLoader::new(FileSystemChangelogSource::new(dir.path()));

    let changelog = loader
        .load("/components/tree-select/", Language::En)
        .expect("changelog found");

    assert_eq!(changelog.key, "TreeSelect");
    assert_eq!(changelog.entries.len(), 2);
    assert_eq!(changelog.entries[0].refs.len(), 1);
}

#[test]
fn broken_dataset_hides_changelog() {
    let dir = TempDir::new().expect("create temp dir");
    write_datasets(&dir);
    let mut loader = ChangelogLoader::new(FileSystemChangelogSource::new(dir.path()));

    assert!(
        loader
            .load("/components/tree-select-cn/", Language::Cn)
            .is_none()
    );
}

#[test]
fn missing_directory_hides_changelog() {
    let dir = TempDir::new().expect("create temp dir");
    let mut loader =
        ChangelogLoader::new(FileSystemChangelogSource::new(dir.path().join("missing")));

    assert!(loader.load("/components/button/", Language::En).is_none());
}
