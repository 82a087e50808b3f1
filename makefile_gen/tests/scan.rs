use makefile_gen::{GenError, Project, ProjectSettings, TargetKind, Sources, list_sources};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project_dir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for file in files {
        fs::write(dir.path().join(file), "").expect("Failed to create file");
    }
    dir
}

fn qualified(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

#[test]
fn lists_only_exact_suffix_matches() {
    let dir = project_dir(&["a.c", "b.c", "readme.txt", "foo.cache", "a.c.o"]);
    fs::create_dir(dir.path().join("nested.c")).unwrap();

    let mut found = list_sources(Some(dir.path()), ".c")
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    found.sort();
    assert_eq!(found, vec![qualified(dir.path(), "a.c"), qualified(dir.path(), "b.c")]);
}

#[test]
fn missing_directory_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = list_sources(Some(&missing), ".c").unwrap_err();
    match err {
        GenError::DirectoryUnavailable { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn append_from_directory_collects_sources() {
    let dir = project_dir(&["a.c", "b.c", "readme.txt"]);
    let settings = ProjectSettings::new("cc");
    let mut project = Project::new();

    let target = project
        .append_from_directory(&settings, Some(dir.path()), TargetKind::Executable, "app")
        .unwrap();
    let Sources::Listed(files) = target.sources() else {
        panic!("directory scan should list files");
    };
    let mut files = files.clone();
    files.sort();
    assert_eq!(files, vec![qualified(dir.path(), "a.c"), qualified(dir.path(), "b.c")]);
    assert_eq!(target.output_var(), "EXE0");
}

#[test]
fn append_from_directory_without_matches_appends_nothing() {
    let dir = project_dir(&["notes.md", "foo.cache"]);
    let settings = ProjectSettings::new("cc");
    let mut project = Project::new();

    let err = project
        .append_from_directory(&settings, Some(dir.path()), TargetKind::Library, "libempty.a")
        .unwrap_err();
    assert!(matches!(err, GenError::EmptySourceSet { .. }));
    assert!(project.is_empty());
}

#[test]
fn append_from_missing_directory_keeps_numbering() {
    let dir = project_dir(&["main.c"]);
    let settings = ProjectSettings::new("cc");
    let mut project = Project::new();

    let missing = dir.path().join("gone");
    assert!(project
        .append_from_directory(&settings, Some(&missing), TargetKind::Executable, "x")
        .is_err());

    let target = project
        .append_from_directory(&settings, Some(dir.path()), TargetKind::Executable, "main")
        .unwrap();
    assert_eq!(target.index(), 0);
}

#[test]
fn scan_honours_configured_suffix() {
    let dir = project_dir(&["a.cpp", "b.c"]);
    let mut settings = ProjectSettings::new("c++");
    settings.source_suffix = ".cpp".into();
    let mut project = Project::new();

    let target = project
        .append_from_directory(&settings, Some(dir.path()), TargetKind::Executable, "app")
        .unwrap();
    assert_eq!(target.sources(), &Sources::Listed(vec![qualified(dir.path(), "a.cpp")]));
}
