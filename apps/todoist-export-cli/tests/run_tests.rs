//! Driver tests: flag selection, credential resolution and export runs

use clap::Parser;
use std::path::Path;
use tempfile::TempDir;
use todoist_export_cli::{run, run_with_source, Cli};
use todoist_export_core::test_utils::{mock_project, MockSource, SourceCall};
use todoist_export_core::{ExportKind, ExporterConfig};

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["todoist-exporter"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn csv_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".csv"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_projects_scenario_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"TOKEN":"abc"}"#).unwrap();
    let out = dir.path().join("data");

    let cli = cli(&[
        "--projects",
        "--config",
        config_path.to_str().unwrap(),
        "--output_dir",
        out.to_str().unwrap(),
    ]);
    let config = ExporterConfig::from_file(&cli.config).unwrap();
    assert_eq!(config.credential.expose(), "abc");

    let summary = run_with_source(&cli, MockSource::with_mock_data()).unwrap();
    assert!(summary.is_success());
    assert_eq!(csv_files(&out), vec!["projects.csv"]);

    let mut reader = csv::Reader::from_path(out.join("projects.csv")).unwrap();
    let rows: Vec<_> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "123");
    assert_eq!(&rows[0][1], "Test Project");
}

#[test]
fn test_all_flag_and_no_flags_produce_same_files() {
    let with_all = TempDir::new().unwrap();
    let without = TempDir::new().unwrap();

    run_with_source(
        &cli(&["--all", "--output_dir", with_all.path().to_str().unwrap()]),
        MockSource::with_mock_data(),
    )
    .unwrap();
    run_with_source(
        &cli(&["--output_dir", without.path().to_str().unwrap()]),
        MockSource::with_mock_data(),
    )
    .unwrap();

    let expected = vec![
        "comments.csv",
        "labels.csv",
        "projects.csv",
        "sections.csv",
        "tasks.csv",
        "tasks_completed.csv",
    ];
    assert_eq!(csv_files(with_all.path()), expected);
    assert_eq!(csv_files(without.path()), expected);
}

#[test]
fn test_one_failing_kind_does_not_block_others() {
    let dir = TempDir::new().unwrap();
    let source = MockSource::with_mock_data().failing(SourceCall::Tasks);

    let summary = run_with_source(
        &cli(&["--projects", "--tasks", "--labels", "--output_dir", dir.path().to_str().unwrap()]),
        source,
    )
    .unwrap();

    assert_eq!(summary.failed, vec![ExportKind::Tasks]);
    assert_eq!(csv_files(dir.path()), vec!["labels.csv", "projects.csv"]);
}

#[test]
fn test_rerun_overwrites_files() {
    let dir = TempDir::new().unwrap();
    let args = ["--projects", "--output_dir", dir.path().to_str().unwrap()];

    let mut first = MockSource::new();
    first.projects = vec![mock_project("1", "A"), mock_project("2", "B")];
    run_with_source(&cli(&args), first).unwrap();

    let mut second = MockSource::new();
    second.projects = vec![mock_project("3", "C")];
    run_with_source(&cli(&args), second).unwrap();

    let mut reader = csv::Reader::from_path(dir.path().join("projects.csv")).unwrap();
    let rows: Vec<_> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "3");
}

#[test]
fn test_missing_config_fails_before_creating_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("data");

    let result = run(&cli(&[
        "--config",
        dir.path().join("config.json").to_str().unwrap(),
        "--output_dir",
        out.to_str().unwrap(),
    ]));

    let error = result.unwrap_err();
    assert!(format!("{error:#}").contains("missing TOKEN entry"));
    assert!(!out.exists());
}

#[test]
fn test_config_without_token_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"token":"lowercase"}"#).unwrap();
    let out = dir.path().join("data");

    let result = run(&cli(&[
        "--config",
        config_path.to_str().unwrap(),
        "--output_dir",
        out.to_str().unwrap(),
    ]));

    assert!(result.is_err());
    assert!(!out.exists());
}

#[test]
fn test_unusable_output_dir_is_fatal() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let result = run_with_source(
        &cli(&["--output_dir", blocker.to_str().unwrap()]),
        MockSource::with_mock_data(),
    );

    assert!(result.is_err());
}
