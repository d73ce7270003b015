use crate::common::command::{run_devkit_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_missing_input_file(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("present.txt"),
        "content".to_string(),
    ));

    run_devkit_command(workspace_dir.path(), &["diff", "present.txt", "absent.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read file"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[rstest]
fn report_directory_given_as_input(workspace_dir: TempDir) {
    std::fs::create_dir_all(workspace_dir.path().join("dir")).expect("Failed to create dir");
    write_file(FileSpec::new(
        workspace_dir.path().join("present.txt"),
        "content".to_string(),
    ));

    run_devkit_command(workspace_dir.path(), &["diff", "dir", "present.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}
