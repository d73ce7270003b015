use crate::common::command::{run_devkit_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["diff", "-", "b.txt"], "  a\n+ b\n  c\n")]
#[case(&["diff", "b.txt", "-"], "  a\n- b\n  c\n")]
fn read_one_side_from_stdin(
    workspace_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("b.txt"),
        "a\nb\nc\n".to_string(),
    ));

    let mut cmd = run_devkit_command(workspace_dir.path(), args);
    cmd.write_stdin("a\nc\n");

    pretty_assertions::assert_eq!(stdout_of(&mut cmd)?, expected_output);

    Ok(())
}

#[rstest]
fn stdin_is_labelled_in_hunk_headers(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("b.txt"),
        "a\nb\n".to_string(),
    ));

    let mut cmd = run_devkit_command(workspace_dir.path(), &["diff", "-u", "-", "b.txt"]);
    cmd.write_stdin("a\n");

    pretty_assertions::assert_eq!(
        stdout_of(&mut cmd)?,
        "--- <stdin>\n+++ b.txt\n@@ -1,1 +1,2 @@\n  a\n+ b\n"
    );

    Ok(())
}
