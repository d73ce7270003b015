use crate::common::command::{
    full_diff_output, run_devkit_command, stdout_of, workspace_dir_with_sources,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_full_script_for_modified_file(
    workspace_dir_with_sources: TempDir,
    full_diff_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_devkit_command(
        workspace_dir_with_sources.path(),
        &["diff", "a.rs", "b.rs"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, full_diff_output);

    Ok(())
}
