use crate::common::command::{file_a, run_devkit_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&[])]
#[case(&["-u"])]
fn show_no_differences_for_identical_files(
    workspace_dir: TempDir,
    file_a: String,
    #[case] flags: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("1.rs"), file_a.clone()));
    write_file(FileSpec::new(
        workspace_dir.path().join("nested").join("2.rs"),
        file_a,
    ));

    let mut args = vec!["diff"];
    args.extend_from_slice(flags);
    args.extend(["1.rs", "nested/2.rs"]);

    let actual_output = stdout_of(&mut run_devkit_command(workspace_dir.path(), &args))?;

    pretty_assertions::assert_eq!(actual_output, "No differences\n");

    Ok(())
}
