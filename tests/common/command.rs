use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn full_diff_output() -> String {
    "  fn main() {\n      let s = String::new();\n      std::io::stdin().read_line(&mut s).unwrap();\n-     for i in 0..1000000000 {\n-         println!(\"{}\",  s);\n-     }\n  \n      println!(\"Done\");\n  \n      let tx = std::thread::spawn(move || {\n          for i in 0..10 {\n              println!(\"Thread: {}\", i);\n          }\n      });\n  \n-     tx.join().unwrap();\n+     if let Err(e) = tx.join() {\n+         eprintln!(\"Thread error: {}\", e);\n+     }\n  \n      println!(\"All threads completed\");\n  }\n"
        .to_string()
}

#[fixture]
pub fn diff_hunks_output() -> String {
    "@@ -1,9 +1,6 @@\n  fn main() {\n      let s = String::new();\n      std::io::stdin().read_line(&mut s).unwrap();\n-     for i in 0..1000000000 {\n-         println!(\"{}\",  s);\n-     }\n  \n      println!(\"Done\");\n  \n@@ -13,7 +10,9 @@\n          }\n      });\n  \n-     tx.join().unwrap();\n+     if let Err(e) = tx.join() {\n+         eprintln!(\"Thread error: {}\", e);\n+     }\n  \n      println!(\"All threads completed\");\n  }\n"
        .to_string()
}

#[fixture]
pub fn workspace_dir_with_sources(workspace_dir: TempDir, file_a: String, file_b: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("a.rs"), file_a));
    write_file(FileSpec::new(workspace_dir.path().join("b.rs"), file_b));

    workspace_dir
}

pub fn run_devkit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("devkit").expect("Failed to find devkit binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("DEVKIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}
