use anyhow::Context;
use std::fmt::Display;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN_MARKER: &str = "-";
pub const STDIN_LABEL: &str = "<stdin>";

/// Where one side of a comparison is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "{STDIN_LABEL}"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn read_source(&self, source: &InputSource) -> anyhow::Result<String> {
        match source {
            InputSource::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read from stdin")?;

                Ok(content)
            }
            InputSource::File(file_path) => self.read_file(file_path),
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let full_path = self.path.join(file_path);

        if full_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))
    }
}
