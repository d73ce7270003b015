use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A single command invocation: where inputs are resolved from and where output goes.
pub struct Toolbox {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Toolbox {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Toolbox {
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
