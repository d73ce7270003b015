use crate::areas::toolbox::Toolbox;
use crate::areas::workspace::InputSource;
use crate::artifacts::diff::diff;
use crate::artifacts::diff::diff_target::{DiffTarget, Line};
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::edit_script::EditScript;
use crate::artifacts::diff::hunk::Hunk;
use colored::Colorize;
use derive_new::new;

pub const NO_DIFFERENCES: &str = "No differences";
pub const NO_NEWLINE_AT_EOF: &str = "\\ No newline at end of file";

#[derive(Debug, Clone, Default, new)]
pub struct DiffOptions {
    /// Show only hunks with this many context lines instead of the full script.
    pub context: Option<usize>,
    pub stat: bool,
    pub reverse: bool,
    /// Labels name the files, so under `reverse` `label_a` heads the `+++` side.
    pub label_a: Option<String>,
    pub label_b: Option<String>,
}

impl Toolbox {
    pub fn diff(
        &self,
        original: &InputSource,
        modified: &InputSource,
        opts: &DiffOptions,
    ) -> anyhow::Result<()> {
        if original.is_stdin() && modified.is_stdin() {
            anyhow::bail!("Only one side of the diff can be read from stdin");
        }

        let a = DiffTarget::from_source(original, opts.label_a.as_deref(), self.workspace())?;
        let b = DiffTarget::from_source(modified, opts.label_b.as_deref(), self.workspace())?;

        if opts.reverse {
            self.diff_targets(&b, &a, opts)
        } else {
            self.diff_targets(&a, &b, opts)
        }
    }

    pub fn diff_targets(
        &self,
        a: &DiffTarget,
        b: &DiffTarget,
        opts: &DiffOptions,
    ) -> anyhow::Result<()> {
        let script = diff(&a.lines_against(b), &b.lines_against(a));

        if !script.has_changes() {
            writeln!(self.writer(), "{NO_DIFFERENCES}")?;
        } else {
            match opts.context {
                Some(context) => self.print_hunks(a, b, &script, context)?,
                None => self.print_script(&script)?,
            }
        }

        if opts.stat {
            writeln!(self.writer(), "{}", script.stats())?;
        }

        Ok(())
    }

    fn print_script(&self, script: &EditScript<Line<'_>>) -> anyhow::Result<()> {
        for edit in script {
            self.print_edit(edit)?;
        }

        Ok(())
    }

    fn print_hunks(
        &self,
        a: &DiffTarget,
        b: &DiffTarget,
        script: &EditScript<Line<'_>>,
        context: usize,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("--- {}", a.label()).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", b.label()).bold())?;

        for hunk in Hunk::build(script, context) {
            writeln!(self.writer(), "{}", hunk.header().cyan())?;
            for edit in hunk.edits() {
                self.print_edit(edit)?;
            }
        }

        Ok(())
    }

    fn print_edit(&self, edit: &Edit<Line<'_>>) -> anyhow::Result<()> {
        let line = edit.as_string();
        match edit {
            Edit::Add { .. } => writeln!(self.writer(), "{}", line.green())?,
            Edit::Remove { .. } => writeln!(self.writer(), "{}", line.red())?,
            Edit::Equal { .. } => writeln!(self.writer(), "{line}")?,
        }

        if !edit.value().terminated {
            writeln!(self.writer(), "{NO_NEWLINE_AT_EOF}")?;
        }

        Ok(())
    }
}
