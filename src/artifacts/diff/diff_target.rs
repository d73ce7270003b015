use crate::areas::workspace::{InputSource, Workspace};
use crate::artifacts::text::line_splitter::{LINE_BREAK, split_lines, strip_final_newline};
use derive_new::new;

pub type LineSet = Vec<String>;

/// A line as compared against the other side of a diff.
///
/// `terminated` is false only for the last line of a side that lacks a final
/// line break while the other side has one, so that line never compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Line<'t> {
    pub text: &'t str,
    pub terminated: bool,
}

impl From<Line<'_>> for String {
    fn from(line: Line<'_>) -> Self {
        line.text.to_string()
    }
}

/// One side of a diff: a label for headers and the lines being compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget {
    pub(crate) label: String,
    pub(crate) data: LineSet,
    pub(crate) newline_at_eof: bool,
}

impl DiffTarget {
    /// Splits `text` exactly, so empty text is a single empty line.
    pub fn from_text(label: impl Into<String>, text: &str) -> Self {
        Self {
            label: label.into(),
            data: split_lines(text),
            newline_at_eof: false,
        }
    }

    /// Like [`DiffTarget::from_text`], but a single trailing line break is
    /// recorded on the target instead of becoming an empty last line.
    pub fn from_content(label: impl Into<String>, content: &str) -> Self {
        Self {
            newline_at_eof: content.ends_with(LINE_BREAK),
            ..Self::from_text(label, strip_final_newline(content))
        }
    }

    pub fn from_source(
        source: &InputSource,
        label: Option<&str>,
        workspace: &Workspace,
    ) -> anyhow::Result<Self> {
        let content = workspace.read_source(source)?;
        let label = label.map_or_else(|| source.to_string(), str::to_string);

        Ok(Self::from_content(label, &content))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lines(&self) -> &[String] {
        &self.data
    }

    pub fn newline_at_eof(&self) -> bool {
        self.newline_at_eof
    }

    /// The lines of this side, keyed for comparison with `other`.
    pub fn lines_against(&self, other: &DiffTarget) -> Vec<Line<'_>> {
        let unterminated_tail = !self.newline_at_eof && other.newline_at_eof;
        let last = self.data.len().saturating_sub(1);

        self.data
            .iter()
            .enumerate()
            .map(|(idx, text)| Line::new(text, idx < last || !unterminated_tail))
            .collect()
    }
}
