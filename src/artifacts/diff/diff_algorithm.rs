//! Longest-common-subsequence diffing
//!
//! [`LcsDiff`] fills an `(m + 1) x (n + 1)` table where cell `(i, j)` holds the
//! LCS length of `a[..i]` and `b[..j]`, then walks it back from `(m, n)` to
//! `(0, 0)` to recover an [`EditScript`].
//!
//! ## Tie-break
//!
//! When neither shrinking A nor shrinking B loses common length
//! (`table[i][j - 1] >= table[i - 1][j]`), the backtrace emits `Add` first.
//! Since edits are produced last-to-first, this places removals ahead of
//! additions at a replaced position in the final script:
//!
//! ```text
//! diff(["a"], ["b"]) == [Remove("a"), Add("b")]
//! ```
//!
//! The direction is observable in rendered output and is pinned by tests.
//!
//! ## Complexity
//!
//! O(m * n) time and space for the table, O(m + n) for the backtrace. Inputs
//! are expected to be human-edited text; there is no linear-space variant.

use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::edit_script::EditScript;
use derive_new::new;

pub trait DiffAlgorithm<'d, T> {
    type Table;

    fn build_table(&self) -> Self::Table;
    fn backtrack(&self, table: &Self::Table) -> EditScript<T>;

    fn diff(&self) -> EditScript<T> {
        let table = self.build_table();
        self.backtrack(&table)
    }

    fn format_diff(&self) -> String
    where
        T: Clone + Into<String>,
    {
        self.diff()
            .iter()
            .map(|edit| edit.as_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Row-major LCS length table for two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let width = b.len() + 1;
        let mut cells = vec![0; (a.len() + 1) * width];

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * width + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        tracing::trace!(rows = a.len() + 1, columns = width, "built lcs table");

        Self { width, cells }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    pub fn columns(&self) -> usize {
        self.width
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: PartialEq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = LcsTable;

    fn build_table(&self) -> Self::Table {
        LcsTable::build(self.a, self.b)
    }

    fn backtrack(&self, table: &Self::Table) -> EditScript<T> {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut edits = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                edits.push(Edit::Equal {
                    value: self.a[i - 1].clone(),
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                edits.push(Edit::Add {
                    value: self.b[j - 1].clone(),
                });
                j -= 1;
            } else {
                edits.push(Edit::Remove {
                    value: self.a[i - 1].clone(),
                });
                i -= 1;
            }
        }

        let script = EditScript::from_reversed(edits);
        tracing::debug!(
            a_len = self.a.len(),
            b_len = self.b.len(),
            lcs_len = table.lcs_len(),
            edits = script.len(),
            "computed edit script"
        );

        script
    }
}
