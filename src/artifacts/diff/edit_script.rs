use crate::artifacts::diff::edit::Edit;
use derive_new::new;
use std::fmt::Display;

/// Counts of each operation kind in an [`EditScript`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStats {
    pub equal: usize,
    pub added: usize,
    pub removed: usize,
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} addition{}(+), {} removal{}(-)",
            self.added,
            plural(self.added),
            self.removed,
            plural(self.removed)
        )
    }
}

/// Ordered edits in forward document order.
///
/// `Remove` and `Equal` edits follow the order of sequence A, `Add` and `Equal`
/// edits follow the order of sequence B, so the script is a single monotonic
/// walk through both inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    edits: Vec<Edit<T>>,
}

impl<T> EditScript<T> {
    /// Builds a script from edits collected during a backtrace, i.e. last edit first.
    pub fn from_reversed(mut edits: Vec<Edit<T>>) -> Self {
        edits.reverse();
        Self { edits }
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit<T>> {
        self.edits.iter()
    }

    pub fn into_inner(self) -> Vec<Edit<T>> {
        self.edits
    }

    pub fn has_changes(&self) -> bool {
        self.edits.iter().any(Edit::is_change)
    }

    pub fn stats(&self) -> DiffStats {
        self.edits
            .iter()
            .fold(DiffStats::default(), |mut stats, edit| {
                match edit {
                    Edit::Equal { .. } => stats.equal += 1,
                    Edit::Add { .. } => stats.added += 1,
                    Edit::Remove { .. } => stats.removed += 1,
                }
                stats
            })
    }

    /// The script for the B -> A direction. Element order is unchanged.
    pub fn inverse(self) -> Self {
        Self {
            edits: self.edits.into_iter().map(Edit::inverse).collect(),
        }
    }
}

impl<T: Clone> EditScript<T> {
    /// Elements of sequence A, recovered from `Equal` and `Remove` edits.
    pub fn source(&self) -> Vec<T> {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Add { .. }))
            .map(|edit| edit.value().clone())
            .collect()
    }

    /// Elements of sequence B, recovered from `Equal` and `Add` edits.
    pub fn target(&self) -> Vec<T> {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Remove { .. }))
            .map(|edit| edit.value().clone())
            .collect()
    }
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self { edits: Vec::new() }
    }
}

impl<T> From<Vec<Edit<T>>> for EditScript<T> {
    fn from(edits: Vec<Edit<T>>) -> Self {
        Self { edits }
    }
}

impl<T> AsRef<[Edit<T>]> for EditScript<T> {
    fn as_ref(&self) -> &[Edit<T>] {
        &self.edits
    }
}

impl<'s, T> IntoIterator for &'s EditScript<T> {
    type Item = &'s Edit<T>;
    type IntoIter = std::slice::Iter<'s, Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}
