use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::edit_script::EditScript;
use derive_new::new;

pub const DEFAULT_CONTEXT: usize = 3;

/// A run of changes together with up to `context` unchanged lines on each side.
///
/// Offsets are 0-based positions in A and B of the first edit in the hunk.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Hunk<T> {
    a_offset: usize,
    b_offset: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Groups the changes of `script` into hunks, merging hunks whose context overlaps or touches.
    pub fn build(script: &EditScript<T>, context: usize) -> Vec<Hunk<T>> {
        let edits = script.as_ref();

        let mut offsets = Vec::with_capacity(edits.len());
        let (mut a_pos, mut b_pos) = (0, 0);
        for edit in edits {
            offsets.push((a_pos, b_pos));
            match edit {
                Edit::Equal { .. } => {
                    a_pos += 1;
                    b_pos += 1;
                }
                Edit::Add { .. } => b_pos += 1,
                Edit::Remove { .. } => a_pos += 1,
            }
        }

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for (idx, _) in edits.iter().enumerate().filter(|(_, edit)| edit.is_change()) {
            let start = idx.saturating_sub(context);
            let end = (idx + context + 1).min(edits.len());

            match ranges.last_mut() {
                Some(last) if start <= last.1 => last.1 = end,
                _ => ranges.push((start, end)),
            }
        }

        ranges
            .into_iter()
            .map(|(start, end)| {
                let (a_offset, b_offset) = offsets[start];
                Hunk::new(a_offset, b_offset, edits[start..end].to_vec())
            })
            .collect()
    }
}

impl<T> Hunk<T> {
    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn a_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Add { .. }))
            .count()
    }

    pub fn b_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Remove { .. }))
            .count()
    }

    /// 1-based first line in A, or the line before the hunk when it touches no line of A.
    pub fn a_start(&self) -> usize {
        if self.a_size() == 0 {
            self.a_offset
        } else {
            self.a_offset + 1
        }
    }

    pub fn b_start(&self) -> usize {
        if self.b_size() == 0 {
            self.b_offset
        } else {
            self.b_offset + 1
        }
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start(),
            self.a_size(),
            self.b_start(),
            self.b_size()
        )
    }
}
