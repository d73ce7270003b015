//! Line diffing
//!
//! - `diff_algorithm`: LCS table construction and backtrace
//! - `edit`: the per-element `Equal`/`Add`/`Remove` operation
//! - `edit_script`: ordered edits plus reconstruction and statistics helpers
//! - `hunk`: grouping of changes with surrounding context
//! - `diff_target`: labelled line sets read from files or stdin

pub mod diff_algorithm;
pub mod diff_target;
pub mod edit;
pub mod edit_script;
pub mod hunk;

use diff_algorithm::{DiffAlgorithm, LcsDiff};
use edit_script::EditScript;

/// Computes the edit script turning `a` into `b`.
///
/// Total over all finite inputs; cost is quadratic in the input lengths.
pub fn diff<T: PartialEq + Clone>(a: &[T], b: &[T]) -> EditScript<T> {
    LcsDiff::new(a, b).diff()
}
