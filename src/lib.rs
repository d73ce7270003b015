//! Stateless developer utilities for the terminal, starting with a line-based LCS diff.

pub mod areas;
pub mod artifacts;
pub mod commands;

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}
