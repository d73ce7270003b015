//! Command implementations
//!
//! Each command is an `impl Toolbox` block that reads its inputs through the
//! workspace and renders into the toolbox writer.
//!
//! - `diff`: line diff of two texts

pub mod diff;
