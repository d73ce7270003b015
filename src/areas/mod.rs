//! Session components
//!
//! - `toolbox`: per-invocation state shared by the commands (output writer, workspace)
//! - `workspace`: resolution and reading of input sources (files or stdin)

pub mod toolbox;
pub mod workspace;
