//! Data structures and algorithms behind the tools
//!
//! - `core`: shared terminal utilities (pager wrapper)
//! - `diff`: LCS line diffing, edit scripts and hunks
//! - `text`: text preprocessing (line splitting)

pub mod core;
pub mod diff;
pub mod text;
