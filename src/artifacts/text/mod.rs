//! Text preprocessing shared by the tools
//!
//! - `line_splitter`: turns a block of text into the line sequence fed to the differ

pub mod line_splitter;
