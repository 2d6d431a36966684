pub mod completions;
pub mod config;
pub mod content;
pub mod init;
pub mod preview;
pub mod render;
pub mod scroll;
