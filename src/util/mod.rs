//! Shared utilities

pub mod context;
pub mod fs;
pub mod process;
pub mod shell;

pub use context::GlobalContext;
pub use process::{ProcessBuilder, SystemRunner, ToolExit, ToolRunner};
pub use shell::Shell;
