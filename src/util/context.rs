//! Global context for wave-build operations.
//!
//! Provides access to the project root and the external tools.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::BuildLayout;
use crate::util::process::find_cmake;

/// Top-level CMake script that marks the project root.
pub const ROOT_MARKER: &str = "CMakeLists.txt";

/// Global context.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Directory the tool was started from.
    cwd: PathBuf,
    /// Project root; build directories live under `<root>/Build`.
    root: PathBuf,
}

impl GlobalContext {
    /// Create a context for the project containing the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        GlobalContext::discover(cwd)
    }

    /// Create a context for the project containing `cwd`.
    ///
    /// The root is the highest ancestor of `cwd` (inclusive) holding a
    /// `CMakeLists.txt`, so runs from any subdirectory share one
    /// `Build/` tree.
    pub fn discover(cwd: impl Into<PathBuf>) -> Result<Self> {
        let cwd = cwd.into();
        let Some(root) = find_project_root(&cwd) else {
            bail!(
                "could not find `{}` in `{}` or any parent directory\n\
                 \n\
                 Run wave-build from inside the Wave source tree.",
                ROOT_MARKER,
                cwd.display()
            );
        };
        tracing::debug!("Project root: {}", root.display());
        Ok(GlobalContext { cwd, root })
    }

    /// Directory the tool was started from.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build directory layout for this project.
    pub fn layout(&self) -> BuildLayout {
        BuildLayout::new(&self.root)
    }

    /// Locate CMake, which acts as both generator and build driver.
    pub fn cmake(&self) -> Result<PathBuf> {
        match find_cmake() {
            Some(path) => {
                tracing::debug!("Using CMake at {}", path.display());
                Ok(path)
            }
            None => bail!(
                "CMake not found\n\
                 \n\
                 CMake and Ninja are required to build the compiler.\n\
                 Install both and ensure they're in your PATH."
            ),
        }
    }
}

/// Search `start` and its ancestors for `CMakeLists.txt`, returning the
/// highest directory that has one.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut found = None;
    let mut current = start.to_path_buf();
    loop {
        if current.join(ROOT_MARKER).is_file() {
            found = Some(current.clone());
        }
        if !current.pop() {
            return found;
        }
    }
}
