//! On-disk layout of build directories.

use std::path::{Path, PathBuf};

use crate::core::profile::BuildProfile;

/// Name of the directory holding all per-profile build trees.
pub const BUILD_DIR_NAME: &str = "Build";

/// Source root as seen from inside a build directory (`Build/<Profile>`).
pub const SOURCE_ROOT_FROM_BUILD_DIR: &str = "../..";

/// Build directory layout rooted at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    root: PathBuf,
}

impl BuildLayout {
    /// Create a layout for the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        BuildLayout { root: root.into() }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Build`
    pub fn build_root(&self) -> PathBuf {
        self.root.join(BUILD_DIR_NAME)
    }

    /// `<root>/Build/<Profile>`
    pub fn build_dir(&self, profile: BuildProfile) -> PathBuf {
        self.build_root().join(profile.dir_name())
    }
}
