//! Generator options derived from the command line.

use crate::core::profile::BuildProfile;

/// Flag that stops the project's CMake scripts from updating submodules.
pub const SUBMODULE_OFF_FLAG: &str = "-DSUBMODULE=OFF";

/// Resolved options for one invocation.
///
/// Built fresh from the selected profile and the submodule preference;
/// nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Selected profile.
    pub profile: BuildProfile,

    /// Whether submodules are updated during generation.
    pub update_submodules: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions::resolve(BuildProfile::default(), true)
    }
}

impl BuildOptions {
    /// Resolve options from a profile and the submodule-update toggle.
    pub fn resolve(profile: BuildProfile, update_submodules: bool) -> Self {
        BuildOptions {
            profile,
            update_submodules,
        }
    }

    /// Generator flags, in order: profile flag, then the submodule flag if
    /// updates are disabled.
    pub fn flags(&self) -> Vec<String> {
        let mut flags = vec![self.profile.generator_flag()];
        if !self.update_submodules {
            flags.push(SUBMODULE_OFF_FLAG.to_string());
        }
        flags
    }
}
