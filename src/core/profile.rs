//! Build profiles.
//!
//! A profile selects the optimization/debug-info policy handed to CMake and
//! names the per-profile build directory under `Build/`.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Optimization and debug-symbol policy for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum BuildProfile {
    /// No optimization, full debug info.
    #[value(name = "Debug")]
    Debug,

    /// Optimized with debug info (`RelWithDebInfo`).
    #[value(name = "Development")]
    Development,

    /// Fully optimized.
    #[default]
    #[value(name = "Release")]
    Release,
}

impl BuildProfile {
    /// All profiles, in declaration order.
    pub const ALL: [BuildProfile; 3] = [
        BuildProfile::Debug,
        BuildProfile::Development,
        BuildProfile::Release,
    ];

    /// The `CMAKE_BUILD_TYPE` this profile maps to.
    pub fn cmake_build_type(&self) -> &'static str {
        match self {
            BuildProfile::Debug => "Debug",
            BuildProfile::Development => "RelWithDebInfo",
            BuildProfile::Release => "Release",
        }
    }

    /// The flag passed to the generator for this profile.
    pub fn generator_flag(&self) -> String {
        format!("-DCMAKE_BUILD_TYPE={}", self.cmake_build_type())
    }

    /// Directory name under `Build/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildProfile::Debug => "Debug",
            BuildProfile::Development => "Development",
            BuildProfile::Release => "Release",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for BuildProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildProfile::Debug),
            "development" => Ok(BuildProfile::Development),
            "release" => Ok(BuildProfile::Release),
            _ => Err(format!(
                "invalid profile '{}'; expected 'Debug', 'Development', or 'Release'",
                s
            )),
        }
    }
}
