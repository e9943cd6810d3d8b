//! wave-build - configure and build the Wave compiler
//!
//! Prepares an out-of-source build directory per profile, generates Ninja
//! build files with CMake, then runs the build.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{BuildLayout, BuildOptions, BuildProfile};
pub use ops::{BuildReport, Orchestrator, WaveBuildError};
pub use util::context::GlobalContext;
