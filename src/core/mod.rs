//! Core data structures.
//!
//! - Build profiles and the flags they map to
//! - Resolved generator options
//! - Build directory layout

pub mod layout;
pub mod options;
pub mod profile;

pub use layout::{BuildLayout, BUILD_DIR_NAME, SOURCE_ROOT_FROM_BUILD_DIR};
pub use options::{BuildOptions, SUBMODULE_OFF_FLAG};
pub use profile::BuildProfile;
