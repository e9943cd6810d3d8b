//! High-level operations.

pub mod errors;
pub mod wave_build;

pub use errors::{DirError, WaveBuildError};
pub use wave_build::{
    build_command, generate_command, prepare_build_dir, BuildReport, DirErrorPolicy, DirState,
    Orchestrator,
};
