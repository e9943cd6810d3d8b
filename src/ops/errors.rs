//! Error types for the build orchestration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The build directory could not be created, for a reason other than
/// already existing.
#[derive(Debug, Error)]
#[error("failed to create build directory `{}`", .path.display())]
pub struct DirError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Error from a `wave-build` run.
#[derive(Debug, Error)]
pub enum WaveBuildError {
    #[error(transparent)]
    BuildDir(#[from] DirError),

    #[error("failed to generate build files in `{}` ({})", .dir.display(), describe_exit(.code))]
    Generation { dir: PathBuf, code: Option<i32> },

    #[error("build failed in `{}` ({})", .dir.display(), describe_exit(.code))]
    Build { dir: PathBuf, code: Option<i32> },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
