//! Implementation of the configure-then-build flow.
//!
//! A run goes through three phases:
//!
//! 1. Prepare `Build/<Profile>`. A fresh directory needs generation; an
//!    existing one is assumed to be configured already.
//! 2. Generate: `cmake -G Ninja <flags> ../..` inside the build directory.
//!    On failure the directory is deleted so no half-configured tree is
//!    left behind, and the run stops.
//! 3. Build: `cmake --build .` inside the build directory. On failure the
//!    directory is kept for inspection.
//!
//! Every tool gets its working directory explicitly; the process-wide
//! current directory is never changed.

use std::path::{Path, PathBuf};

use crate::core::{BuildLayout, BuildOptions, SOURCE_ROOT_FROM_BUILD_DIR};
use crate::ops::errors::{DirError, WaveBuildError};
use crate::util::fs::{create_dir_all_new, remove_dir_all_if_exists};
use crate::util::process::{ProcessBuilder, ToolRunner};
use crate::util::shell::{Shell, Status};

/// Generator used for the build files.
pub const GENERATOR: &str = "Ninja";

/// State of the build directory after preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// Newly created; needs generation.
    Created,
    /// Was already present; assumed configured.
    AlreadyExists,
}

/// What to do when the build directory can't be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirErrorPolicy {
    /// Skip generation and try to build in it anyway.
    #[default]
    AssumeConfigured,
    /// Stop with [`WaveBuildError::BuildDir`].
    Abort,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Directory the build ran in.
    pub build_dir: PathBuf,
    /// Whether build files were generated during this run.
    pub generated: bool,
}

/// Create the build directory if needed.
pub fn prepare_build_dir(path: &Path) -> Result<DirState, DirError> {
    match create_dir_all_new(path) {
        Ok(true) => Ok(DirState::Created),
        Ok(false) => Ok(DirState::AlreadyExists),
        Err(source) => Err(DirError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// `cmake -G Ninja <flags> ../..`, run from `build_dir`.
pub fn generate_command(cmake: &Path, build_dir: &Path, opts: &BuildOptions) -> ProcessBuilder {
    ProcessBuilder::new(cmake)
        .arg("-G")
        .arg(GENERATOR)
        .args(opts.flags())
        .arg(SOURCE_ROOT_FROM_BUILD_DIR)
        .cwd(build_dir)
}

/// `cmake --build .`, run from `build_dir`.
pub fn build_command(cmake: &Path, build_dir: &Path) -> ProcessBuilder {
    ProcessBuilder::new(cmake)
        .arg("--build")
        .arg(".")
        .cwd(build_dir)
}

/// Drives generation and build for one profile.
pub struct Orchestrator<R> {
    runner: R,
    shell: Shell,
    cmake: PathBuf,
    dir_error_policy: DirErrorPolicy,
}

impl<R: ToolRunner> Orchestrator<R> {
    /// Create an orchestrator that runs `cmake` through `runner`.
    pub fn new(runner: R, cmake: impl Into<PathBuf>, shell: Shell) -> Self {
        Orchestrator {
            runner,
            shell,
            cmake: cmake.into(),
            dir_error_policy: DirErrorPolicy::default(),
        }
    }

    /// Set the policy for build directories that can't be created.
    pub fn dir_error_policy(mut self, policy: DirErrorPolicy) -> Self {
        self.dir_error_policy = policy;
        self
    }

    /// The runner, for inspecting what was run.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Prepare, generate if needed, then build.
    pub fn run(
        &mut self,
        layout: &BuildLayout,
        opts: &BuildOptions,
    ) -> Result<BuildReport, WaveBuildError> {
        let build_dir = layout.build_dir(opts.profile);
        tracing::debug!("Build directory: {}", build_dir.display());

        let generated = match prepare_build_dir(&build_dir) {
            Ok(DirState::Created) => {
                self.generate(&build_dir, opts)?;
                true
            }
            Ok(DirState::AlreadyExists) => {
                self.shell.status(
                    Status::Skipped,
                    format!("generation, {} already exists", build_dir.display()),
                );
                false
            }
            Err(err) => match self.dir_error_policy {
                DirErrorPolicy::AssumeConfigured => {
                    tracing::warn!(
                        "{}: {}; assuming it is already configured",
                        err,
                        err.source
                    );
                    false
                }
                DirErrorPolicy::Abort => return Err(err.into()),
            },
        };

        self.compile(&build_dir)?;

        Ok(BuildReport {
            build_dir,
            generated,
        })
    }

    /// Generate build files in `build_dir`, deleting it on failure.
    pub fn generate(&mut self, build_dir: &Path, opts: &BuildOptions) -> Result<(), WaveBuildError> {
        self.shell.status(
            Status::Generating,
            format!("{} build files ({})", GENERATOR, opts.profile),
        );

        let cmd = generate_command(&self.cmake, build_dir, opts);
        self.shell
            .verbose_status(Status::Running, format!("`{}`", cmd.display_command()));
        let exit = match self.runner.run(&cmd) {
            Ok(exit) => exit,
            Err(source) => {
                self.shell.failure("Failed to generate files!");
                self.discard(build_dir);
                return Err(WaveBuildError::Spawn {
                    program: cmd.get_program().display().to_string(),
                    source,
                });
            }
        };

        if !exit.success() {
            self.shell.failure("Failed to generate files!");
            self.discard(build_dir);
            return Err(WaveBuildError::Generation {
                dir: build_dir.to_path_buf(),
                code: exit.code,
            });
        }

        self.shell.success("Generated files.");
        Ok(())
    }

    /// Build in `build_dir`. The directory is left alone on failure.
    pub fn compile(&mut self, build_dir: &Path) -> Result<(), WaveBuildError> {
        self.shell
            .status(Status::Building, build_dir.display().to_string());

        let cmd = build_command(&self.cmake, build_dir);
        self.shell
            .verbose_status(Status::Running, format!("`{}`", cmd.display_command()));
        let exit = match self.runner.run(&cmd) {
            Ok(exit) => exit,
            Err(source) => {
                self.shell.failure("Build failed!");
                return Err(WaveBuildError::Spawn {
                    program: cmd.get_program().display().to_string(),
                    source,
                });
            }
        };

        if !exit.success() {
            self.shell.failure("Build failed!");
            return Err(WaveBuildError::Build {
                dir: build_dir.to_path_buf(),
                code: exit.code,
            });
        }

        self.shell.success("Built.");
        Ok(())
    }

    /// Remove a partially generated build directory.
    fn discard(&self, build_dir: &Path) {
        tracing::debug!("Removing {}", build_dir.display());
        if let Err(e) = remove_dir_all_if_exists(build_dir) {
            tracing::warn!("failed to remove {}: {}", build_dir.display(), e);
            self.shell.warn(format!(
                "could not remove {}, delete it before retrying",
                build_dir.display()
            ));
        }
    }
}
