//! Test utilities and mocks for wave-build unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use wave_build::test_support::MockRunner;
//!
//! #[test]
//! fn test_example() {
//!     let mut runner = MockRunner::new();
//!     runner.expect_prefix("cmake -G Ninja", 1);
//!
//!     // Hand the runner to the orchestrator...
//! }
//! ```

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use crate::util::process::{ProcessBuilder, ToolExit, ToolRunner};

/// Pattern for matching commands in MockRunner.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match if command contains substring.
    Contains(String),
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::Contains(s) => cmd.contains(s),
        }
    }
}

/// Scripted result for a matching command.
#[derive(Debug, Clone, Copy)]
pub enum MockOutcome {
    /// The tool ran and exited with this code.
    Exit(i32),
    /// The tool could not be spawned.
    SpawnError,
}

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Program and arguments joined by spaces, program as its file name.
    pub command: String,
    /// Arguments only, rendered lossily.
    pub args: Vec<String>,
    /// Working directory the tool was started in.
    pub cwd: Option<PathBuf>,
}

/// Mock runner that records calls and returns scripted outcomes.
///
/// Expectations are consumed in order of registration; the first one whose
/// pattern matches is used once. Unmatched commands exit with 0.
#[derive(Debug, Default)]
pub struct MockRunner {
    expectations: VecDeque<(CommandPattern, MockOutcome)>,
    calls: Vec<RecordedCall>,
}

impl MockRunner {
    /// Create a mock runner where every command succeeds.
    pub fn new() -> Self {
        MockRunner::default()
    }

    /// Next command starting with `prefix` exits with `code`.
    pub fn expect_prefix(&mut self, prefix: &str, code: i32) -> &mut Self {
        self.expectations.push_back((
            CommandPattern::StartsWith(prefix.to_string()),
            MockOutcome::Exit(code),
        ));
        self
    }

    /// Next command containing `substring` gets `outcome`.
    pub fn expect_contains(&mut self, substring: &str, outcome: MockOutcome) -> &mut Self {
        self.expectations.push_back((
            CommandPattern::Contains(substring.to_string()),
            outcome,
        ));
        self
    }

    /// All commands that were run.
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Number of recorded calls whose command contains `substring`.
    pub fn count_containing(&self, substring: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| c.command.contains(substring))
            .count()
    }
}

impl ToolRunner for MockRunner {
    fn run(&mut self, cmd: &ProcessBuilder) -> io::Result<ToolExit> {
        let program = cmd
            .get_program()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut command = program;
        let args: Vec<String> = cmd
            .get_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        for arg in &args {
            command.push(' ');
            command.push_str(arg);
        }

        self.calls.push(RecordedCall {
            command: command.clone(),
            args,
            cwd: cmd.get_cwd().map(|p| p.to_path_buf()),
        });

        let position = self
            .expectations
            .iter()
            .position(|(pattern, _)| pattern.matches(&command));

        let outcome = position
            .and_then(|i| self.expectations.remove(i))
            .map(|(_, outcome)| outcome)
            .unwrap_or(MockOutcome::Exit(0));

        match outcome {
            MockOutcome::Exit(code) => Ok(ToolExit::code(code)),
            MockOutcome::SpawnError => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock: cannot spawn `{}`", command),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_records_and_scripts() {
        let mut runner = MockRunner::new();
        runner.expect_prefix("cmake --build", 2);

        let exit = runner
            .run(&ProcessBuilder::new("/usr/bin/cmake").args(["--build", "."]).cwd("/b"))
            .unwrap();
        assert_eq!(exit.code, Some(2));

        // Expectation consumed; next call defaults to success
        let exit = runner
            .run(&ProcessBuilder::new("/usr/bin/cmake").args(["--build", "."]))
            .unwrap();
        assert!(exit.success());

        assert_eq!(runner.calls().len(), 2);
        assert_eq!(runner.calls()[0].command, "cmake --build .");
        assert_eq!(runner.calls()[0].cwd, Some(PathBuf::from("/b")));
        assert_eq!(runner.count_containing("--build"), 2);
    }

    #[test]
    fn test_mock_runner_spawn_error() {
        let mut runner = MockRunner::new();
        runner.expect_contains("Ninja", MockOutcome::SpawnError);

        assert!(runner
            .run(&ProcessBuilder::new("cmake").args(["-G", "Ninja"]))
            .is_err());
    }
}
