//! Console output for build status.
//!
//! All user-facing status goes to stdout through [`Shell`]. Diagnostics
//! meant for debugging go through `tracing` instead.
//!
//! Two kinds of lines are printed:
//! - status lines, `{status:>12} {message}`, for progress ("Generating", "Building");
//!   `--verbose` adds a "Running" line with each tool's command line
//! - outcome lines, printed whole in green or red ("Built.", "Build failed!")

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: failures only
    Quiet,
    /// Default: status and outcome lines
    #[default]
    Normal,
    /// --verbose: also the command line of every tool run
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

/// Status types for progress lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // In-progress statuses (cyan)
    Generating,
    Building,
    Running,

    // Warning statuses (yellow)
    Skipped,
    Warning,

    // Error status (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Generating => "Generating",
            Status::Building => "Building",
            Status::Running => "Running",
            Status::Skipped => "Skipped",
            Status::Warning => "Warning",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            Status::Generating | Status::Building | Status::Running => "\x1b[1;36m",
            Status::Skipped | Status::Warning => "\x1b[1;33m",
            Status::Error => "\x1b[1;31m",
        }
    }

    /// Width for right alignment.
    fn width(&self) -> usize {
        12
    }
}

/// Central shell for all CLI output.
#[derive(Debug, Clone)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from CLI flags. Quiet wins over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    /// A shell that prints nothing but failures, uncolored.
    pub fn quiet() -> Self {
        Shell::new(Verbosity::Quiet, ColorChoice::Never)
    }

    /// Check if shell is in quiet mode.
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Check if shell is in verbose mode.
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Print a status line.
    ///
    /// In quiet mode, only Error status is printed.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() && status != Status::Error {
            return;
        }
        self.print(format!("{} {}", self.format_status(status), msg));
    }

    /// Print a status line in verbose mode only.
    pub fn verbose_status(&self, status: Status, msg: impl Display) {
        if self.is_verbose() {
            self.status(status, msg);
        }
    }

    /// Print a warning line.
    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    /// Print a successful outcome in green. Hidden in quiet mode.
    pub fn success(&self, msg: impl Display) {
        if self.is_quiet() {
            return;
        }
        self.print(self.paint(GREEN, msg));
    }

    /// Print a failed outcome in red. Always shown.
    pub fn failure(&self, msg: impl Display) {
        self.print(self.paint(RED, msg));
    }

    fn print(&self, line: String) {
        let mut stdout = io::stdout().lock();
        // A closed stdout must not abort the build.
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.flush();
    }

    /// Wrap a whole line in a color, if colors are enabled.
    fn paint(&self, color: &str, msg: impl Display) -> String {
        if self.use_color {
            format!("{}{}{}", color, msg, RESET)
        } else {
            msg.to_string()
        }
    }

    /// Format a status prefix with optional color.
    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        let width = status.width();

        if self.use_color {
            let color = status.color_code();
            format!("{}{:>width$}{}", color, text, RESET, width = width)
        } else {
            format!("{:>width$}", text, width = width)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::Normal, ColorChoice::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_values() {
        assert_eq!(ColorChoice::from_str("auto", false).unwrap(), ColorChoice::Auto);
        assert_eq!(ColorChoice::from_str("always", false).unwrap(), ColorChoice::Always);
        assert_eq!(ColorChoice::from_str("never", false).unwrap(), ColorChoice::Never);
        assert!(ColorChoice::from_str("invalid", false).is_err());
    }

    #[test]
    fn test_from_flags() {
        let shell = Shell::from_flags(false, false, ColorChoice::Never);
        assert!(!shell.is_quiet());
        assert!(!shell.is_verbose());

        let shell = Shell::from_flags(true, false, ColorChoice::Never);
        assert!(shell.is_quiet());

        let shell = Shell::from_flags(false, true, ColorChoice::Never);
        assert!(shell.is_verbose());

        // Quiet takes precedence
        let shell = Shell::from_flags(true, true, ColorChoice::Never);
        assert!(shell.is_quiet());
    }

    #[test]
    fn test_status_formatting() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Never);

        let formatted = shell.format_status(Status::Building);
        assert_eq!(formatted.trim(), "Building");
        assert_eq!(formatted.len(), 12);
    }

    #[test]
    fn test_paint() {
        let plain = Shell::new(Verbosity::Normal, ColorChoice::Never);
        assert_eq!(plain.paint(GREEN, "Built."), "Built.");

        let colored = Shell::new(Verbosity::Normal, ColorChoice::Always);
        assert_eq!(colored.paint(RED, "Build failed!"), "\x1b[91mBuild failed!\x1b[0m");
        assert!(colored.format_status(Status::Generating).starts_with("\x1b[1;36m"));
    }
}
