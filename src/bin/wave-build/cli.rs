//! CLI definitions using clap.

use std::ffi::OsString;

use clap::Parser;

use wave_build::core::BuildProfile;
use wave_build::util::shell::ColorChoice;

/// Generate Ninja build files for Wave, and build the compiler.
#[derive(Parser, Debug)]
#[command(name = "wave-build")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "If you wish to invoke CMake directly, go to the README.")]
pub struct Cli {
    /// Configuration to build, directly corresponds to Debug, RelWithDebInfo, and Release.
    #[arg(short = 'c', long = "conf", value_enum, default_value_t = BuildProfile::Release)]
    pub conf: BuildProfile,

    /// Disable updating submodules, only turn off if you have made changes to them.
    #[arg(long = "nosubmodule", visible_alias = "nosub")]
    pub nosubmodule: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print failures
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash `-nosub`.
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-nosub` to `--nosub`.
///
/// clap only supports single-character short flags, so the traditional
/// spelling would otherwise parse as `-n -o -s -u -b`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if !passthrough && arg == "--" {
            passthrough = true;
        } else if !passthrough && arg == "-nosub" {
            out.push(OsString::from("--nosub"));
            continue;
        }
        out.push(arg);
    }
    out
}
