//! wave-build CLI - configure and build the Wave compiler

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use wave_build::core::BuildOptions;
use wave_build::ops::Orchestrator;
use wave_build::util::{GlobalContext, Shell, SystemRunner};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse_args();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("wave_build=debug")
    } else {
        EnvFilter::new("wave_build=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);
    let opts = BuildOptions::resolve(cli.conf, !cli.nosubmodule);
    tracing::debug!("Generator flags: {}", opts.flags().join(" "));

    let ctx = GlobalContext::new()?;
    let cmake = ctx.cmake()?;

    let mut orchestrator = Orchestrator::new(SystemRunner, cmake, shell);
    orchestrator.run(&ctx.layout(), &opts)?;

    Ok(())
}
