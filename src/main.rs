//! snapdeps - SNAPSHOT sibling dependency resolver CLI tool
//!
//! Reads the root project's descriptor, then resolves every sibling project
//! referenced through a snapshot property, locally or from its repository.

use clap::Parser;
use snapdeps::cli::CliArgs;
use snapdeps::descriptor::read_descriptor_file;
use snapdeps::error::ResolveError;
use snapdeps::orchestrator::{Resolver, ResolverConfig};
use snapdeps::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("snapdeps v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
        eprintln!("Timeout: {:?}", args.timeout);
    }

    let descriptor_path = args.descriptor_path();
    if !descriptor_path.is_file() {
        return Err(ResolveError::root_not_found(&descriptor_path).into());
    }
    let root = read_descriptor_file(&descriptor_path)?;

    let resolver = Resolver::new(ResolverConfig {
        timeout: args.timeout,
        show_progress: args.show_progress(),
    })?;
    let report = resolver.resolve(&root, &args.path).await?;

    if args.verbose {
        eprintln!("Resolved {} sibling(s)", report.registry.len());
    }

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
