mod audio;
mod chapters;
mod cli;
mod commands;
mod config;
mod manifest;
mod probe;
mod safety;
mod storage;
mod tag;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let sox = cli.sox.as_deref();

    match cli.command {
        Commands::Build {
            manifest,
            output,
            sequential,
        } => {
            commands::build::run(&manifest, output.as_deref(), sequential, sox, cli.quiet)?;
        }
        Commands::Plan {
            manifest,
            json,
            sequential,
        } => {
            commands::plan::run(&manifest, json, sequential, sox, cli.quiet)?;
        }
        Commands::Tag {
            manifest,
            file,
            no_dry_run,
            no_backup,
            sequential,
        } => {
            commands::tag::run(&manifest, &file, no_dry_run, no_backup, sequential, sox)?;
        }
        Commands::Probe { files, json } => {
            commands::probe::run(&files, json, sox)?;
        }
        Commands::Show { file, json } => {
            commands::show::run(&file, json, cli.quiet)?;
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG wins over the verbosity flags
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "podchap=debug,info"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
