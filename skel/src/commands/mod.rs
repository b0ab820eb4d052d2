mod clean;
mod generate;

use std::path::Path;

use clap::{Parser, Subcommand};
use clean::CleanCommand;
use eyre::Result;
use generate::GenerateCommand;
use skelgen_codegen_java::StubOptions;

use crate::{logging, manifest::StubsConfig};

/// Extension trait for exiting on input file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Stub options from skel.toml, with `--output` taking precedence.
fn stub_options(config: &StubsConfig, output: Option<&Path>) -> StubOptions {
    StubOptions::new(output.unwrap_or(config.output.as_path()))
        .generics(config.generics)
        .require_super_resolved(config.require_super_resolved)
}

#[derive(Parser)]
#[command(name = "skel")]
#[command(version)]
#[command(about = "Generate Java stub skeletons for joint compilation")]
pub(crate) struct Cli {
    /// Log filter for diagnostics on stderr, e.g. `debug`
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.log.as_deref());

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java stubs from a declaration model
    Generate(GenerateCommand),

    /// Remove the stubs a declaration model generates
    Clean(CleanCommand),
}
