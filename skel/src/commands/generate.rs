use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};

use super::{UnwrapOrExit, stub_options};
use crate::{
    manifest::{Config, ModelFile},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the declaration model (JSON)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Path to skel.toml (defaults to ./skel.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides skel.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render erased types instead of generics
    #[arg(long)]
    pub no_generics: bool,

    /// Defer declarations whose super class is not resolved
    #[arg(long)]
    pub require_super_resolved: bool,

    /// Preview generated stubs without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let model_file = ModelFile::open(&self.model).unwrap_or_exit();
        tracing::debug!(model = %model_file.path().display(), "generating stubs");

        let mut stubs = stub_options(&config.stubs, self.output.as_deref());
        if self.no_generics {
            stubs = stubs.generics(false);
        }
        if self.require_super_resolved {
            stubs = stubs.require_super_resolved(true);
        }

        let mut model = model_file.into_model();
        let report = ops::generate(
            &mut model,
            ops::generate::GenerateOptions {
                stubs,
                dry_run: self.dry_run,
            },
        );

        report.render(&mut TerminalOutput::new());

        let failures = report.failure_count();
        if failures > 0 {
            bail!("{} stubs could not be written", failures);
        }
        Ok(())
    }
}
