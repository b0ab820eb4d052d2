use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{UnwrapOrExit, stub_options};
use crate::{
    manifest::{Config, ModelFile},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to the declaration model (JSON)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Path to skel.toml (defaults to ./skel.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides skel.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let model = ModelFile::open(&self.model).unwrap_or_exit().into_model();

        let report = ops::clean(
            &model,
            ops::clean::CleanOptions {
                stubs: stub_options(&config.stubs, self.output.as_deref()),
                dry_run: self.dry_run,
            },
        )
        .wrap_err("Clean failed")?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
