use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trowel_filament::ResourceClassGenerator;
use trowel_manifest::{TrowelToml, run_lints};

use super::UnwrapOrExit;
use crate::{
    ops::{self, make::MakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct MakeCommand {
    /// Path to trowel.toml (defaults to ./trowel.toml)
    #[arg(short, long, default_value = "trowel.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to [generation] output, else next to trowel.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite resource classes that already exist
    #[arg(long)]
    pub force: bool,
}

impl MakeCommand {
    /// Run the make command
    pub fn run(&self) -> Result<()> {
        let trowel_toml = TrowelToml::open(&self.config).unwrap_or_exit();
        let manifest = trowel_toml.manifest();

        let output_dir = self
            .output
            .clone()
            .or_else(|| trowel_toml.output_dir())
            .unwrap_or_else(|| trowel_toml.base_dir().to_path_buf());

        let warnings = run_lints(manifest)
            .into_iter()
            .filter(|d| d.severity.is_warning())
            .map(|d| d.message)
            .collect();

        let generator = ResourceClassGenerator::new(manifest.generation.flags());
        let specs = manifest.to_specs();

        let report = ops::make(
            &generator,
            &specs,
            MakeOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                force: self.force,
            },
        )?
        .with_warnings(warnings);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
