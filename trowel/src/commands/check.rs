use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use trowel_manifest::TrowelToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to trowel.toml (defaults to ./trowel.toml)
    #[arg(short, long, default_value = "trowel.toml")]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let trowel_toml = TrowelToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(trowel_toml.manifest(), &self.config);

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
