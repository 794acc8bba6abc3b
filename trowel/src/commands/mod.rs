mod check;
mod completions;
mod make;
mod resource;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use make::MakeCommand;
use resource::ResourceCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for trowel_manifest::Result<T> {
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

#[derive(Parser)]
#[command(name = "trowel")]
#[command(version)]
#[command(about = "Generate Filament resource classes")]
pub(crate) struct Cli {
    /// Show debug logs (-vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Make(cmd) => cmd.run(),
            Commands::Resource(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every resource declared in trowel.toml
    Make(MakeCommand),

    /// Generate a single resource for a model
    Resource(ResourceCommand),

    /// Validate trowel.toml without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["trowel", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
