mod analyze;
mod check;
mod completions;
mod generate;

use analyze::AnalyzeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
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
#[command(name = "forge")]
#[command(version)]
#[command(about = "Generate and inspect iTop datamodel documents")]
pub(crate) struct Cli {
    /// Log debug details to stderr (overrides FORGE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Analyze(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a datamodel document from class.toml
    Generate(GenerateCommand),

    /// Lint class.toml without generating a document
    Check(CheckCommand),

    /// Summarize an extension bundle (.zip)
    Analyze(AnalyzeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["forge", "check", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "forge", "generate", "-c", "rack.toml", "-o", "out.xml", "--force", "--verbatim",
        ])
        .unwrap();

        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.config.to_str(), Some("rack.toml"));
        assert_eq!(cmd.output.as_deref().and_then(|p| p.to_str()), Some("out.xml"));
        assert!(cmd.force);
        assert!(cmd.verbatim);
    }

    #[test]
    fn test_analyze_requires_bundle() {
        assert!(Cli::try_parse_from(["forge", "analyze"]).is_err());

        let cli = Cli::try_parse_from(["forge", "analyze", "ext.zip", "--json"]).unwrap();
        let Commands::Analyze(cmd) = cli.command else {
            panic!("expected analyze");
        };
        assert!(cmd.json);
    }
}
