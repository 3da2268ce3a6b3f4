use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use itopforge_core::Escaping;
use itopforge_model::DefinitionFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to class.toml (defaults to ./class.toml)
    #[arg(short, long, default_value = "class.toml")]
    pub config: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long, requires = "output")]
    pub force: bool,

    /// Embed values without escaping markup characters
    #[arg(long)]
    pub verbatim: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = DefinitionFile::open(&self.config).unwrap_or_exit();

        let escaping = if self.verbatim {
            Escaping::Verbatim
        } else {
            Escaping::Markup
        };
        let opts = GenerateOptions {
            output: self.output.as_deref(),
            force: self.force,
            escaping,
        };

        let report = ops::generate(file.definition(), opts)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
