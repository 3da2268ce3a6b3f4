use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use itopforge_model::DefinitionFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to class.toml (defaults to ./class.toml)
    #[arg(short, long, default_value = "class.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = DefinitionFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(file.definition(), file.path());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
