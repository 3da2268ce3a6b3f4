use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Path to the extension bundle
    pub bundle: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeCommand {
    /// Run the analyze command
    pub fn run(&self) -> Result<()> {
        let bytes = std::fs::read(&self.bundle)
            .wrap_err_with(|| format!("Failed to read {}", self.bundle.display()))?;
        let summary = itopforge_analyzer::analyze(&bytes).unwrap_or_exit();

        if self.json {
            let json =
                serde_json::to_string_pretty(&summary).wrap_err("Failed to encode summary")?;
            println!("{}", json);
            return Ok(());
        }

        let report = ops::analyze(summary, &self.bundle);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
