//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tscan_api::Settings;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Settings file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose);
        println!("Validating settings: {}", self.config.display());

        let settings = Settings::from_file(&self.config)
            .with_context(|| format!("Validation failed for {}", self.config.display()))?;
        let lexicons = settings
            .load_lexicons()
            .context("Validation failed while loading lexicons")?;

        println!("✓ Settings are valid!");
        println!("  mtld_threshold: {}", settings.analysis.mtld_threshold);
        println!("  overlap_size:   {}", settings.analysis.overlap_size);
        println!("  rarity_level:   {}", settings.analysis.rarity_level);
        println!("  execution:      {}", settings.services.execution);
        println!("Lexicon entries:");
        for (name, entries) in lexicons.summary() {
            println!("  {name:<24} {entries}");
        }
        Ok(())
    }
}
