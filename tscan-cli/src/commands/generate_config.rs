//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tscan_api::Settings;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Settings::default_toml();
        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("✓ Settings template written to {}", path.display());
                println!("  Check it with: tscan validate -c {}", path.display());
            }
            None => print!("{template}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_template_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tscan.toml");
        GenerateConfigArgs {
            output: Some(path.clone()),
        }
        .execute()
        .unwrap();
        assert!(Settings::from_file(&path).is_ok());
    }
}
