//! Analysis parameters shared by every classifier and aggregation step

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Tunable thresholds for one analysis run
///
/// Built once at startup and passed by reference; nothing in the core
/// reads configuration from anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Type-token ratio at which an MTLD factor closes
    pub mtld_threshold: f64,
    /// Number of overlap candidates in the document-level window
    pub overlap_size: usize,
    /// Lemmas seen at most this often count as rare
    pub rarity_level: u32,
    /// Stop reading frequency lexicons beyond this relative frequency (0 disables)
    pub frequency_clip: f64,
    /// Keep lexicon misses for the problem log
    #[serde(default = "default_true")]
    pub log_problems: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mtld_threshold: 0.720,
            overlap_size: 50,
            rarity_level: 10,
            frequency_clip: 90.0,
            log_problems: true,
        }
    }
}

impl AnalysisConfig {
    /// Check that all values are in range
    pub fn validate(&self) -> Result<()> {
        if !(self.mtld_threshold > 0.0 && self.mtld_threshold < 1.0) {
            return Err(CoreError::InvalidConfig(format!(
                "mtld_threshold must be between 0 and 1, got {}",
                self.mtld_threshold
            )));
        }
        if !(0.0..=100.0).contains(&self.frequency_clip) {
            return Err(CoreError::InvalidConfig(format!(
                "frequency_clip must be between 0 and 100, got {}",
                self.frequency_clip
            )));
        }
        if self.overlap_size == 0 {
            return Err(CoreError::InvalidConfig(
                "overlap_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the MTLD threshold
    pub fn with_mtld_threshold(mut self, threshold: f64) -> Self {
        self.mtld_threshold = threshold;
        self
    }

    /// Set the document overlap window size
    pub fn with_overlap_size(mut self, size: usize) -> Self {
        self.overlap_size = size;
        self
    }

    /// Set the rarity level
    pub fn with_rarity_level(mut self, level: u32) -> Self {
        self.rarity_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.overlap_size, 50);
        assert!((config.mtld_threshold - 0.72).abs() < f64::EPSILON);
        assert!(config.log_problems);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = AnalysisConfig::default().with_mtld_threshold(1.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("mtld_threshold"));

        let config = AnalysisConfig::default().with_mtld_threshold(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frequency_clip_out_of_range() {
        let config = AnalysisConfig {
            frequency_clip: 120.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_overlap_window_rejected() {
        let config = AnalysisConfig::default().with_overlap_size(0);
        assert!(config.validate().is_err());
    }
}
