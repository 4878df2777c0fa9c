//! Quality thresholds for entropy batches.

use super::statistics::StatisticalTests;
use serde::{Deserialize, Serialize};

/// Quality thresholds for entropy monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Maximum acceptable bit bias (absolute value).
    pub max_bit_bias: f64,
    /// Minimum acceptable Shannon entropy, in bits per byte.
    pub min_shannon_entropy: f64,
    /// Maximum acceptable autocorrelation (absolute value).
    pub max_autocorrelation: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            max_bit_bias: 0.05,       // 5% bias tolerance
            min_shannon_entropy: 6.0, // 375 bytes cannot reach 8.0
            max_autocorrelation: 0.3, // Low correlation tolerance
        }
    }
}

impl QualityThresholds {
    /// Checks statistics against thresholds.
    pub fn check(&self, stats: &StatisticalTests) -> Result<(), ThresholdViolation> {
        if stats.bit_bias.abs() > self.max_bit_bias {
            return Err(ThresholdViolation::BitBias {
                observed: stats.bit_bias,
                threshold: self.max_bit_bias,
            });
        }

        if stats.shannon_entropy < self.min_shannon_entropy {
            return Err(ThresholdViolation::LowEntropy {
                observed: stats.shannon_entropy,
                threshold: self.min_shannon_entropy,
            });
        }

        if stats.autocorrelation.abs() > self.max_autocorrelation {
            return Err(ThresholdViolation::HighAutocorrelation {
                observed: stats.autocorrelation,
                threshold: self.max_autocorrelation,
            });
        }

        Ok(())
    }
}

/// Threshold violation types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ThresholdViolation {
    #[error("bit bias {observed:.4} exceeds threshold {threshold:.4}")]
    BitBias { observed: f64, threshold: f64 },

    #[error("shannon entropy {observed:.4} below threshold {threshold:.4}")]
    LowEntropy { observed: f64, threshold: f64 },

    #[error("autocorrelation {observed:.4} exceeds threshold {threshold:.4}")]
    HighAutocorrelation { observed: f64, threshold: f64 },
}
