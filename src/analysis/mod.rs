//! Entropy sanity statistics.
//!
//! This module provides statistical tests and quality thresholds for
//! extracted batches. These are sanity checks, not cryptographic
//! proofs of entropy.

mod statistics;
mod threshold;

pub use statistics::{shannon_entropy, StatisticalTests};
pub use threshold::{QualityThresholds, ThresholdViolation};
