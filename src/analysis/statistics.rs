//! Statistical sanity checks for entropy batches.
//!
//! These tests detect obvious problems such as a corpus of blank
//! images. Passing them is necessary but not sufficient for good
//! entropy.

use crate::extraction::EntropyBatch;

/// Statistical test results.
#[derive(Debug, Clone)]
pub struct StatisticalTests {
    /// Bit bias (deviation from 0.5).
    pub bit_bias: f64,
    /// Shannon entropy of the byte values, in bits per byte (0 to 8).
    pub shannon_entropy: f64,
    /// Lag-1 autocorrelation of the byte values.
    pub autocorrelation: f64,
    /// Number of bits analyzed.
    pub bit_count: usize,
    /// Number of whole bytes analyzed.
    pub byte_count: usize,
}

impl StatisticalTests {
    /// Runs all statistical tests on the batch.
    pub fn analyze(batch: &EntropyBatch) -> Self {
        let bytes = batch.to_bytes();

        Self {
            bit_bias: batch.bit_bias(),
            shannon_entropy: shannon_entropy(&bytes),
            autocorrelation: Self::compute_autocorrelation(&bytes),
            bit_count: batch.len(),
            byte_count: bytes.len(),
        }
    }

    /// Computes lag-1 autocorrelation.
    ///
    /// Measures correlation between consecutive bytes.
    /// High values indicate predictable patterns.
    fn compute_autocorrelation(data: &[u8]) -> f64 {
        if data.len() < 2 {
            return 0.0;
        }

        let n = data.len() as f64;
        let mean: f64 = data.iter().map(|&b| b as f64).sum::<f64>() / n;

        let variance: f64 = data.iter().map(|&b| (b as f64 - mean).powi(2)).sum::<f64>();

        if variance == 0.0 {
            return 1.0; // All same value = perfect correlation
        }

        let covariance: f64 = data
            .windows(2)
            .map(|w| (w[0] as f64 - mean) * (w[1] as f64 - mean))
            .sum();

        covariance / variance
    }
}

/// Shannon entropy of a byte sequence, in bits per symbol.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut counts = [0usize; 256];
    for &b in data {
        counts[b as usize] += 1;
    }

    let total = data.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_from_bytes(bytes: &[u8]) -> EntropyBatch {
        EntropyBatch::from_bits(
            bytes
                .iter()
                .flat_map(|&b| (0..8).rev().map(move |i| (b >> i) & 1)),
        )
    }

    #[test]
    fn test_uniform_bytes_full_entropy() {
        let data: Vec<u8> = (0..=255).collect();
        assert!((shannon_entropy(&data) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_bytes_zero_entropy() {
        assert_eq!(shannon_entropy(&[0x42; 100]), 0.0);
        assert_eq!(shannon_entropy(&[]), 0.0);
    }

    #[test]
    fn test_constant_data_fully_correlated() {
        let stats = StatisticalTests::analyze(&batch_from_bytes(&[0x80; 100]));
        assert_eq!(stats.autocorrelation, 1.0);
        assert_eq!(stats.byte_count, 100);
        assert_eq!(stats.bit_count, 800);
    }

    #[test]
    fn test_spread_data_reasonable() {
        let data: Vec<u8> = (0..1000).map(|i| (i * 17 + 31) as u8).collect();
        let stats = StatisticalTests::analyze(&batch_from_bytes(&data));

        assert!(stats.shannon_entropy > 7.9);
        assert!(stats.bit_bias.abs() < 0.01);
    }

    #[test]
    fn test_partial_byte_ignored_for_entropy() {
        let stats = StatisticalTests::analyze(&EntropyBatch::from_bits(vec![1; 12]));
        assert_eq!(stats.byte_count, 1);
        assert_eq!(stats.bit_count, 12);
    }
}
