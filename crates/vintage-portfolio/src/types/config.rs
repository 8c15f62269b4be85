//! Configuration for metrics computation.

use serde::{Deserialize, Serialize};

/// Configuration for metrics computation.
///
/// Controls parallelism when computing snapshots across many vehicles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum vehicle count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            // Each snapshot runs a root-finding solve, so the bar is
            // lower than it would be for simple aggregation.
            parallel_threshold: 16,
        }
    }
}

impl MetricsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = MetricsConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 16);
    }

    #[test]
    fn test_sequential() {
        let config = MetricsConfig::sequential();
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MetricsConfig::new().with_parallel(true).with_threshold(50);

        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 50);
    }

    #[test]
    fn test_should_parallelize() {
        let config = MetricsConfig::new().with_threshold(100);

        // Without the 'parallel' feature, this always returns false
        // With the feature, it depends on the count
        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
            assert!(config.should_parallelize(500));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
            assert!(!config.should_parallelize(500));
        }
    }

    #[test]
    fn test_disabled_parallel() {
        let config = MetricsConfig::new().with_parallel(false);
        assert!(!config.should_parallelize(1_000));
    }

    #[test]
    fn test_serde() {
        let config = MetricsConfig::new().with_threshold(75);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: MetricsConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.parallel_threshold, 75);
        assert!(parsed.parallel);
    }
}
