//! Annealing configuration.

use crate::error::ConfigError;

/// Configuration for the multi-restart annealing driver.
///
/// The cooling schedule is fixed: at iteration `t` of a restart, a
/// worsening move of size `delta` is accepted with probability
/// `exp(-delta * beta^(-t))`. Smaller `beta` cools faster.
///
/// # Examples
///
/// ```
/// use u_jobshop::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_restarts(20)
///     .with_iterations(1000)
///     .with_beta(0.95)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Number of independent restarts, each from a fresh random solution.
    pub restarts: usize,

    /// Neighbor evaluations per restart. 0 keeps each initial draw as is.
    pub iterations: usize,

    /// Cooling rate in (0, 1).
    pub beta: f64,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Run restarts concurrently on the rayon pool.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    /// Results are identical to a sequential run with the same seed.
    pub parallel: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            restarts: 50,
            iterations: 500,
            beta: 0.9,
            seed: None,
            parallel: false,
        }
    }
}

impl AnnealConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(ConfigError::NoRestarts);
        }
        if !(self.beta > 0.0 && self.beta < 1.0) {
            return Err(ConfigError::BetaOutOfRange(self.beta));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.restarts, 50);
        assert_eq!(config.iterations, 500);
        assert!((config.beta - 0.9).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_allowed() {
        assert!(AnnealConfig::default().with_iterations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_no_restarts() {
        let config = AnnealConfig::default().with_restarts(0);
        assert_eq!(config.validate(), Err(ConfigError::NoRestarts));
    }

    #[test]
    fn test_validate_bad_beta() {
        for beta in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = AnnealConfig::default().with_beta(beta);
            assert!(
                matches!(config.validate(), Err(ConfigError::BetaOutOfRange(_))),
                "beta {beta} should be rejected"
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_config() {
        let config: AnnealConfig =
            serde_json::from_str(r#"{"restarts": 5, "seed": 7}"#).unwrap();
        assert_eq!(config.restarts, 5);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, Some(7));
    }
}
