//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::Error;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use rpick::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.mutation_rate, 5);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use rpick::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(1000)
///     .with_mutation_rate(10)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must be even: each generation keeps exactly the best half.
    pub population_size: usize,

    /// Base probability, in percent (0–100), of mutating each child.
    pub mutation_rate: u32,

    /// Generations between cleanup / adaptive-rate passes.
    pub cleanup_interval: usize,

    /// Duplicate ratio (percent) above which the mutation rate doubles.
    pub duplicate_threshold: f64,

    /// Stop after this many generations.
    ///
    /// `None` runs until cancelled (the default).
    pub max_generations: Option<usize>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked once per generation at the cancellation checkpoint, so the
    /// run may overshoot by one generation.
    pub time_limit_ms: Option<u64>,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 5,
            cleanup_interval: 100,
            duplicate_threshold: 30.0,
            max_generations: None,
            time_limit_ms: None,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the base mutation rate in percent, clamped to 100.
    pub fn with_mutation_rate(mut self, rate: u32) -> Self {
        self.mutation_rate = rate.min(100);
        self
    }

    /// Sets the cleanup interval.
    pub fn with_cleanup_interval(mut self, n: usize) -> Self {
        self.cleanup_interval = n;
        self
    }

    /// Sets the duplicate ratio threshold (percent).
    pub fn with_duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold.clamp(0.0, 100.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] describing the first offending parameter.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(Error::InvalidConfig("population_size must be even".into()));
        }
        if self.mutation_rate > 100 {
            return Err(Error::InvalidConfig(
                "mutation_rate must be between 0 and 100".into(),
            ));
        }
        if self.cleanup_interval == 0 {
            return Err(Error::InvalidConfig(
                "cleanup_interval must be at least 1".into(),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(Error::InvalidConfig(
                "max_generations must be positive or None".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(Error::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.mutation_rate, 5);
        assert_eq!(config.cleanup_interval, 100);
        assert!((config.duplicate_threshold - 30.0).abs() < 1e-10);
        assert!(config.max_generations.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_mutation_rate(20)
            .with_cleanup_interval(50)
            .with_duplicate_threshold(40.0)
            .with_max_generations(1000)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.mutation_rate, 20);
        assert_eq!(config.cleanup_interval, 50);
        assert!((config.duplicate_threshold - 40.0).abs() < 1e-10);
        assert_eq!(config.max_generations, Some(1000));
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_odd_population() {
        let config = GaConfig::default().with_population_size(11);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_mutation_rate(250)
            .with_duplicate_threshold(-5.0);
        assert_eq!(config.mutation_rate, 100);
        assert!((config.duplicate_threshold - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_unclamped_rate() {
        let config = GaConfig {
            mutation_rate: 101,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_budgets() {
        assert!(GaConfig::default()
            .with_max_generations(0)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_time_limit_ms(0)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_cleanup_interval(0)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_time_limit_ms(1).validate().is_ok());
    }
}
