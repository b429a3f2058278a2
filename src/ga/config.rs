//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{TspError, TspResult};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 400);
/// assert_eq!(config.tournament_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must be even: crossover pairs consecutive parents.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Probability that a child receives one swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of draws per tournament.
    ///
    /// The default of 2 is binary tournament: the strictly better of two
    /// draws wins, and on a tie the second draw wins.
    pub tournament_size: usize,

    /// Whether to evaluate fitness in parallel.
    ///
    /// Only effective with the `parallel` cargo feature. Results are
    /// identical either way.
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
            max_generations: 400,
            mutation_rate: 0.05,
            tournament_size: 2,
            parallel: true,
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

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
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

    /// Preset for small instances or quick checks.
    ///
    /// - Population: 50, Generations: 100
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Preset trading quality against run time.
    ///
    /// - Population: 100, Generations: 400
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for large instances.
    ///
    /// - Population: 200, Generations: 1000
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            max_generations: 1000,
            ..Self::default()
        }
    }

    /// Picks a preset by instance size.
    ///
    /// - `city_count < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ city_count < 200` → [`balanced()`](Self::balanced)
    /// - `city_count ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(city_count: usize) -> Self {
        if city_count < 50 {
            Self::fast()
        } else if city_count < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size < 2 {
            return Err(TspError::invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(TspError::invalid(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(TspError::invalid("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::invalid("mutation_rate must be within [0, 1]"));
        }
        if self.tournament_size == 0 {
            return Err(TspError::invalid("tournament_size must be at least 1"));
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
        assert_eq!(config.max_generations, 400);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.tournament_size, 2);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(50)
            .with_mutation_rate(0.05)
            .with_tournament_size(3)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.tournament_size, 3);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(GaConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_odd_population() {
        let err = GaConfig::default()
            .with_population_size(21)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TspError::InvalidInput(ref m) if m.contains("even")));
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_raw_mutation_rate() {
        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }

    #[test]
    fn test_presets_validate() {
        for config in [GaConfig::fast(), GaConfig::balanced(), GaConfig::quality()] {
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_auto_select_boundaries() {
        assert_eq!(GaConfig::auto_select(49).population_size, 50);
        assert_eq!(GaConfig::auto_select(50).population_size, 100);
        assert_eq!(GaConfig::auto_select(199).population_size, 100);
        assert_eq!(GaConfig::auto_select(200).population_size, 200);
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::fast().with_population_size(30).with_seed(7);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.seed, Some(7));
    }
}
