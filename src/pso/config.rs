//! PSO configuration.

use crate::error::{TspError, TspResult};

/// Configuration for the discrete Particle Swarm Optimizer.
///
/// # Examples
///
/// ```
/// use u_tsp::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(10)
///     .with_max_iterations(100)
///     .with_alfa(0.9)
///     .with_beta(1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of candidate tours sampled for the initial swarm.
    ///
    /// Duplicates are dropped, so the actual swarm may be smaller.
    pub swarm_size: usize,

    /// Number of iterations.
    pub max_iterations: usize,

    /// Apply probability of swap operators derived from `(pbest - x)`.
    pub alfa: f64,

    /// Apply probability of swap operators derived from `(gbest - x)`.
    pub beta: f64,

    /// Recompute gbest once more after the last iteration.
    ///
    /// When `false` (the default) the reported gbest is the one selected at
    /// the start of the last iteration, so an improvement found during that
    /// iteration is not reported.
    pub refresh_gbest_after_loop: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 10,
            max_iterations: 100,
            alfa: 1.0,
            beta: 1.0,
            refresh_gbest_after_loop: false,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets `alfa`.
    pub fn with_alfa(mut self, alfa: f64) -> Self {
        self.alfa = alfa.clamp(0.0, 1.0);
        self
    }

    /// Sets `beta`.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables the final gbest recomputation.
    pub fn with_refresh_gbest_after_loop(mut self, refresh: bool) -> Self {
        self.refresh_gbest_after_loop = refresh;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.swarm_size == 0 {
            return Err(TspError::invalid("swarm_size must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(TspError::invalid("max_iterations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.alfa) {
            return Err(TspError::invalid("alfa must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(TspError::invalid("beta must be within [0, 1]"));
        }
        Ok(())
    }
}
