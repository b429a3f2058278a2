//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → tournament selection → PMX crossover → swap mutation →
//! evaluation → elitist merge → repeat.

use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::create_rng;

use super::config::GaConfig;
use super::operators::{pmx_crossover, swap_mutation};
use super::selection::{elitist_merge, select_parents};
use super::types::{random_tour, Individual};
use crate::cost::CostModel;
use crate::error::{TspError, TspResult};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the population at the end of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tsp::cost::build_cost_matrix;
/// use u_tsp::ga::{GaConfig, GaRunner};
///
/// let cities = build_cost_matrix(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert!((result.best_fitness - 4.0).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization over every vertex of `model`.
    ///
    /// Fails with [`TspError::InvalidInput`] for an invalid configuration or
    /// fewer than 2 cities.
    pub fn run<C: CostModel>(model: &C, config: &GaConfig) -> TspResult<GaResult> {
        config.validate()?;

        let cities = model.vertices();
        if cities.len() < 2 {
            return Err(TspError::invalid(format!(
                "at least 2 cities are required, got {}",
                cities.len()
            )));
        }

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        debug!(
            cities = cities.len(),
            population_size = config.population_size,
            max_generations = config.max_generations,
            mutation_rate = config.mutation_rate,
            "starting GA"
        );

        // 1. Initialize and evaluate population
        let tours: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_tour(&cities, &mut rng))
            .collect();
        let mut population = evaluate_all(model, tours, config.parallel)?;

        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for generation in 0..config.max_generations {
            let parents = select_parents(&population, config.tournament_size, &mut rng);
            let mut children = Vec::with_capacity(parents.len());
            for pair in parents.chunks_exact(2) {
                let (c1, c2) = pmx_crossover(&pair[0].tour, &pair[1].tour, &mut rng)?;
                children.push(c1);
                children.push(c2);
            }

            for child in children.iter_mut() {
                if rng.random_bool(config.mutation_rate) {
                    swap_mutation(child, &mut rng);
                }
            }

            let offspring = evaluate_all(model, children, config.parallel)?;
            population = elitist_merge(population, offspring);

            let generation_best = find_best(&population);
            if generation_best.fitness < best.fitness {
                best = generation_best.clone();
            }
            fitness_history.push(generation_best.fitness);

            trace!(generation, best_fitness = generation_best.fitness, "generation done");
        }

        debug!(best_fitness = best.fitness, "GA finished");

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Scores every tour, in parallel when enabled.
fn evaluate_all<C: CostModel>(
    model: &C,
    tours: Vec<Vec<usize>>,
    parallel: bool,
) -> TspResult<Vec<Individual>> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return tours
                .into_par_iter()
                .map(|tour| Individual::evaluated(tour, model))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    tours
        .into_iter()
        .map(|tour| Individual::evaluated(tour, model))
        .collect()
}

/// Find the individual with the best (lowest) fitness.
fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .min_by(|a, b| a.cmp_fitness(b))
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
