//! PSO iteration loop.

use tracing::{debug, trace};
use u_numflow::random::create_rng;

use super::config::PsoConfig;
use super::particle::Particle;
use super::swarm::Swarm;
use crate::cost::CostModel;
use crate::error::TspResult;

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// The reported gbest tour.
    pub best_tour: Vec<usize>,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Index of the particle owning `best_tour`.
    pub best_index: usize,

    /// Number of iterations executed.
    pub iterations: usize,

    /// gbest cost selected at the start of each iteration.
    pub cost_history: Vec<f64>,

    /// Final state of every particle.
    pub particles: Vec<Particle>,
}

/// Executes discrete PSO.
///
/// # Usage
///
/// ```
/// use u_tsp::cost::Graph;
/// use u_tsp::pso::{PsoConfig, PsoRunner};
///
/// let graph = Graph::from_undirected_edges(&[
///     (0, 1, 1.0), (0, 2, 3.0), (0, 3, 4.0), (0, 4, 5.0), (1, 2, 1.0),
///     (1, 3, 4.0), (1, 4, 8.0), (2, 3, 5.0), (2, 4, 1.0), (3, 4, 2.0),
/// ]);
/// let config = PsoConfig::default().with_alfa(0.9).with_seed(42);
/// let result = PsoRunner::run(&graph, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 5);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO over every vertex of `model`.
    ///
    /// Per iteration gbest is re-selected first, then every particle moves
    /// against that snapshot. Without
    /// [`refresh_gbest_after_loop`](PsoConfig::refresh_gbest_after_loop) the
    /// result is the gbest chosen at the start of the final iteration.
    pub fn run<C: CostModel>(model: &C, config: &PsoConfig) -> TspResult<PsoResult> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut swarm = Swarm::initialize(model, config.swarm_size, &mut rng)?;

        debug!(
            cities = model.vertex_count(),
            particles = swarm.len(),
            max_iterations = config.max_iterations,
            alfa = config.alfa,
            beta = config.beta,
            "starting PSO"
        );

        let mut cost_history = Vec::with_capacity(config.max_iterations);
        for iteration in 0..config.max_iterations {
            let gbest_cost = swarm.refresh_gbest().cost;
            cost_history.push(gbest_cost);

            swarm.update_particles(model, config.alfa, config.beta, &mut rng)?;

            trace!(iteration, gbest_cost, "iteration done");
        }

        if config.refresh_gbest_after_loop {
            swarm.refresh_gbest();
        }

        let gbest = swarm.gbest().clone();
        debug!(best_cost = gbest.cost, best_index = gbest.index, "PSO finished");

        Ok(PsoResult {
            best_tour: gbest.tour,
            best_cost: gbest.cost,
            best_index: gbest.index,
            iterations: config.max_iterations,
            cost_history,
            particles: swarm.into_particles(),
        })
    }
}
