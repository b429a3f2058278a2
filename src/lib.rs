//! Population metaheuristics for the symmetric Traveling Salesman Problem.
//!
//! Two independent engines search for a low-cost Hamiltonian cycle over the
//! same cost model:
//!
//! - **Genetic Algorithm (GA)**: permutation genomes with binary tournament
//!   selection, Partially Mapped Crossover (PMX), swap mutation and an
//!   elitist merge of parents and offspring.
//! - **Particle Swarm Optimization (PSO)**: discrete PSO whose velocities are
//!   probabilistic swap sequences towards each particle's own best and the
//!   swarm's best.
//!
//! Neither engine guarantees optimality; both only ever report feasible
//! tours, and their incumbents never get worse.
//!
//! # Modules
//!
//! - [`cost`] — [`CostModel`](cost::CostModel), [`CostMatrix`](cost::CostMatrix),
//!   [`Graph`](cost::Graph)
//! - [`ga`] — genetic algorithm engine
//! - [`pso`] — particle swarm engine
//! - [`tsplib`] — coordinate file reader
//! - [`error`] — [`TspError`] and [`TspResult`]
//!
//! # Example
//!
//! ```
//! use u_tsp::cost::build_cost_matrix;
//! use u_tsp::ga::{GaConfig, GaRunner};
//!
//! let cities = build_cost_matrix(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])?;
//! let result = GaRunner::run(&cities, &GaConfig::fast().with_population_size(20).with_seed(1))?;
//! assert!((result.best_fitness - 4.0).abs() < 1e-9);
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod cost;
pub mod error;
pub mod ga;
pub mod pso;
pub mod tsplib;

pub use error::{TspError, TspResult};
