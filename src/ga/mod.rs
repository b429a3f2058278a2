//! Genetic Algorithm for the TSP.
//!
//! A generational GA over permutation genomes:
//!
//! 1. Binary tournament selection fills one parent slot per individual
//! 2. Consecutive parents are recombined with PMX
//! 3. Each child receives one swap mutation with probability `mutation_rate`
//! 4. Parents and offspring are sorted and merged, keeping the best
//!    `population_size` individuals (elitist merge)
//!
//! Because survivors are the best of parents ∪ offspring, the best fitness
//! never worsens from one generation to the next.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual and per-generation fitness trace
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{elitist_merge, select_parents, tournament};
pub use types::{random_tour, Individual};
