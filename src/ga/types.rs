//! GA individual.

use std::cmp::Ordering;

use rand::Rng;
use u_numflow::random::shuffle;

use crate::cost::CostModel;
use crate::error::TspResult;

/// A candidate tour in the GA population.
///
/// Fitness is the total cyclic cost of `tour`. Lower is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Visiting order of the cities.
    pub tour: Vec<usize>,

    /// Total cyclic cost of `tour`.
    pub fitness: f64,
}

impl Individual {
    /// Scores `tour` with `model` and wraps it.
    ///
    /// Fails if `tour` is not a permutation of the model's vertices.
    pub fn evaluated<C: CostModel>(tour: Vec<usize>, model: &C) -> TspResult<Self> {
        let fitness = model.tour_cost(&tour)?;
        Ok(Self { tour, fitness })
    }

    /// Orders two individuals by ascending fitness.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness.total_cmp(&other.fitness)
    }
}

/// A uniformly random permutation of `cities`.
pub fn random_tour<R: Rng>(cities: &[usize], rng: &mut R) -> Vec<usize> {
    let mut tour = cities.to_vec();
    shuffle(&mut tour, rng);
    tour
}

/// Sorts a population best-first.
pub(crate) fn sort_by_fitness(population: &mut [Individual]) {
    population.sort_by(Individual::cmp_fitness);
}
