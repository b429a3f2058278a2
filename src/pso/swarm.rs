//! Swarm state: particles plus the cached global best.

use rand::Rng;

use super::particle::Particle;
use crate::cost::{random_cycles, CostModel};
use crate::error::{TspError, TspResult};

/// The swarm's best personal-best, cached by value.
///
/// Only [`Swarm::refresh_gbest`] changes it; particle updates never do.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalBest {
    /// Index of the owning particle in [`Swarm::particles`].
    pub index: usize,
    /// Copy of that particle's pbest tour.
    pub tour: Vec<usize>,
    /// Cost of `tour`.
    pub cost: f64,
}

/// A fixed set of particles and their global best.
#[derive(Debug, Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
    gbest: GlobalBest,
}

impl Swarm {
    /// Seeds a swarm from up to `size` distinct random cycles of `model`.
    ///
    /// Fails with [`TspError::EmptyPopulation`] when no candidate could be
    /// generated.
    pub fn initialize<C: CostModel, R: Rng>(
        model: &C,
        size: usize,
        rng: &mut R,
    ) -> TspResult<Self> {
        let cycles = random_cycles(&model.vertices(), size, rng);
        Self::from_tours(model, cycles)
    }

    /// Builds a swarm from explicit starting tours.
    pub fn from_tours<C: CostModel>(model: &C, tours: Vec<Vec<usize>>) -> TspResult<Self> {
        if tours.is_empty() {
            return Err(TspError::EmptyPopulation);
        }
        let particles = tours
            .into_iter()
            .map(|tour| {
                let cost = model.tour_cost(&tour)?;
                Ok(Particle::new(tour, cost))
            })
            .collect::<TspResult<Vec<_>>>()?;
        let gbest = best_of(&particles);
        Ok(Self { particles, gbest })
    }

    /// Re-selects gbest: minimal pbest cost, first particle on ties.
    pub fn refresh_gbest(&mut self) -> &GlobalBest {
        self.gbest = best_of(&self.particles);
        &self.gbest
    }

    /// Updates every particle against the cached gbest.
    pub fn update_particles<C: CostModel, R: Rng>(
        &mut self,
        model: &C,
        alfa: f64,
        beta: f64,
        rng: &mut R,
    ) -> TspResult<()> {
        for particle in self.particles.iter_mut() {
            particle.update(&self.gbest.tour, alfa, beta, model, rng)?;
        }
        Ok(())
    }

    /// The cached global best.
    pub fn gbest(&self) -> &GlobalBest {
        &self.gbest
    }

    /// All particles, in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always `false`: construction rejects empty swarms.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub(crate) fn into_particles(self) -> Vec<Particle> {
        self.particles
    }
}

fn best_of(particles: &[Particle]) -> GlobalBest {
    let (index, best) = particles
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.pbest_cost.total_cmp(&b.pbest_cost))
        .expect("swarm is never empty");
    GlobalBest {
        index,
        tour: best.pbest.clone(),
        cost: best.pbest_cost,
    }
}
