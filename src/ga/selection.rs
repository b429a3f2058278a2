//! Parent and survivor selection.
//!
//! All selection assumes **minimization** (lower fitness = better).

use rand::Rng;

use super::types::{sort_by_fitness, Individual};

/// Tournament selection: draw `k` indices with replacement, keep the best.
///
/// A later draw replaces the incumbent when its fitness is lower **or
/// equal**, so with `k = 2` a tie goes to the second draw.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness <= population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

/// Fills one parent slot per individual by repeated tournaments.
pub fn select_parents<'a, R: Rng>(
    population: &'a [Individual],
    k: usize,
    rng: &mut R,
) -> Vec<&'a Individual> {
    (0..population.len())
        .map(|_| &population[tournament(population, k, rng)])
        .collect()
}

/// Elitist merge of the current population with its offspring.
///
/// Both pools are sorted ascending, then a two-pointer merge fills as many
/// slots as `population` had. The population head is taken only when
/// strictly better than the offspring head. The output is sorted ascending.
///
/// ```
/// use u_tsp::ga::{elitist_merge, Individual};
///
/// let ind = |f: f64| Individual { tour: vec![], fitness: f };
/// let merged = elitist_merge(vec![ind(5.0), ind(1.0)], vec![ind(3.0), ind(0.5)]);
/// let f: Vec<f64> = merged.iter().map(|i| i.fitness).collect();
/// assert_eq!(f, vec![0.5, 1.0]);
/// ```
pub fn elitist_merge(
    mut population: Vec<Individual>,
    mut offspring: Vec<Individual>,
) -> Vec<Individual> {
    let target = population.len();
    sort_by_fitness(&mut population);
    sort_by_fitness(&mut offspring);

    let mut parents = population.into_iter().peekable();
    let mut children = offspring.into_iter().peekable();
    let mut next = Vec::with_capacity(target);

    while next.len() < target {
        let take_parent = match (parents.peek(), children.peek()) {
            (Some(p), Some(c)) => p.fitness < c.fitness,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let chosen = if take_parent {
            parents.next()
        } else {
            children.next()
        };
        next.extend(chosen);
    }
    next
}
