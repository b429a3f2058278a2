//! Particles and swap-sequence velocities.
//!
//! In discrete PSO a "velocity" is an ordered list of swap operators. The
//! difference `pbest - x` is the swap sequence that turns a copy of `pbest`
//! into `x`; each operator then fires on `x` with its own probability.

use std::collections::HashMap;

use rand::Rng;

use crate::cost::CostModel;
use crate::error::{TspError, TspResult};

/// Exchange the values at `first` and `second`, with probability `probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOperator {
    /// First position.
    pub first: usize,
    /// Second position.
    pub second: usize,
    /// Chance that the swap is applied (`alfa` or `beta` of its origin).
    pub probability: f64,
}

/// A swarm member.
///
/// `velocity` is transient: it is rebuilt on every update and only kept so
/// callers can inspect the last step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    /// Current tour.
    pub current: Vec<usize>,
    /// Cost of `current`.
    pub current_cost: f64,
    /// Best tour this particle has visited.
    pub pbest: Vec<usize>,
    /// Cost of `pbest`.
    pub pbest_cost: f64,
    /// Swap operators of the last update, pbest-derived first.
    pub velocity: Vec<SwapOperator>,
}

impl Particle {
    /// Creates a particle whose current tour is also its personal best.
    pub fn new(tour: Vec<usize>, cost: f64) -> Self {
        Self {
            pbest: tour.clone(),
            current: tour,
            current_cost: cost,
            pbest_cost: cost,
            velocity: Vec::new(),
        }
    }

    /// One discrete PSO step.
    ///
    /// Builds the velocity `(pbest - x)` weighted by `alfa` followed by
    /// `(gbest - x)` weighted by `beta`, applies it to the current tour, and
    /// replaces pbest on strict improvement only.
    pub fn update<C: CostModel, R: Rng>(
        &mut self,
        gbest: &[usize],
        alfa: f64,
        beta: f64,
        model: &C,
        rng: &mut R,
    ) -> TspResult<()> {
        self.velocity.clear();
        self.velocity
            .extend(swap_sequence(&self.current, &self.pbest, alfa)?);
        self.velocity
            .extend(swap_sequence(&self.current, gbest, beta)?);

        let mut next = self.current.clone();
        apply_velocity(&mut next, &self.velocity, rng)?;
        let cost = model.tour_cost(&next)?;

        self.current = next;
        self.current_cost = cost;
        if cost < self.pbest_cost {
            self.pbest = self.current.clone();
            self.pbest_cost = cost;
        }
        Ok(())
    }
}

/// Swap sequence that rearranges a working copy of `source` into `target`.
///
/// Positions are visited left to right. Wherever the copy disagrees with
/// `target` at `i`, the operator `(i, j)` is recorded, `j` being where the
/// copy currently holds `target[i]`, and the swap is applied to the copy
/// before moving on.
///
/// ```
/// use u_tsp::pso::swap_sequence;
///
/// let ops = swap_sequence(&[0, 1, 2, 3], &[1, 0, 3, 2], 0.5).unwrap();
/// let pairs: Vec<(usize, usize)> = ops.iter().map(|op| (op.first, op.second)).collect();
/// assert_eq!(pairs, vec![(0, 1), (2, 3)]);
/// ```
pub fn swap_sequence(
    target: &[usize],
    source: &[usize],
    probability: f64,
) -> TspResult<Vec<SwapOperator>> {
    if target.len() != source.len() {
        return Err(TspError::invalid(format!(
            "tours differ in length: {} vs {}",
            target.len(),
            source.len()
        )));
    }
    let mut copy = source.to_vec();
    let mut position: HashMap<usize, usize> =
        copy.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut ops = Vec::new();

    for i in 0..target.len() {
        if target[i] == copy[i] {
            continue;
        }
        let j = *position.get(&target[i]).ok_or_else(|| {
            TspError::invalid(format!("city {} is missing from the source tour", target[i]))
        })?;
        ops.push(SwapOperator {
            first: i,
            second: j,
            probability,
        });
        copy.swap(i, j);
        position.insert(copy[i], i);
        position.insert(copy[j], j);
    }
    Ok(ops)
}

/// Applies each operator in order, each with an independent draw.
///
/// Returns how many swaps fired.
pub fn apply_velocity<R: Rng>(
    tour: &mut [usize],
    velocity: &[SwapOperator],
    rng: &mut R,
) -> TspResult<usize> {
    let n = tour.len();
    let mut applied = 0;
    for op in velocity {
        if op.first >= n || op.second >= n {
            return Err(TspError::invalid(format!(
                "swap ({}, {}) is outside a tour of {n} cities",
                op.first, op.second
            )));
        }
        if rng.random::<f64>() < op.probability {
            tour.swap(op.first, op.second);
            applied += 1;
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Graph;
    use u_numflow::random::create_rng;
    use proptest::prelude::*;

    fn ring(n: usize) -> Graph {
        let mut g = Graph::new();
        for a in 0..n {
            for b in (a + 1)..n {
                let gap = (b - a).min(n - (b - a));
                g.add_undirected_edge(a, b, gap as f64);
            }
        }
        g
    }

    #[test]
    fn test_swap_sequence_uses_updated_copy() {
        // After (0, 2) the copy is [0, 2, 1]; a stale copy would emit a
        // different second operator.
        let ops = swap_sequence(&[0, 1, 2], &[1, 2, 0], 1.0).expect("same cities");
        let pairs: Vec<(usize, usize)> = ops.iter().map(|o| (o.first, o.second)).collect();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_swap_sequence_identical_is_empty() {
        let ops = swap_sequence(&[3, 1, 2], &[3, 1, 2], 0.9).expect("same cities");
        assert!(ops.is_empty());
    }

    #[test]
    fn test_swap_sequence_carries_probability() {
        let ops = swap_sequence(&[0, 1], &[1, 0], 0.25).expect("same cities");
        assert_eq!(
            ops,
            vec![SwapOperator {
                first: 0,
                second: 1,
                probability: 0.25
            }]
        );
    }

    #[test]
    fn test_swap_sequence_rejects_foreign_city() {
        assert!(swap_sequence(&[0, 1, 9], &[0, 1, 2], 1.0).is_err());
        assert!(swap_sequence(&[0, 1], &[0, 1, 2], 1.0).is_err());
    }

    #[test]
    fn test_apply_velocity_probability_extremes() {
        let mut rng = create_rng(42);
        let ops = swap_sequence(&[0, 1, 2, 3], &[3, 2, 1, 0], 1.0).expect("same cities");
        let mut tour = vec![3, 2, 1, 0];
        assert_eq!(apply_velocity(&mut tour, &ops, &mut rng).expect("in range"), ops.len());
        assert_eq!(tour, vec![0, 1, 2, 3]);

        let never: Vec<SwapOperator> = ops
            .iter()
            .map(|op| SwapOperator {
                probability: 0.0,
                ..*op
            })
            .collect();
        let mut tour = vec![3, 2, 1, 0];
        assert_eq!(apply_velocity(&mut tour, &never, &mut rng).expect("in range"), 0);
        assert_eq!(tour, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_apply_velocity_out_of_range() {
        let mut rng = create_rng(1);
        let op = SwapOperator {
            first: 0,
            second: 5,
            probability: 1.0,
        };
        assert!(apply_velocity(&mut [0, 1], &[op], &mut rng).is_err());
    }

    #[test]
    fn test_update_builds_pbest_then_gbest_velocity() {
        let g = ring(5);
        let mut rng = create_rng(3);
        let current = vec![0, 2, 4, 1, 3];
        let cost = g.tour_cost(&current).expect("valid");
        let mut p = Particle::new(current.clone(), cost);
        p.pbest = vec![0, 1, 2, 3, 4];
        p.pbest_cost = 5.0;

        let gbest = vec![0, 4, 3, 2, 1];
        p.update(&gbest, 0.3, 0.7, &g, &mut rng).expect("valid");

        let s1 = swap_sequence(&current, &[0, 1, 2, 3, 4], 0.3).expect("valid");
        let s2 = swap_sequence(&current, &gbest, 0.7).expect("valid");
        let expected: Vec<SwapOperator> = s1.into_iter().chain(s2).collect();
        assert_eq!(p.velocity, expected);
        assert!(g.validate_tour(&p.current).is_ok());
        assert_eq!(p.current_cost, g.tour_cost(&p.current).expect("valid"));
    }

    #[test]
    fn test_update_clears_previous_velocity() {
        let g = ring(4);
        let mut rng = create_rng(8);
        let mut p = Particle::new(vec![0, 1, 2, 3], 4.0);
        p.velocity = vec![
            SwapOperator {
                first: 1,
                second: 2,
                probability: 1.0,
            };
            10
        ];
        // pbest == current == gbest: no operators, nothing moves
        p.update(&[0, 1, 2, 3], 1.0, 1.0, &g, &mut rng).expect("valid");
        assert!(p.velocity.is_empty());
        assert_eq!(p.current, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_pbest_replaced_only_on_strict_improvement() {
        let g = ring(4);
        let mut rng = create_rng(2);
        // Every 4-city tour on this ring costs 4 or 6.
        let mut p = Particle::new(vec![0, 2, 1, 3], 6.0);
        p.pbest = vec![0, 1, 3, 2];
        p.pbest_cost = 6.0;
        for _ in 0..50 {
            let before = p.pbest_cost;
            let before_tour = p.pbest.clone();
            p.update(&[0, 1, 2, 3], 0.5, 0.5, &g, &mut rng).expect("valid");
            assert!(p.pbest_cost <= before);
            if p.pbest_cost == before {
                assert_eq!(p.pbest, before_tour);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_sequence_transforms_source_into_target(
            (target, source) in (1usize..30).prop_flat_map(|n| {
                let base: Vec<usize> = (0..n).collect();
                (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
            })
        ) {
            let ops = swap_sequence(&target, &source, 1.0).unwrap();
            prop_assert!(ops.len() < target.len().max(1));
            let mut copy = source.clone();
            for op in &ops {
                copy.swap(op.first, op.second);
            }
            prop_assert_eq!(copy, target);
        }

        #[test]
        fn prop_velocity_keeps_permutation(
            (target, source, seed, p) in (2usize..30).prop_flat_map(|n| {
                let base: Vec<usize> = (0..n).collect();
                (
                    Just(base.clone()).prop_shuffle(),
                    Just(base).prop_shuffle(),
                    any::<u64>(),
                    0.0..=1.0f64,
                )
            })
        ) {
            let mut rng = create_rng(seed);
            let ops = swap_sequence(&target, &source, p).unwrap();
            let mut tour = target.clone();
            apply_velocity(&mut tour, &ops, &mut rng).unwrap();
            let mut sorted = tour.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..target.len()).collect::<Vec<_>>());
        }
    }
}
