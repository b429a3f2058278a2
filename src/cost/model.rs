//! The [`CostModel`] trait.

use crate::error::{TspError, TspResult};

/// Pairwise edge costs over a finite vertex set.
///
/// Implementors provide the vertex set and a fallible edge lookup; the
/// provided methods derive permutation checking and cyclic tour cost from
/// those two.
///
/// `CostModel` must be `Send + Sync` because the GA may evaluate a
/// population in parallel.
pub trait CostModel: Send + Sync {
    /// Vertex ids in ascending order.
    fn vertices(&self) -> Vec<usize>;

    /// Number of distinct vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// Fails with [`TspError::MissingEdge`] when the pair is not defined.
    fn edge_cost(&self, from: usize, to: usize) -> TspResult<f64>;

    /// Checks that `tour` visits every vertex exactly once.
    fn validate_tour(&self, tour: &[usize]) -> TspResult<()> {
        let vertices = self.vertices();
        if tour.len() != vertices.len() {
            return Err(TspError::invalid(format!(
                "tour has {} cities, expected {}",
                tour.len(),
                vertices.len()
            )));
        }
        let mut sorted = tour.to_vec();
        sorted.sort_unstable();
        if sorted != vertices {
            return Err(TspError::invalid(format!(
                "tour {tour:?} is not a permutation of the vertex set"
            )));
        }
        Ok(())
    }

    /// Total cost of the closed tour, including the edge back to the start.
    fn tour_cost(&self, tour: &[usize]) -> TspResult<f64> {
        self.validate_tour(tour)?;
        let (first, last) = match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Ok(0.0),
        };
        let mut total = 0.0;
        for pair in tour.windows(2) {
            total += self.edge_cost(pair[0], pair[1])?;
        }
        total += self.edge_cost(last, first)?;
        Ok(total)
    }
}
