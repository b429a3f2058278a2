//! Dense cost matrix.

use super::model::CostModel;
use crate::error::{TspError, TspResult};

/// A dense n×n cost matrix stored in row-major order.
///
/// Built once, read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_tsp::cost::{build_cost_matrix, CostModel};
///
/// let m = build_cost_matrix(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]).unwrap();
/// assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(m.size(), 3);
/// assert!((m.tour_cost(&[0, 1, 2]).unwrap() - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Builds a Euclidean matrix from city coordinates.
    ///
    /// Fails with [`TspError::InvalidInput`] for fewer than two cities.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> TspResult<Self> {
        let n = coordinates.len();
        if n < 2 {
            return Err(TspError::invalid(format!(
                "at least 2 coordinates are required, got {n}"
            )));
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (x1, y1) = coordinates[i];
                let (x2, y2) = coordinates[j];
                let d = (x1 - x2).hypot(y1 - y2);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        if size < 2 {
            return Err(TspError::invalid(format!(
                "at least 2 cities are required, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(TspError::invalid(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if data.iter().any(|d| d.is_nan() || *d < 0.0) {
            return Err(TspError::invalid("costs must be non-negative numbers"));
        }
        Ok(Self { data, size })
    }

    /// Cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl CostModel for CostMatrix {
    fn vertices(&self) -> Vec<usize> {
        (0..self.size).collect()
    }

    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_cost(&self, from: usize, to: usize) -> TspResult<f64> {
        if from >= self.size || to >= self.size {
            return Err(TspError::MissingEdge { from, to });
        }
        Ok(self.get(from, to))
    }

    // O(n) check: vertex ids are exactly 0..size.
    fn validate_tour(&self, tour: &[usize]) -> TspResult<()> {
        if tour.len() != self.size {
            return Err(TspError::invalid(format!(
                "tour has {} cities, expected {}",
                tour.len(),
                self.size
            )));
        }
        let mut seen = vec![false; self.size];
        for &city in tour {
            if city >= self.size || seen[city] {
                return Err(TspError::invalid(format!(
                    "tour {tour:?} is not a permutation of 0..{}",
                    self.size
                )));
            }
            seen[city] = true;
        }
        Ok(())
    }
}

/// Builds the Euclidean cost matrix for `coordinates`.
///
/// Equivalent to [`CostMatrix::from_coordinates`].
pub fn build_cost_matrix(coordinates: &[(f64, f64)]) -> TspResult<CostMatrix> {
    CostMatrix::from_coordinates(coordinates)
}

/// Total cyclic cost of `tour` under `matrix`.
pub fn tour_cost(tour: &[usize], matrix: &CostMatrix) -> TspResult<f64> {
    matrix.tour_cost(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square() -> CostMatrix {
        build_cost_matrix(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).expect("valid")
    }

    #[test]
    fn test_from_coordinates() {
        let m = build_cost_matrix(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]).expect("valid");
        assert_eq!(m.size(), 3);
        assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((m.get(0, 2) - 8.0).abs() < 1e-10);
        assert!(m.get(1, 1).abs() < 1e-10);
        assert!(m.is_symmetric(1e-12));
    }

    #[test]
    fn test_too_few_coordinates() {
        assert!(matches!(
            build_cost_matrix(&[(1.0, 1.0)]),
            Err(TspError::InvalidInput(_))
        ));
        assert!(build_cost_matrix(&[]).is_err());
    }

    #[test]
    fn test_from_data() {
        let m = CostMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(m.get(0, 1), 5.0);
        assert!(CostMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
        assert!(CostMatrix::from_data(2, vec![0.0, -1.0, 1.0, 0.0]).is_err());
    }

    #[test]
    fn test_asymmetric_data() {
        let m = CostMatrix::from_data(2, vec![0.0, 10.0, 15.0, 0.0]).expect("valid");
        assert!(!m.is_symmetric(1e-10));
    }

    #[test]
    fn test_square_perimeter() {
        let m = unit_square();
        assert!((tour_cost(&[0, 1, 2, 3], &m).expect("valid") - 4.0).abs() < 1e-10);
        let diagonal = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_cost(&[0, 2, 1, 3], &m).expect("valid") - diagonal).abs() < 1e-10);
    }

    #[test]
    fn test_rejects_non_permutation() {
        let m = unit_square();
        assert!(matches!(
            tour_cost(&[0, 1, 1, 3], &m),
            Err(TspError::InvalidInput(_))
        ));
        assert!(tour_cost(&[0, 1, 2], &m).is_err());
        assert!(tour_cost(&[0, 1, 2, 7], &m).is_err());
    }

    #[test]
    fn test_edge_cost_out_of_range() {
        let m = unit_square();
        assert_eq!(
            m.edge_cost(0, 4),
            Err(TspError::MissingEdge { from: 0, to: 4 })
        );
    }

    fn coords_and_tour() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<usize>, usize)> {
        prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..25).prop_flat_map(
            |coords| {
                let n = coords.len();
                let perm = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
                (Just(coords), perm, 0..n)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_cost_invariant_under_rotation((coords, tour, shift) in coords_and_tour()) {
            let m = build_cost_matrix(&coords).unwrap();
            let base = tour_cost(&tour, &m).unwrap();
            let mut rotated = tour.clone();
            rotated.rotate_left(shift);
            let cost = tour_cost(&rotated, &m).unwrap();
            prop_assert!((base - cost).abs() < 1e-6 * base.max(1.0));
        }

        #[test]
        fn prop_cost_invariant_under_reversal((coords, tour, _shift) in coords_and_tour()) {
            let m = build_cost_matrix(&coords).unwrap();
            let base = tour_cost(&tour, &m).unwrap();
            let mut reversed = tour.clone();
            reversed.reverse();
            let cost = tour_cost(&reversed, &m).unwrap();
            prop_assert!((base - cost).abs() < 1e-6 * base.max(1.0));
        }
    }
}
