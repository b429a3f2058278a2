//! Tour cost model.
//!
//! Both engines score candidate tours through [`CostModel::tour_cost`], so
//! costs reported by the GA and the PSO are directly comparable.
//!
//! - [`CostMatrix`]: dense symmetric matrix, typically built from coordinates
//! - [`Graph`]: explicit `(src, dest) -> cost` map with random cycle sampling

mod graph;
mod matrix;
mod model;

pub use graph::{random_cycles, Graph};
pub use matrix::{build_cost_matrix, tour_cost, CostMatrix};
pub use model::CostModel;
