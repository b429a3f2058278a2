//! Explicit edge-cost graph.

use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

use rand::Rng;
use u_numflow::random::shuffle;

use super::model::CostModel;
use crate::error::{TspError, TspResult};

/// A directed graph holding an explicit cost per ordered vertex pair.
///
/// Symmetric instances add each edge in both directions, typically via
/// [`add_undirected_edge`](Self::add_undirected_edge). A tour over a graph
/// needs a cost for every ordered pair it traverses; any gap surfaces as
/// [`TspError::MissingEdge`].
///
/// # Examples
///
/// ```
/// use u_tsp::cost::{CostModel, Graph};
///
/// let graph = Graph::from_undirected_edges(&[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)]);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.tour_cost(&[0, 1, 2]).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: HashMap<(usize, usize), f64>,
    vertices: BTreeSet<usize>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(a, b, cost)` triples, each added in both directions.
    pub fn from_undirected_edges(edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Self::new();
        for &(a, b, cost) in edges {
            graph.add_undirected_edge(a, b, cost);
        }
        graph
    }

    /// Complete directed graph on `0..n` with independent random integer
    /// weights drawn from `weights` for every ordered pair.
    pub fn complete_random<R: Rng>(n: usize, weights: RangeInclusive<u32>, rng: &mut R) -> Self {
        let mut graph = Self::new();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let w = rng.random_range(weights.clone());
                    graph.add_edge(i, j, f64::from(w));
                }
            }
        }
        graph
    }

    /// Adds the directed edge `src -> dest`.
    ///
    /// An edge that already exists keeps its original cost.
    pub fn add_edge(&mut self, src: usize, dest: usize, cost: f64) {
        if self.has_edge(src, dest) {
            return;
        }
        self.edges.insert((src, dest), cost);
        self.vertices.insert(src);
        self.vertices.insert(dest);
    }

    /// Adds `a -> b` and `b -> a` with the same cost.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, cost: f64) {
        self.add_edge(a, b, cost);
        self.add_edge(b, a, cost);
    }

    /// Whether the directed edge `src -> dest` exists.
    pub fn has_edge(&self, src: usize, dest: usize) -> bool {
        self.edges.contains_key(&(src, dest))
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over `((src, dest), cost)` in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.edges.iter().map(|(&k, &v)| (k, v))
    }

    /// Samples up to `count` distinct random Hamiltonian cycles.
    ///
    /// See [`random_cycles`].
    pub fn random_cycles<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Vec<usize>> {
        let vertices: Vec<usize> = self.vertices.iter().copied().collect();
        random_cycles(&vertices, count, rng)
    }
}

impl CostModel for Graph {
    fn vertices(&self) -> Vec<usize> {
        self.vertices.iter().copied().collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_cost(&self, from: usize, to: usize) -> TspResult<f64> {
        self.edges
            .get(&(from, to))
            .copied()
            .ok_or(TspError::MissingEdge { from, to })
    }
}

/// Samples up to `count` distinct random cycles over `vertices`.
///
/// One start vertex is drawn uniformly and held at position 0 for every
/// candidate; only the remaining positions are shuffled. Exact repeats are
/// dropped, keeping first-seen order, so the result may be shorter than
/// `count`. Returns an empty list when `vertices` is empty.
pub fn random_cycles<R: Rng>(vertices: &[usize], count: usize, rng: &mut R) -> Vec<Vec<usize>> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let start = vertices[rng.random_range(0..vertices.len())];
    let rest: Vec<usize> = vertices.iter().copied().filter(|&v| v != start).collect();

    let mut cycles: Vec<Vec<usize>> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut tail = rest.clone();
        shuffle(&mut tail, rng);
        let mut cycle = Vec::with_capacity(vertices.len());
        cycle.push(start);
        cycle.extend(tail);
        if !cycles.contains(&cycle) {
            cycles.push(cycle);
        }
    }
    cycles
}
