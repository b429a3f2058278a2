//! Permutation operators: PMX crossover and swap mutation.
//!
//! Both operators draw positions with [`cut_points`]: `a` uniform in
//! `[0, n-2]`, then `b` uniform in `[a+1, n-1]`.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use std::collections::HashMap;

use rand::Rng;

use crate::error::{TspError, TspResult};

/// Draws two positions `a < b` within `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "cut points need at least 2 positions");
    let a = rng.random_range(0..=n - 2);
    let b = rng.random_range(a + 1..=n - 1);
    (a, b)
}

/// Partially Mapped Crossover (PMX) with random cut points.
///
/// Returns two children. Fails with [`TspError::InvalidInput`] if the
/// parents are shorter than 2 or are not permutations of the same values.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> TspResult<(Vec<usize>, Vec<usize>)> {
    if parent1.len() < 2 {
        return Err(TspError::invalid("PMX needs tours of at least 2 cities"));
    }
    let (c1, c2) = cut_points(parent1.len(), rng);
    pmx_with_cuts(parent1, parent2, c1, c2)
}

/// PMX with an explicit inclusive segment `[c1, c2]`.
///
/// Child 1 takes `parent2[c1..=c2]` verbatim and fills every other position
/// `i` from `parent1[i]`. When that value is already in the child at some
/// position `p`, the candidate becomes `parent1[p]`, repeated until a free
/// value turns up. Child 2 mirrors this with the parents swapped.
///
/// ```
/// use u_tsp::ga::operators::pmx_with_cuts;
///
/// let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
/// let p2 = [3, 7, 5, 1, 6, 0, 2, 4];
/// let (c1, c2) = pmx_with_cuts(&p1, &p2, 3, 5).unwrap();
/// assert_eq!(c1, vec![5, 3, 2, 1, 6, 0, 4, 7]);
/// assert_eq!(c2, vec![1, 7, 0, 3, 4, 5, 2, 6]);
/// ```
pub fn pmx_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    c1: usize,
    c2: usize,
) -> TspResult<(Vec<usize>, Vec<usize>)> {
    let n = parent1.len();
    if n != parent2.len() {
        return Err(TspError::invalid(format!(
            "parents differ in length: {n} vs {}",
            parent2.len()
        )));
    }
    if c1 > c2 || c2 >= n {
        return Err(TspError::invalid(format!(
            "segment [{c1}, {c2}] is outside 0..{n}"
        )));
    }
    if !same_elements(parent1, parent2) {
        return Err(TspError::invalid(
            "parents are not permutations of the same cities",
        ));
    }

    let child1 = pmx_build_child(parent2, parent1, c1, c2)?;
    let child2 = pmx_build_child(parent1, parent2, c1, c2)?;
    Ok((child1, child2))
}

/// Build one PMX child: segment from `donor`, everything else from `filler`.
fn pmx_build_child(
    donor: &[usize],
    filler: &[usize],
    c1: usize,
    c2: usize,
) -> TspResult<Vec<usize>> {
    let n = filler.len();
    let mut child: Vec<Option<usize>> = vec![None; n];
    // value -> position in child
    let mut placed: HashMap<usize, usize> = HashMap::with_capacity(n);

    for i in c1..=c2 {
        child[i] = Some(donor[i]);
        placed.insert(donor[i], i);
    }

    for i in (0..c1).chain(c2 + 1..n) {
        let mut gene = filler[i];
        let mut steps = 0;
        while let Some(&at) = placed.get(&gene) {
            steps += 1;
            if steps > n {
                return Err(TspError::invalid(format!(
                    "PMX mapping chain from position {i} does not terminate"
                )));
            }
            gene = filler[at];
        }
        child[i] = Some(gene);
        placed.insert(gene, i);
    }

    child
        .into_iter()
        .collect::<Option<Vec<usize>>>()
        .ok_or_else(|| TspError::invalid("PMX left a position unfilled"))
}

/// Swap mutation: exchange the values at two positions drawn by [`cut_points`].
///
/// Returns the swapped positions, or `None` for tours shorter than 2.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) -> Option<(usize, usize)> {
    if tour.len() < 2 {
        return None;
    }
    let (a, b) = cut_points(tour.len(), rng);
    tour.swap(a, b);
    Some((a, b))
}

fn same_elements(a: &[usize], b: &[usize]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b && a.windows(2).all(|w| w[0] != w[1])
}
