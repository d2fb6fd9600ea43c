//! Constructions of common graph families.
//!
//! All constructions are deterministic. `gnp()` draws its edges from a `StdRng` seeded with the
//! given seed, so the same seed always yields the same graph.

use crate::graph::DyUGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> DyUGraph {
    let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    DyUGraph::from_edges(n, &edges).expect("all endpoints are below `n`")
}

/// The cycle on `n` nodes. For `n < 3` this is a path.
pub fn cycle(n: usize) -> DyUGraph {
    let mut graph = path(n);
    if n >= 3 {
        graph.add_edge(n - 1, 0).expect("all endpoints are below `n`");
    }
    graph
}

/// The star with center `0` and the leaves `1..=leaves`.
pub fn star(leaves: usize) -> DyUGraph {
    let edges: Vec<(usize, usize)> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    DyUGraph::from_edges(leaves + 1, &edges).expect("all endpoints are at most `leaves`")
}

/// The complete graph on `n` nodes.
pub fn complete(n: usize) -> DyUGraph {
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();
    DyUGraph::from_edges(n, &edges).expect("all endpoints are below `n`")
}

/// The `rows` x `cols` grid. Node `(r, c)` has id `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> DyUGraph {
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let id = r * cols + c;
            if c + 1 < cols {
                edges.push((id, id + 1));
            }
            if r + 1 < rows {
                edges.push((id, id + cols));
            }
        }
    }
    DyUGraph::from_edges(rows * cols, &edges).expect("all endpoints are below `rows * cols`")
}

/// An Erdős–Rényi graph: each of the `n(n-1)/2` possible edges is present with probability `p`.
pub fn gnp(n: usize, p: f64, seed: u64) -> DyUGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = p.clamp(0.0, 1.0);
    let mut graph = DyUGraph::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(i, j).expect("all endpoints are below `n`");
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_sizes_test() {
        assert_eq!(path(5).num_edges(), 4);
        assert_eq!(path(0).num_nodes(), 0);
        assert_eq!(cycle(5).num_edges(), 5);
        assert_eq!(cycle(2).num_edges(), 1);
        assert_eq!(star(5).num_edges(), 5);
        assert_eq!(star(5).degree(0), 5);
        assert_eq!(complete(5).num_edges(), 10);
        assert_eq!(grid(3, 4).num_edges(), 17);
    }

    #[test]
    fn gnp_is_seeded_test() {
        assert_eq!(gnp(20, 0.3, 7), gnp(20, 0.3, 7));
        assert!(gnp(10, 0.0, 1).has_no_edges());
        assert_eq!(gnp(10, 1.0, 1), complete(10));
        assert!(gnp(30, 0.5, 3).check_symmetry().is_ok());
    }

}
