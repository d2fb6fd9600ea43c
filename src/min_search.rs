//! Finds a minimum vertex cover by asking a `VCOracle` for increasing or bisected budgets `k`.
//!
//! The linear search works with any oracle. The binary search relies on the answers being
//! monotone in `k` (a cover of size `k` is also one of size `k + 1`), which holds for all exact
//! oracles of this crate but not for heuristics.

use crate::bounded_search::{BruteForce, DegreeBranching, EdgeBranching, NeighborhoodBranching, VCOracle};
use crate::cust_error::ProcessingError;
use crate::graph::{Cover, DyUGraph};
use crate::kernelization::Kernelized;
use fxhash::FxHashMap;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    Linear,
    #[default]
    Binary,
}

/// The exact oracles shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleKind {
    Edge,
    Neighborhood,
    Degree,
    #[default]
    Kernelized,
    BruteForce,
}

impl OracleKind {

    pub const fn all() -> &'static [OracleKind] {
        &[
            OracleKind::Edge,
            OracleKind::Neighborhood,
            OracleKind::Degree,
            OracleKind::Kernelized,
            OracleKind::BruteForce,
        ]
    }

    pub fn oracle(self) -> Box<dyn VCOracle> {
        match self {
            OracleKind::Edge => Box::new(EdgeBranching),
            OracleKind::Neighborhood => Box::new(NeighborhoodBranching),
            OracleKind::Degree => Box::new(DegreeBranching),
            OracleKind::Kernelized => Box::new(Kernelized::<DegreeBranching>::default()),
            OracleKind::BruteForce => Box::new(BruteForce),
        }
    }

}

/// Which oracle to ask and how to search for the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub oracle: OracleKind,
    pub strategy: SearchStrategy,
}

impl SolverConfig {

    /// Computes a minimum vertex cover of `graph`.
    pub fn solve(&self, graph: &DyUGraph) -> Result<Cover, ProcessingError> {
        find_minimum_cover(graph, &self.oracle.oracle(), self.strategy)
    }

}

/// Computes a minimum vertex cover of `graph` with `oracle` and the given strategy.
pub fn find_minimum_cover<O: VCOracle + ?Sized>(graph: &DyUGraph, oracle: &O, strategy: SearchStrategy) -> Result<Cover, ProcessingError> {
    match strategy {
        SearchStrategy::Linear => find_min_vertex_cover_linear(graph, oracle),
        SearchStrategy::Binary => find_min_vertex_cover_binary(graph, oracle),
    }
}

/// Asks `oracle` for `k = 0, 1, ..., n` and returns the first cover found.
pub fn find_min_vertex_cover_linear<O: VCOracle + ?Sized>(graph: &DyUGraph, oracle: &O) -> Result<Cover, ProcessingError> {
    linear_search_from(graph, oracle, 0)
}

/// Asks `oracle` for `k = start, start + 1, ..., n` and returns the first cover found.
/// `start` has to be a lower bound of the optimum for the result to be minimal.
pub fn linear_search_from<O: VCOracle + ?Sized>(graph: &DyUGraph, oracle: &O, start: isize) -> Result<Cover, ProcessingError> {
    if start < 0 {
        return Err(ProcessingError::InvalidParameter(format!("The initial budget {} is negative.", start)))
    }
    graph.check_symmetry()?;
    let n = graph.num_nodes();
    for k in start..=(n as isize) {
        debug!("{}: linear search tries k = {}", oracle.name(), k);
        if let Some(sol) = oracle.decide(graph, k) {
            validate(graph, &sol, k)?;
            debug!("{}: found a cover of size {}", oracle.name(), sol.len());
            return Ok(sol)
        }
    }
    Err(ProcessingError::OracleExhausted(n))
}

/// Bisects the budget between a failing and a succeeding `k` and returns the cover found for the
/// smallest succeeding `k`.
pub fn find_min_vertex_cover_binary<O: VCOracle + ?Sized>(graph: &DyUGraph, oracle: &O) -> Result<Cover, ProcessingError> {
    graph.check_symmetry()?;
    if graph.has_no_edges() {
        return Ok(Cover::default())
    }
    let n = graph.num_nodes() as isize;
    // Without self-loops, all nodes but one always suffice.
    let high = if graph.self_loops().is_empty() { n - 1 } else { n };
    binary_search_between(graph, oracle, 0, high)
}

/// Binary search on the interval where `low` is known to fail and `high` is known to succeed.
/// Neither bound is asked unless the interval shrinks to `(low, high)` with `high = low + 1`, in
/// which case the answer for `high` is taken from the memo or computed.
pub fn binary_search_between<O: VCOracle + ?Sized>(graph: &DyUGraph, oracle: &O, low: isize, high: isize) -> Result<Cover, ProcessingError> {
    if low < 0 || high < 0 {
        return Err(ProcessingError::InvalidParameter(format!("The budgets {} and {} have to be non-negative.", low, high)))
    }
    if low >= high {
        return Err(ProcessingError::InvalidParameter(format!("The failing budget {} is not below the succeeding budget {}.", low, high)))
    }
    graph.check_symmetry()?;
    let mut memo: FxHashMap<isize, Option<Cover>> = FxHashMap::default();
    let (mut low, mut high) = (low, high);
    while low + 1 < high {
        let mid = (low + high) / 2;
        debug!("{}: binary search on ({}, {}] tries k = {}", oracle.name(), low, high, mid);
        let sol = oracle.decide(graph, mid);
        if sol.is_some() {
            high = mid;
        } else {
            low = mid;
        }
        memo.insert(mid, sol);
    }
    let sol = match memo.remove(&high) {
        Some(memoized) => memoized,
        None => oracle.decide(graph, high),
    };
    match sol {
        Some(sol) => {
            validate(graph, &sol, high)?;
            debug!("{}: found a cover of size {}", oracle.name(), sol.len());
            Ok(sol)
        },
        None => Err(ProcessingError::OracleExhausted(high as usize)),
    }
}

/// Checks that `sol` covers `graph` with at most `k` nodes.
fn validate(graph: &DyUGraph, sol: &Cover, k: isize) -> Result<(), ProcessingError> {
    if !graph.is_vertex_cover(sol) {
        return Err(ProcessingError::InvalidSolution(format!("{} nodes do not cover the graph", sol.len())))
    }
    if sol.len() as isize > k {
        return Err(ProcessingError::InvalidSolution(format!("{} nodes exceed the budget {}", sol.len(), k)))
    }
    Ok(())
}
