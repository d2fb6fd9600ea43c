//! This module includes the reduction rules that shrink a parameterized vertex cover instance
//! `(G, k)` to an equivalent kernel before branching.
//! These rules include:
//! * `SelfLoop`-rule: a node with a self-loop is in every cover.
//! * `DegreeOne`-rule: the neighbor of a node of degree 1 can be put into the cover without loss.
//! * `HighDegree`-rule: a node with more than `k` neighbors has to be in every cover of size `k`,
//! since otherwise all of its neighbors would be.
//!
//! After no rule applies anymore, a graph with more than `k^2` edges can not be covered by `k`
//! nodes of degree at most `k`, and the instance is rejected.

use crate::bounded_search::{DegreeBranching, VCOracle};
use crate::graph::{Cover, DyUGraph};
use crate::vc_instance::VCInstance;
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    SelfLoop,
    DegreeOne,
    HighDegree,
}

/// The reduced instance together with the nodes that the reductions forced into the cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    pub graph: DyUGraph,
    /// The budget left for covering `graph`.
    pub budget: isize,
    pub forced: Cover,
    /// Every applied rule and the node it put into the cover, in order of application.
    pub reductions: Vec<(Rule, usize)>,
}

impl Kernel {

    /// Combines a cover of the kernel with the forced nodes into a cover of the original graph.
    pub fn lift(&self, mut witness: Cover) -> Cover {
        witness.extend(&self.forced);
        witness
    }

}

/// Reduces `(graph, k)` exhaustively.
/// Returns `None` if the reductions prove that `graph` has no vertex cover of size at most `k`.
pub fn kernelize(graph: &DyUGraph, k: isize) -> Option<Kernel> {
    let mut ins = VCInstance::new(graph.clone(), k);
    let mut reductions = Vec::new();
    for node in graph.self_loops() {
        ins.add_to_solution(node);
        reductions.push((Rule::SelfLoop, node));
        trace!("self-loop rule forced node {}", node);
    }
    loop {
        if ins.budget() < 0 {
            debug!("kernelization exceeded the budget k = {} after {} reductions", k, reductions.len());
            return None
        }
        match ins.apply_first_rule() {
            Some((rule, node)) => {
                trace!("{:?} rule forced node {}", rule, node);
                reductions.push((rule, node));
            },
            None => break,
        }
    }
    let budget = ins.budget();
    let num_edges = ins.graph.num_edges();
    if num_edges as isize > budget.saturating_mul(budget) {
        debug!("kernel with {} edges exceeds the bound {}^2", num_edges, budget);
        return None
    }
    debug!("kernel: {} edges, budget {}, {} forced nodes", num_edges, budget, ins.solution.len());
    Some(Kernel {
        graph: ins.graph,
        budget,
        forced: ins.solution,
        reductions,
    })
}

impl VCInstance {

    /// Scans the nodes in index order and applies the `DegreeOne`- or `HighDegree`-rule to the
    /// first node where one of them fits.
    /// Returns the applied rule and the node put into the solution.
    fn apply_first_rule(&mut self) -> Option<(Rule, usize)> {
        let budget = self.budget();
        let hit = self.graph.nodes().find_map(|node| {
            let degree = self.graph.degree(node);
            if degree == 1 {
                let neighbor = *self.graph.neighbors(node).iter().next().expect("`node`s degree is 1");
                Some((Rule::DegreeOne, neighbor))
            } else if degree as isize > budget {
                Some((Rule::HighDegree, node))
            } else {
                None
            }
        });
        if let Some((_, node)) = hit {
            self.add_to_solution(node);
        }
        hit
    }

}

/// Kernelizes the instance and decides the kernel with `inner` (by default `DegreeBranching`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Kernelized<O = DegreeBranching> {
    inner: O,
}

impl<O: VCOracle> Kernelized<O> {

    pub fn with_inner(inner: O) -> Self {
        Kernelized { inner }
    }

}

impl<O: VCOracle> VCOracle for Kernelized<O> {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        if k < 0 {
            return None
        }
        let kernel = kernelize(graph, k)?;
        self.inner
            .decide(&kernel.graph, kernel.budget)
            .map(|witness| kernel.lift(witness))
    }

    fn name(&self) -> &'static str {
        "kernelized"
    }
}
