//! Implementation of bounded search tree algorithms for the parameterized vertex cover problem.
//!
//! Every algorithm answers the same question: does the graph have a vertex cover of size at most
//! `k`? If so, some cover of that size is returned. The algorithms differ in the base of their
//! running time:
//! * `EdgeBranching`: O(2^k), branches on both endpoints of an edge.
//! * `NeighborhoodBranching`: O(1.618^k), branches on a node or its whole neighborhood.
//! * `DegreeBranching`: O(1.47^k), additionally forces the neighbor of a degree 1 node and
//! branches on a node of maximum degree.
//! * `BruteForce`: O(n^k), tries every node set of size `k`.
//!
//! Each recursive call lowers the budget by at least one, so the recursion depth never exceeds
//! `k + 1`.

use crate::graph::{Cover, DyUGraph};
use crate::vc_instance::VCInstance;

/// A decision oracle for the parameterized vertex cover problem.
pub trait VCOracle {

    /// Returns a vertex cover of `graph` of size at most `k`, or `None` if no such cover exists.
    /// `graph` is never altered, and a negative `k` always yields `None`.
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover>;

    /// A short human readable name of the oracle.
    fn name(&self) -> &'static str;

}

impl<O: VCOracle + ?Sized> VCOracle for Box<O> {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        (**self).decide(graph, k)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<O: VCOracle + ?Sized> VCOracle for &O {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        (**self).decide(graph, k)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Branches on both endpoints of the first remaining edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeBranching;

/// Branches on the first non-isolated node `u`: either `u` or all of `N(u)` is in the cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborhoodBranching;

/// Forces the neighbor of the first degree 1 node if one exists, else branches on the first node
/// `w` of maximum degree: either `w` or all of `N(w)` is in the cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeBranching;

/// Tries all node sets of size `min(k, n)` in lexicographic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl VCOracle for EdgeBranching {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        VCInstance::new(graph.clone(), k).edge_branching()
    }

    fn name(&self) -> &'static str {
        "edge-branching"
    }
}

impl VCOracle for NeighborhoodBranching {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        VCInstance::new(graph.clone(), k).neighborhood_branching()
    }

    fn name(&self) -> &'static str {
        "neighborhood-branching"
    }
}

impl VCOracle for DegreeBranching {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        VCInstance::new(graph.clone(), k).degree_branching()
    }

    fn name(&self) -> &'static str {
        "degree-branching"
    }
}

impl VCOracle for BruteForce {
    fn decide(&self, graph: &DyUGraph, k: isize) -> Option<Cover> {
        if k < 0 {
            return None
        }
        let n = graph.num_nodes();
        let size = (k as usize).min(n);
        // `combination` always holds the indices of the current subset in increasing order.
        let mut combination: Vec<usize> = (0..size).collect();
        loop {
            let candidate: Cover = combination.iter().copied().collect();
            if graph.is_vertex_cover(&candidate) {
                return Some(candidate)
            }
            // Advance to the next combination, or stop after the last one.
            let mut i = size;
            loop {
                if i == 0 {
                    return None
                }
                i -= 1;
                if combination[i] < n - size + i {
                    break
                }
            }
            combination[i] += 1;
            for j in (i + 1)..size {
                combination[j] = combination[j - 1] + 1;
            }
        }
    }

    fn name(&self) -> &'static str {
        "brute-force"
    }
}

impl VCInstance {

    /// O(2^k): takes the first edge `(u, v)` that is not yet covered and tries to put `u`, then
    /// `v` into the solution.
    pub fn edge_branching(&mut self) -> Option<Cover> {
        if self.budget() < 0 {
            return None
        }
        let (src, trg) = match self.graph.edges().next() {
            Some(edge) => edge,
            None => return Some(self.solution.clone()),
        };
        if self.budget() == 0 {
            return None
        }
        for node in [src, trg] {
            let sol = self.scoped(|ins| {
                ins.add_to_solution(node);
                ins.edge_branching()
            });
            if sol.is_some() {
                return sol
            }
        }
        None
    }

    /// O(1.618^k): either the first non-isolated node `u` is in the cover, or all of its
    /// neighbors are.
    pub fn neighborhood_branching(&mut self) -> Option<Cover> {
        if self.budget() < 0 {
            return None
        }
        if self.graph.has_no_edges() {
            return Some(self.solution.clone())
        }
        if self.budget() == 0 {
            return None
        }
        let node = self.graph.first_non_isolated().expect("`self.graph` has edges");
        self.branch_on_node_or_neighbors(node, Self::neighborhood_branching)
    }

    /// O(1.47^k): if a node `u` of degree 1 exists, its neighbor is put into the solution without
    /// branching. Otherwise branches on the first node `w` of maximum degree like
    /// `neighborhood_branching()`.
    pub fn degree_branching(&mut self) -> Option<Cover> {
        if self.budget() < 0 {
            return None
        }
        if self.graph.has_no_edges() {
            return Some(self.solution.clone())
        }
        if self.budget() == 0 {
            return None
        }
        if let Some(leaf) = self.graph.nodes().find(|node| self.graph.degree(*node) == 1) {
            let neighbor = *self.graph.neighbors(leaf).iter().next().expect("`leaf` has degree 1");
            return self.scoped(|ins| {
                ins.add_to_solution(neighbor);
                ins.degree_branching()
            })
        }
        let node = self.graph.max_degree_node().expect("`self.graph` has edges");
        self.branch_on_node_or_neighbors(node, Self::degree_branching)
    }

    /// Any cover either contains `node`, or all of the neighbors of `node`. Tries both in this
    /// order and continues with `recurse`.
    fn branch_on_node_or_neighbors(&mut self, node: usize, recurse: fn(&mut Self) -> Option<Cover>) -> Option<Cover> {
        let sol = self.scoped(|ins| {
            ins.add_to_solution(node);
            recurse(ins)
        });
        if sol.is_some() {
            return sol
        }
        let neighbors = self.graph.neighbors(node).clone();
        self.scoped(|ins| {
            ins.add_all_to_solution(&neighbors);
            recurse(ins)
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;
    use proptest::prelude::*;

    fn oracles() -> Vec<Box<dyn VCOracle>> {
        vec![Box::new(EdgeBranching), Box::new(NeighborhoodBranching), Box::new(DegreeBranching), Box::new(BruteForce)]
    }

    #[test]
    fn path_test() {
        let graph = generators::path(3);
        for oracle in oracles() {
            assert_eq!(oracle.decide(&graph, 0), None, "{}", oracle.name());
            let sol = oracle.decide(&graph, 1);
            assert_eq!(sol, Some([1].into_iter().collect()), "{}", oracle.name());
        }
    }

    #[test]
    fn negative_budget_test() {
        let graph = generators::path(3);
        for oracle in oracles() {
            assert_eq!(oracle.decide(&graph, -1), None, "{}", oracle.name());
            assert_eq!(oracle.decide(&DyUGraph::new(3), -1), None, "{}", oracle.name());
        }
    }

    #[test]
    fn edgeless_test() {
        for oracle in oracles() {
            assert_eq!(oracle.decide(&DyUGraph::new(4), 0), Some(Cover::default()), "{}", oracle.name());
            assert_eq!(oracle.decide(&DyUGraph::new(0), 2), Some(Cover::default()), "{}", oracle.name());
        }
    }

    #[test]
    fn does_not_alter_graph_test() {
        let graph = generators::grid(3, 3);
        let check = graph.clone();
        for oracle in oracles() {
            for k in 0..6 {
                oracle.decide(&graph, k);
                assert_eq!(graph, check);
            }
        }
    }

    #[test]
    fn clique_test() {
        // A complete graph on n nodes needs n - 1 nodes.
        let graph = generators::complete(6);
        for oracle in oracles() {
            assert_eq!(oracle.decide(&graph, 4), None, "{}", oracle.name());
            let sol = oracle.decide(&graph, 5).expect("5 nodes suffice");
            assert!(graph.is_vertex_cover(&sol));
            assert_eq!(sol.len(), 5);
        }
    }

    #[test]
    fn grid_test() {
        // A 3x4 grid is bipartite with a perfect matching of size 6.
        let graph = generators::grid(3, 4);
        for oracle in oracles() {
            assert_eq!(oracle.decide(&graph, 5), None, "{}", oracle.name());
            let sol = oracle.decide(&graph, 6).expect("one side of the bipartition covers");
            assert!(graph.is_vertex_cover(&sol));
        }
    }

    #[test]
    fn self_loop_test() {
        let graph = DyUGraph::from_edges(3, &[(0, 0), (1, 2)]).unwrap();
        for oracle in oracles() {
            assert_eq!(oracle.decide(&graph, 1), None, "{}", oracle.name());
            let sol = oracle.decide(&graph, 2).expect("0 and an endpoint of (1, 2)");
            assert!(sol.contains(&0));
            assert!(graph.is_vertex_cover(&sol));
        }
    }

    #[test]
    fn degree_branching_forces_star_center_test() {
        let graph = generators::star(5);
        assert_eq!(DegreeBranching.decide(&graph, 1), Some([0].into_iter().collect()));
    }

    fn arb_graph() -> impl Strategy<Value = DyUGraph> {
        (1usize..=12, 0.0f64..0.6, any::<u64>()).prop_map(|(n, p, seed)| generators::gnp(n, p, seed))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn oracles_agree(graph in arb_graph()) {
            let n = graph.num_nodes() as isize;
            for k in -1..=n {
                let expected = BruteForce.decide(&graph, k).is_some();
                for oracle in oracles() {
                    let sol = oracle.decide(&graph, k);
                    prop_assert_eq!(sol.is_some(), expected, "{} at k = {}", oracle.name(), k);
                    if let Some(sol) = sol {
                        prop_assert!(graph.is_vertex_cover(&sol));
                        prop_assert!(sol.len() as isize <= k);
                    }
                }
            }
        }

        #[test]
        fn success_is_monotone(graph in arb_graph()) {
            let n = graph.num_nodes() as isize;
            for oracle in oracles() {
                let answers: Vec<bool> = (0..=n).map(|k| oracle.decide(&graph, k).is_some()).collect();
                prop_assert!(answers.windows(2).all(|pair| !pair[0] || pair[1]), "{}", oracle.name());
                prop_assert!(answers[n as usize]);
            }
        }
    }

}
