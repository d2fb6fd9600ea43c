//! Implementation of a simple, undirected graph data structure with basic static and dynamic
//! functions.
//!
//! Removing a node never deletes its id, it only isolates it, so every node keeps its index for
//! the whole lifetime of the graph.

use fxhash::FxHashSet;
use crate::cust_error::GraphError;

/// A set of node ids that covers every edge of a graph.
pub type Cover = FxHashSet<usize>;

/// A simple undirected graph datastructure that supports dynamic behaviour.
///
/// Invariant: `v` is in the neighborhood of `u` iff `u` is in the neighborhood of `v`.
/// Self-loops are allowed, they are consumed by the kernelization.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct DyUGraph {
    adj_list: Vec<FxHashSet<usize>>,
}

// Construction
impl DyUGraph {

    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        DyUGraph {
            adj_list: vec![FxHashSet::default(); n],
        }
    }

    /// Creates a graph with `n` nodes and the given edges. Repeated edges are merged.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = DyUGraph::new(n);
        for (src, trg) in edges {
            graph.add_edge(*src, *trg)?;
        }
        Ok(graph)
    }

    /// Creates a graph from a complete adjacency list.
    /// Fails if a neighbor is out of range or if the adjacency is not symmetric.
    pub fn from_adjacency(adj_list: Vec<FxHashSet<usize>>) -> Result<Self, GraphError> {
        let graph = DyUGraph { adj_list };
        graph.check_symmetry()?;
        Ok(graph)
    }

    /// Inserts the edge `{src, trg}`. Returns `true` if the edge was new.
    pub fn add_edge(&mut self, src: usize, trg: usize) -> Result<bool, GraphError> {
        let n = self.num_nodes();
        for node in [src, trg] {
            if node >= n {
                return Err(GraphError::NodeOutOfRange { node, n })
            }
        }
        let new = self.adj_list[src].insert(trg);
        self.adj_list[trg].insert(src);
        Ok(new)
    }

}

// Static functions
impl DyUGraph {

    /// Returns an `Iterator` over all node ids, isolated or not.
    pub fn nodes(&self) -> impl Iterator<Item=usize> {
        0..self.adj_list.len()
    }

    /// Returns an `Iterator` over all nodes that still have at least one incident edge.
    pub fn nodes_with_edges(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i, adj)| {
                if adj.is_empty() {
                    None
                } else {
                    Some(i)
                }
            })
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the number of edges of `self`. Only exact if `self` has no self-loops.
    pub fn num_edges(&self) -> usize {
        self.adj_list.iter().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    /// Returns the neighborhood of `node`.
    pub fn neighbors(&self, node: usize) -> &FxHashSet<usize> {
        &self.adj_list[node]
    }

    /// Returns the degree of `node`. A self-loop counts once.
    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Checks if `node` has a self-loop.
    pub fn has_self_loop(&self, node: usize) -> bool {
        self.adj_list[node].contains(&node)
    }

    /// Returns all nodes with a self-loop in index order.
    pub fn self_loops(&self) -> Vec<usize> {
        self.nodes().filter(|node| self.has_self_loop(*node)).collect()
    }

    /// Returns the first node (by index) with a non-empty neighborhood.
    pub fn first_non_isolated(&self) -> Option<usize> {
        self.nodes_with_edges().next()
    }

    /// Returns the first node (by index) of maximum degree, or `None` if `self` has no edges.
    pub fn max_degree_node(&self) -> Option<usize> {
        let mut max_node = None;
        let mut max_degree = 0;
        for (node, neighbors) in self.adj_list.iter().enumerate() {
            if neighbors.len() > max_degree {
                max_degree = neighbors.len();
                max_node = Some(node);
            }
        }
        max_node
    }

    /// Returns an iterator over all edges `(src, trg)` with `src <= trg`, ordered by `src`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .flat_map(|(i, adj)| {
                let mut higher: Vec<usize> = adj.iter().copied().filter(|neigh| i <= *neigh).collect();
                higher.sort_unstable();
                higher.into_iter().map(move |neigh| (i, neigh))
            })
    }

    /// Checks if `self` has no edges. Runs in O(n).
    pub fn has_no_edges(&self) -> bool {
        self.adj_list.iter().all(|neighbors| neighbors.is_empty())
    }

    /// Returns a copy of `self` in which every node of `node_set` is isolated.
    pub fn without_nodes(&self, node_set: &FxHashSet<usize>) -> Self {
        let mut clone = self.clone();
        for node in node_set {
            clone.isolate_node(*node);
        }
        clone
    }

    /// Checks if `cover` is a vertex cover of `self`.
    pub fn is_vertex_cover(&self, cover: &Cover) -> bool {
        if cover.iter().any(|node| *node >= self.num_nodes()) {
            return false
        }
        self.edges().all(|(src, trg)| cover.contains(&src) || cover.contains(&trg))
    }

    /// Checks that every neighbor is in range and that the adjacency is symmetric.
    pub fn check_symmetry(&self) -> Result<(), GraphError> {
        let n = self.num_nodes();
        for (u, neighbors) in self.adj_list.iter().enumerate() {
            for v in neighbors {
                if *v >= n {
                    return Err(GraphError::NodeOutOfRange { node: *v, n })
                }
                if !self.adj_list[*v].contains(&u) {
                    return Err(GraphError::Asymmetric { u, v: *v })
                }
            }
        }
        Ok(())
    }

}

// Dynamic functions
impl DyUGraph {

    /// Removes every edge incident to `node`.
    /// Returns the old neighborhood of `node`.
    pub(crate) fn isolate_node(&mut self, node: usize) -> FxHashSet<usize> {
        let neighborhood = std::mem::take(&mut self.adj_list[node]);
        for neighbor in neighborhood.iter() {
            self.adj_list[*neighbor].remove(&node);
        }
        neighborhood
    }

    /// Reinserts the edges between `node` and each former neighbor given as `neighbors`.
    pub(crate) fn reinsert_node(&mut self, node: usize, neighbors: &FxHashSet<usize>) {
        self.adj_list[node] = neighbors.clone();
        for neigh in neighbors {
            self.adj_list[*neigh].insert(node);
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(nodes: &[usize]) -> FxHashSet<usize> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn from_adjacency_test() {
        let sym = vec![set(&[1]), set(&[0, 2]), set(&[1])];
        assert!(DyUGraph::from_adjacency(sym).is_ok());
        let asym = vec![set(&[1]), set(&[2]), set(&[1])];
        assert_eq!(DyUGraph::from_adjacency(asym), Err(GraphError::Asymmetric { u: 0, v: 1 }));
        let out_of_range = vec![set(&[3]), set(&[])];
        assert_eq!(DyUGraph::from_adjacency(out_of_range), Err(GraphError::NodeOutOfRange { node: 3, n: 2 }));
    }

    #[test]
    fn from_edges_test() {
        let graph = DyUGraph::from_edges(4, &[(0, 1), (1, 0), (1, 2), (3, 3)]).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (3, 3)]);
        assert_eq!(graph.self_loops(), vec![3]);
        assert!(DyUGraph::from_edges(2, &[(0, 2)]).is_err());
    }

    #[test]
    fn degree_queries_test() {
        let graph = DyUGraph::from_edges(6, &[(1, 2), (1, 3), (1, 5), (3, 4), (2, 3)]).unwrap();
        assert_eq!(graph.num_edges(), 5);
        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.first_non_isolated(), Some(1));
        // 1 and 3 both have degree 3, the first one wins.
        assert_eq!(graph.max_degree_node(), Some(1));
        assert!(!graph.has_no_edges());
        assert!(DyUGraph::new(5).has_no_edges());
        assert_eq!(DyUGraph::new(5).max_degree_node(), None);
    }

    #[test]
    fn without_nodes_test() {
        let graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let check = graph.clone();
        let reduced = graph.without_nodes(&set(&[1]));
        assert_eq!(graph, check);
        assert_eq!(reduced.num_nodes(), 4);
        assert_eq!(reduced.degree(1), 0);
        assert_eq!(reduced.edges().collect::<Vec<_>>(), vec![(0, 3), (2, 3)]);
        assert!(graph.without_nodes(&set(&[0, 2])).has_no_edges());
    }

    #[test]
    fn isolate_reinsert_test() {
        let mut graph = DyUGraph::from_edges(4, &[(0, 1), (1, 2), (1, 1), (2, 3)]).unwrap();
        let check = graph.clone();
        let old = graph.isolate_node(1);
        assert_eq!(old, set(&[0, 1, 2]));
        assert!(graph.check_symmetry().is_ok());
        assert_eq!(graph.num_edges(), 1);
        graph.reinsert_node(1, &old);
        assert_eq!(graph, check);
    }

    #[test]
    fn is_vertex_cover_test() {
        let graph = DyUGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert!(graph.is_vertex_cover(&set(&[1])));
        assert!(!graph.is_vertex_cover(&set(&[0])));
        assert!(!graph.is_vertex_cover(&set(&[1, 7])));
        assert!(DyUGraph::new(3).is_vertex_cover(&set(&[])));
    }

    fn arb_graph() -> impl Strategy<Value = DyUGraph> {
        (1usize..10).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n), 0..20).prop_map(move |edges| {
                DyUGraph::from_edges(n, &edges).expect("endpoints are in range")
            })
        })
    }

    proptest! {
        #[test]
        fn without_empty_set_is_identity(graph in arb_graph()) {
            prop_assert_eq!(graph.without_nodes(&FxHashSet::default()), graph);
        }

        #[test]
        fn without_composes(graph in arb_graph(), s in prop::collection::vec(0usize..10, 0..5), t in prop::collection::vec(0usize..10, 0..5)) {
            let n = graph.num_nodes();
            let s: FxHashSet<usize> = s.into_iter().filter(|v| *v < n).collect();
            let t: FxHashSet<usize> = t.into_iter().filter(|v| *v < n).collect();
            let union: FxHashSet<usize> = s.union(&t).copied().collect();
            let stepwise = graph.without_nodes(&s).without_nodes(&t);
            prop_assert!(stepwise.check_symmetry().is_ok());
            prop_assert_eq!(stepwise, graph.without_nodes(&union));
        }
    }

}
