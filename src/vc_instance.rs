use crate::graph::{Cover, DyUGraph};
use fxhash::FxHashSet;

/// The working state of a single search: a private copy of the graph, the partial solution and
/// the remaining budget.
///
/// Every change to the graph is recorded, so that a branch can be undone with
/// `rebuild_section()` before its sibling branch runs.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct VCInstance {
    pub graph: DyUGraph,
    pub solution: Cover,
    /// The budget the instance was created with.
    k: isize,
    /// Records every node put into the solution together with its old neighborhood.
    alterations: Vec<(usize, FxHashSet<usize>)>,
    /// An id register, that helps to control how much of the graph is rebuild.
    register: Vec<usize>,
}

impl VCInstance {

    pub fn new(graph: DyUGraph, k: isize) -> Self {
        VCInstance {
            graph,
            solution: FxHashSet::default(),
            k,
            alterations: Vec::new(),
            register: vec![0],
        }
    }

    /// Returns the budget that remains after paying for `self.solution`.
    pub fn budget(&self) -> isize {
        self.k - self.solution.len() as isize
    }

    /// Adds `node` to `self.solution` and isolates it in `self.graph`.
    /// Returns `true` and records the alteration if a node was added, returns `false` if `node`
    /// already was in the solution.
    pub fn add_to_solution(&mut self, node: usize) -> bool {
        if !self.solution.insert(node) {
            return false
        }
        let old_neighbors = self.graph.isolate_node(node);
        self.alterations.push((node, old_neighbors));
        true
    }

    /// Adds all nodes in `node_set` to `self.solution` and isolates them in `self.graph`.
    pub fn add_all_to_solution(&mut self, node_set: &FxHashSet<usize>) {
        for node in node_set {
            self.add_to_solution(*node);
        }
    }

    /// Redoes the alterations up to the next register in `self.register`. Pops that register, if the
    /// instance was rebuild completely, pushes `0` to the register.
    pub fn rebuild_section(&mut self) {
        let up_to = self.register.pop().expect("`self.register` should never be empty");
        while self.alterations.len() > up_to {
            let (node, neigh) = self.alterations.pop().expect("`self.alteration` > 0");
            self.solution.remove(&node);
            self.graph.reinsert_node(node, &neigh);
        }
        if self.register.is_empty() {
            self.register.push(0);
        }
    }

    /// Puts a register in `self.register` to denote the current state of the graph.
    pub fn put_register(&mut self) {
        self.register.push(self.alterations.len());
    }

    /// Runs `branch` on `self` and undoes everything it changed afterwards.
    pub fn scoped<T>(&mut self, branch: impl FnOnce(&mut Self) -> T) -> T {
        self.put_register();
        let result = branch(self);
        self.rebuild_section();
        result
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn house() -> DyUGraph {
        DyUGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn alter_rebuild_test() {
        let mut ins = VCInstance::new(house(), 3);
        let check_ins = ins.clone();
        ins.put_register();
        assert!(ins.add_to_solution(2));
        assert!(!ins.add_to_solution(2));
        assert!(ins.add_to_solution(4));
        assert_eq!(ins.graph.num_edges(), 2);
        assert_eq!(ins.budget(), 1);
        ins.rebuild_section();
        assert_eq!(ins, check_ins);
    }

    #[test]
    fn nested_registers_test() {
        let mut ins = VCInstance::new(house(), 3);
        ins.put_register();
        ins.add_to_solution(0);
        let after_first = ins.clone();
        ins.put_register();
        ins.add_all_to_solution(&[2, 3].into_iter().collect());
        assert!(ins.graph.has_no_edges());
        assert_eq!(ins.budget(), 0);
        ins.rebuild_section();
        assert_eq!(ins, after_first);
        ins.rebuild_section();
        assert_eq!(ins, VCInstance::new(house(), 3));
    }

    #[test]
    fn scoped_restores_test() {
        let mut ins = VCInstance::new(house(), 2);
        let check_ins = ins.clone();
        let edges_left = ins.scoped(|ins| {
            ins.add_to_solution(3);
            ins.graph.num_edges()
        });
        assert_eq!(edges_left, 3);
        assert_eq!(ins, check_ins);
    }

}
