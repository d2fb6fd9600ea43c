//! This module contains all custom errors used in this library.

use thiserror::Error;

/// Violations of the structural invariants of a `DyUGraph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph: node {node} is out of range for a graph with {n} nodes.")]
    NodeOutOfRange { node: usize, n: usize },
    #[error("Graph: adjacency is asymmetric, {v} is a neighbor of {u} but not vice versa.")]
    Asymmetric { u: usize, v: usize },
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An oracle returned a witness that does not cover the graph or exceeds its budget.
    #[error("InvalidSolution: {0}")]
    InvalidSolution(String),
    /// The oracle failed for every budget up to the number of nodes.
    #[error("Oracle found no cover for any k up to {0}")]
    OracleExhausted(usize),
}
