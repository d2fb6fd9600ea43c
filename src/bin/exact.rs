//! Binary that generates a graph of a given family, computes an optimal vertex cover and writes
//! the solution to standart out, one node id per line.

use std::error;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use log::info;
use para_cover::{
    cust_error::ProcessingError,
    generators,
    graph::DyUGraph,
    min_search::{OracleKind, SearchStrategy, SolverConfig},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    Path,
    Cycle,
    Star,
    Complete,
    Grid,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OracleArg {
    Edge,
    Neighborhood,
    Degree,
    Kernelized,
    BruteForce,
}

impl From<OracleArg> for OracleKind {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::Edge => OracleKind::Edge,
            OracleArg::Neighborhood => OracleKind::Neighborhood,
            OracleArg::Degree => OracleKind::Degree,
            OracleArg::Kernelized => OracleKind::Kernelized,
            OracleArg::BruteForce => OracleKind::BruteForce,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Linear,
    Binary,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => SearchStrategy::Linear,
            StrategyArg::Binary => SearchStrategy::Binary,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Computes a minimum vertex cover with an exact parameterized solver")]
struct Args {
    /// The graph family to generate.
    #[arg(long, value_enum, default_value_t = Family::Random)]
    family: Family,
    /// Number of nodes (leaves for `star`, side length for `grid`).
    #[arg(short, long, default_value_t = 20)]
    n: usize,
    /// Edge probability for `random`.
    #[arg(short, long, default_value_t = 0.2)]
    p: f64,
    /// Seed for `random`.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = OracleArg::Kernelized)]
    oracle: OracleArg,
    #[arg(long, value_enum, default_value_t = StrategyArg::Binary)]
    strategy: StrategyArg,
}

fn build_graph(args: &Args) -> DyUGraph {
    match args.family {
        Family::Path => generators::path(args.n),
        Family::Cycle => generators::cycle(args.n),
        Family::Star => generators::star(args.n),
        Family::Complete => generators::complete(args.n),
        Family::Grid => generators::grid(args.n, args.n),
        Family::Random => generators::gnp(args.n, args.p, args.seed),
    }
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let graph = build_graph(&args);
    info!("{:?} graph with {} nodes and {} edges", args.family, graph.num_nodes(), graph.num_edges());
    let config = SolverConfig {
        oracle: args.oracle.into(),
        strategy: args.strategy.into(),
    };
    let resu = config.solve(&graph)?;

    // Validate
    if !graph.is_vertex_cover(&resu) {
        return Err(Box::new(ProcessingError::InvalidSolution("the result does not cover the graph".to_owned())));
    }
    info!("minimum vertex cover has size {}", resu.len());

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut nodes: Vec<usize> = resu.into_iter().collect();
    nodes.sort_unstable();
    for node in nodes {
        writeln!(stdout, "{}", node)?;
    }
    Ok(())
}
