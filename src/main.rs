use std::str::FromStr;

use adjwalk::{
    algorithms::TraversalError,
    config::{TraversalConfig, DEFAULT_RECURSION_LIMIT},
    graph::{Directed, Graph, Orientation, Undirected, VertexId},
};
use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Query {
    /// Depth-first order using an explicit stack.
    Dfs,
    /// Depth-first pre-order by recursion.
    DfsRecursive,
    /// Breadth-first order.
    Bfs,
    /// Whether the graph has a cycle.
    Cycle,
    /// Topological order by DFS post-order.
    Topo,
    /// Topological order by Kahn's algorithm, failing on cycles.
    TopoChecked,
    /// Connected components (weak components for directed graphs).
    Components,
    /// The adjacency lists.
    Show,
}

#[derive(Copy, Clone, Debug)]
struct EdgeArg(usize, usize);

impl FromStr for EdgeArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (source, destination) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("edge {s:?} is not of the form SOURCE:DESTINATION"))?;
        let source = source
            .trim()
            .parse()
            .with_context(|| format!("bad source vertex in {s:?}"))?;
        let destination = destination
            .trim()
            .parse()
            .with_context(|| format!("bad destination vertex in {s:?}"))?;
        Ok(EdgeArg(source, destination))
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "adjwalk",
    about = "Build an adjacency-list graph from the command line and run a traversal or structural query on it."
)]
struct Cli {
    /// Number of vertex slots; ids run from 0 to N-1.
    #[arg(long, short = 'n', value_name = "N", allow_negative_numbers = true)]
    vertices: i64,
    /// An edge, given as SOURCE:DESTINATION. Repeat for more edges.
    #[arg(long = "edge", short = 'e', value_name = "U:V", action = ArgAction::Append)]
    edges: Vec<EdgeArg>,
    /// Store edges one way only.
    #[arg(long)]
    directed: bool,
    /// Which query to run.
    #[arg(long, short = 'q', value_enum, default_value_t = Query::Dfs)]
    query: Query,
    /// Deepest recursion allowed for the recursive queries.
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TraversalConfig::default().with_recursion_limit(cli.recursion_limit);

    let output = if cli.directed {
        let graph = build::<Directed>(&cli)?;
        run_query(
            &graph,
            cli.query,
            &config,
            |g| g.has_cycle_directed_with(&config),
            Graph::<Directed>::weakly_connected_components,
        )?
    } else {
        let graph = build::<Undirected>(&cli)?;
        run_query(
            &graph,
            cli.query,
            &config,
            |g| g.has_cycle_undirected_with(&config),
            Graph::<Undirected>::connected_components,
        )?
    };
    println!("{output}");
    Ok(())
}

fn build<O: Orientation>(cli: &Cli) -> Result<Graph<O>> {
    let mut graph = Graph::<O>::try_new(cli.vertices)?;
    for EdgeArg(source, destination) in &cli.edges {
        graph
            .add_edge(*source, *destination)
            .with_context(|| format!("cannot add edge {source}:{destination}"))?;
    }
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        orientation = O::NAME,
        "graph built"
    );
    Ok(graph)
}

/// Runs `query`; cycle detection and components depend on the orientation
/// and are passed in by the caller.
fn run_query<O: Orientation>(
    graph: &Graph<O>,
    query: Query,
    config: &TraversalConfig,
    has_cycle: impl FnOnce(&Graph<O>) -> Result<bool, TraversalError>,
    components: impl FnOnce(&Graph<O>) -> Vec<Vec<VertexId>>,
) -> Result<String> {
    let order = match query {
        Query::Dfs => graph.dfs_iterative(),
        Query::DfsRecursive => graph.dfs_recursive_with(config)?,
        Query::Bfs => graph.bfs(),
        Query::Topo => graph.topological_order_with(config)?,
        Query::TopoChecked => graph.topological_order_checked()?,
        Query::Cycle => return Ok(has_cycle(graph)?.to_string()),
        Query::Components => {
            return Ok(components(graph)
                .iter()
                .map(Vec::as_slice)
                .map(show_order)
                .join("\n"))
        }
        Query::Show => return Ok(graph.to_string().trim_end().to_owned()),
    };
    Ok(show_order(&order))
}

fn show_order(order: &[VertexId]) -> String {
    order.iter().join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn components_print_one_per_line() {
        let graph = Graph::<Directed>::from_edges(5, [(1, 0), (2, 1), (4, 3)]).unwrap();
        let output = run_query(
            &graph,
            Query::Components,
            &TraversalConfig::default(),
            |g| g.has_cycle_directed(),
            Graph::<Directed>::weakly_connected_components,
        )
        .unwrap();
        assert_eq!(output, "0 1 2\n3 4");
    }

    #[test]
    fn edge_argument_parses_and_rejects() {
        let EdgeArg(source, destination) = " 3:7".parse().unwrap();
        assert_eq!((source, destination), (3, 7));
        assert!("3-7".parse::<EdgeArg>().is_err());
        assert!("3:x".parse::<EdgeArg>().is_err());
    }
}
