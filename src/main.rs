mod edge_list;
mod lesson;

use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use tracing::{info, Level};
use union_find::{
  kruskal, redundant_edges_with, ByRank, BySize, DisjointSetUnion, MergePolicy, Unbalanced,
};

use crate::edge_list::{parse_edges, parse_weighted_edges};

type DemoResult<T = ()> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Runs union-find over edge lists given on the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Maximum level of log events to print.
  #[arg(long, default_value = "INFO")]
  log_level: Level,

  /// How sets pick a surviving root when merged.
  #[arg(long, value_enum, default_value_t = Policy::Rank)]
  policy: Policy,

  #[command(subcommand)]
  command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
  Rank,
  Size,
  Unbalanced,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Reports every edge that closes a cycle.
  Cycle {
    #[arg(short, long)]
    nodes: usize,
    /// Undirected edges, as `u,v`.
    #[arg(allow_hyphen_values = true)]
    edges: Vec<String>,
  },
  /// Prints the connected components.
  Components {
    #[arg(short, long)]
    nodes: usize,
    /// Undirected edges, as `u,v`.
    #[arg(allow_hyphen_values = true)]
    edges: Vec<String>,
  },
  /// Builds a minimum spanning forest with Kruskal's algorithm.
  Mst {
    #[arg(short, long)]
    nodes: usize,
    /// Weighted undirected edges, as `u,v,w`.
    #[arg(allow_hyphen_values = true)]
    edges: Vec<String>,
  },
  /// Walks through a few worked examples.
  Lesson,
}

fn report_cycles<P: MergePolicy>(policy: P, nodes: usize, edges: &[String]) -> DemoResult {
  let redundant = redundant_edges_with(policy, nodes, parse_edges(edges)?)?;

  if redundant.is_empty() {
    println!("no cycle");
  } else {
    println!(
      "cycle found, redundant edges: {}",
      redundant
        .iter()
        .map(|(u, v)| format!("{u},{v}"))
        .join(" ")
    );
  }
  Ok(())
}

fn report_components<P: MergePolicy>(
  mut uf: DisjointSetUnion<P>,
  edges: &[String],
) -> DemoResult {
  for (u, v) in parse_edges(edges)? {
    uf.union(u, v)?;
  }

  println!("{} components", uf.component_count());
  for (root_id, members) in uf.components_snapshot() {
    println!("  root {root_id}: {{{}}}", members.iter().join(", "));
  }
  Ok(())
}

fn report_mst(nodes: usize, edges: &[String]) -> DemoResult {
  let forest = kruskal(nodes, parse_weighted_edges(edges)?)?;

  for (u, v, weight) in forest.edges() {
    println!("  {u} - {v} ({weight})");
  }
  println!(
    "total weight {} across {} tree(s)",
    forest.total_weight(),
    forest.tree_count()
  );
  Ok(())
}

fn run<P: MergePolicy>(policy: P, command: Command) -> DemoResult {
  info!(?policy, "using merge policy");
  match command {
    Command::Cycle { nodes, edges } => report_cycles(policy, nodes, &edges),
    Command::Components { nodes, edges } => {
      report_components(DisjointSetUnion::with_policy(nodes, policy), &edges)
    }
    Command::Mst { nodes, edges } => report_mst(nodes, &edges),
    Command::Lesson => lesson::run(policy),
  }
}

fn main() -> DemoResult {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_max_level(args.log_level)
    .init();

  match args.policy {
    Policy::Rank => run(ByRank, args.command),
    Policy::Size => run(BySize, args.command),
    Policy::Unbalanced => run(Unbalanced, args.command),
  }
}
