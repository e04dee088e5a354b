//! Printed walk-through of union-find on a few small graphs.

use itertools::Itertools;
use union_find::{count_components, first_redundant_edge, DisjointSetUnion, MergePolicy};

use crate::DemoResult;

fn show_edges(edges: &[(usize, usize)]) -> String {
  edges.iter().map(|(u, v)| format!("({u}, {v})")).join(" ")
}

fn cycle_example(nodes: usize, edges: &[(usize, usize)]) -> DemoResult {
  println!("{nodes} nodes, edges {}", show_edges(edges));
  match first_redundant_edge(nodes, edges.iter().copied())? {
    Some((u, v)) => println!("  {u} and {v} are already connected, so ({u}, {v}) closes a cycle"),
    None => println!("  every edge joined two different sets, so there is no cycle"),
  }
  Ok(())
}

fn component_example(nodes: usize, edges: &[(usize, usize)]) -> DemoResult {
  println!("{nodes} nodes, edges {}", show_edges(edges));
  println!(
    "  {} components, isolated nodes count on their own",
    count_components(nodes, edges.iter().copied())?
  );
  Ok(())
}

fn chain_example<P: MergePolicy>(policy: P, nodes: usize) -> DemoResult {
  if nodes == 0 {
    println!("an empty chain has no components");
    return Ok(());
  }

  let mut uf = DisjointSetUnion::with_policy(nodes, policy);
  for i in 1..nodes {
    uf.union(i - 1, i)?;
  }

  let root_id = uf.find(nodes - 1)?;
  println!(
    "chained {nodes} nodes: {} component, every find resolves to {root_id}",
    uf.component_count()
  );
  Ok(())
}

pub fn run<P: MergePolicy>(policy: P) -> DemoResult {
  println!("Cycle detection: union each edge, a failed union means a cycle.");
  cycle_example(4, &[(0, 1), (1, 2), (2, 3)])?;
  cycle_example(4, &[(0, 1), (1, 2), (2, 3), (3, 1)])?;

  println!();
  println!("Component counting: start with one set per node, each merge removes one.");
  component_example(5, &[(0, 1), (1, 2), (3, 4)])?;
  component_example(6, &[(0, 1), (1, 2), (3, 4)])?;

  println!();
  println!("Path compression flattens long chains after a single find.");
  chain_example(policy, 8)?;
  Ok(())
}
