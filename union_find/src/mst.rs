//! Minimum spanning forests via Kruskal's algorithm.

use std::ops::Add;

use tracing::debug;

use crate::{DisjointSetUnion, UnionFindResult};

/// Minimum spanning forest of a weighted undirected graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest<W> {
  edges: Vec<(usize, usize, W)>,
  total_weight: W,
  trees: usize,
}

impl<W: Copy> SpanningForest<W> {
  /// Chosen edges, in the order they were accepted (non-decreasing weight).
  pub fn edges(&self) -> &[(usize, usize, W)] {
    &self.edges
  }

  pub fn total_weight(&self) -> W {
    self.total_weight
  }

  /// Number of trees in the forest, one per connected component.
  pub fn tree_count(&self) -> usize {
    self.trees
  }

  /// True if the graph was connected, so the forest is at most one tree. An
  /// empty graph is trivially connected.
  pub fn is_spanning_tree(&self) -> bool {
    self.trees <= 1
  }
}

/// Kruskal's algorithm over nodes `0..len`.
///
/// Edges are sorted stably by weight, so among equal weights the earlier edge
/// wins. Every edge is validated, even after the forest is complete.
pub fn kruskal<W>(
  len: usize,
  edges: impl IntoIterator<Item = (usize, usize, W)>,
) -> UnionFindResult<SpanningForest<W>>
where
  W: Ord + Copy + Add<Output = W> + Default,
{
  let mut edges = edges.into_iter().collect::<Vec<_>>();
  edges.sort_by_key(|&(_, _, weight)| weight);

  let mut uf = DisjointSetUnion::new(len);
  let mut chosen = Vec::with_capacity(len.saturating_sub(1));
  let mut total_weight = W::default();
  for (u, v, weight) in edges {
    if uf.union(u, v)? {
      chosen.push((u, v, weight));
      total_weight = total_weight + weight;
    }
  }
  debug!(
    accepted = chosen.len(),
    trees = uf.component_count(),
    "built spanning forest"
  );

  Ok(SpanningForest {
    edges: chosen,
    total_weight,
    trees: uf.component_count(),
  })
}
