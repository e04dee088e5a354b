//! Edge-list algorithms built on a throwaway `DisjointSetUnion`.
//!
//! Edges are undirected `(u, v)` pairs over nodes `0..len`. A self-loop
//! `(u, u)` counts as a cycle on its own.

use tracing::debug;

use crate::{DisjointSetUnion, MergePolicy, UnionFindResult};

/// Returns the first edge, in input order, whose endpoints were already
/// connected by the edges before it.
///
/// Stops reading edges as soon as one is found, so an out-of-range node after
/// that point is not reported.
pub fn first_redundant_edge(
  len: usize,
  edges: impl IntoIterator<Item = (usize, usize)>,
) -> UnionFindResult<Option<(usize, usize)>> {
  let mut uf = DisjointSetUnion::new(len);
  for (u, v) in edges {
    if !uf.union(u, v)? {
      debug!(u, v, "edge closes a cycle");
      return Ok(Some((u, v)));
    }
  }

  Ok(None)
}

/// Every edge, in input order, whose endpoints were already connected when it
/// was reached. Merges under `policy`; the result does not depend on it.
pub fn redundant_edges_with<P: MergePolicy>(
  policy: P,
  len: usize,
  edges: impl IntoIterator<Item = (usize, usize)>,
) -> UnionFindResult<Vec<(usize, usize)>> {
  let mut uf = DisjointSetUnion::with_policy(len, policy);
  let mut redundant = Vec::new();
  for (u, v) in edges {
    if !uf.union(u, v)? {
      debug!(u, v, "edge closes a cycle");
      redundant.push((u, v));
    }
  }

  Ok(redundant)
}

pub fn has_cycle(
  len: usize,
  edges: impl IntoIterator<Item = (usize, usize)>,
) -> UnionFindResult<bool> {
  Ok(first_redundant_edge(len, edges)?.is_some())
}

/// Number of connected components. Nodes without edges count as their own
/// component.
pub fn count_components(
  len: usize,
  edges: impl IntoIterator<Item = (usize, usize)>,
) -> UnionFindResult<usize> {
  let mut uf = DisjointSetUnion::new(len);
  for (u, v) in edges {
    uf.union(u, v)?;
  }

  Ok(uf.component_count())
}

#[cfg(test)]
mod tests {
  use googletest::{gtest, prelude::*};
  use rstest::rstest;
  use rstest_reuse::{apply, template};

  use crate::{
    count_components, first_redundant_edge, has_cycle, redundant_edges_with, ByRank, BySize,
    MergePolicy, Unbalanced, UnionFindError,
  };

  #[template]
  #[rstest]
  fn merge_policies(#[values(ByRank, BySize, Unbalanced)] policy: impl MergePolicy) {}

  #[rstest]
  #[case(4, vec![(0, 1), (1, 2), (2, 3)], false)]
  #[case(4, vec![(0, 1), (1, 2), (2, 3), (3, 1)], true)]
  #[case(3, vec![(0, 1), (0, 1)], true)]
  #[case(2, vec![(1, 1)], true)]
  #[case(5, vec![(0, 1), (3, 4), (2, 4)], false)]
  #[case(0, vec![], false)]
  #[gtest]
  fn test_has_cycle(#[case] len: usize, #[case] edges: Vec<(usize, usize)>, #[case] expected: bool) {
    expect_eq!(has_cycle(len, edges), Ok(expected));
  }

  #[rstest]
  #[case(5, vec![(0, 1), (1, 2), (3, 4)], 2)]
  #[case(6, vec![(0, 1), (1, 2), (3, 4)], 3)]
  #[case(4, vec![], 4)]
  #[case(4, vec![(0, 1), (1, 0), (2, 3), (3, 2)], 2)]
  #[case(0, vec![], 0)]
  #[gtest]
  fn test_count_components(
    #[case] len: usize,
    #[case] edges: Vec<(usize, usize)>,
    #[case] expected: usize,
  ) {
    expect_eq!(count_components(len, edges), Ok(expected));
  }

  #[gtest]
  fn test_first_redundant_edge() {
    expect_eq!(
      first_redundant_edge(5, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 3)]),
      Ok(Some((2, 0)))
    );
    expect_eq!(first_redundant_edge(3, [(0, 1), (1, 2)]), Ok(None));
  }

  #[apply(merge_policies)]
  #[gtest]
  fn test_redundant_edges_with(policy: impl MergePolicy) {
    expect_eq!(
      redundant_edges_with(policy, 5, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 3), (1, 1)]),
      Ok(vec![(2, 0), (4, 3), (1, 1)])
    );
    expect_eq!(
      redundant_edges_with(policy, 4, [(0, 1), (1, 2), (2, 3)]),
      Ok(vec![])
    );
    expect_eq!(
      redundant_edges_with(policy, 3, [(0, 1), (0, 1), (2, 3)]),
      Err(UnionFindError::InvalidIndex { index: 3, len: 3 })
    );
  }

  #[gtest]
  fn test_out_of_range_edge() {
    expect_eq!(
      count_components(3, [(0, 1), (1, 3)]),
      Err(UnionFindError::InvalidIndex { index: 3, len: 3 })
    );
    expect_eq!(
      has_cycle(3, [(5, 0)]),
      Err(UnionFindError::InvalidIndex { index: 5, len: 3 })
    );
  }
}
