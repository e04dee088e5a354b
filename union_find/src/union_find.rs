use std::{collections::BTreeMap, marker::PhantomData};

use tracing::trace;

use crate::{ByRank, MergePolicy, UnionFindError, UnionFindResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
  /// The index of parent of this node (self if root).
  parent: usize,
  /// Merge priority of the tree under this element. Stale for non-roots.
  metric: usize,
}

/// A partition of `0..len` into disjoint sets.
///
/// `find` compresses the full path it walks, and `union` attaches the root
/// with the lower metric (as decided by `P`) under the other. Together these
/// give amortized inverse-Ackermann cost per operation for `ByRank` and
/// `BySize`.
///
/// The structure is not synchronized: `find` writes through `&mut self`, so
/// sharing one across threads requires an outer lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSetUnion<P = ByRank> {
  unique_sets: usize,
  elements: Vec<Node>,
  policy: PhantomData<P>,
}

impl DisjointSetUnion<ByRank> {
  /// Creates `len` singleton sets, merged by rank.
  pub fn new(len: usize) -> Self {
    Self::with_policy(len, ByRank)
  }
}

impl<P: MergePolicy> DisjointSetUnion<P> {
  pub fn with_policy(len: usize, _policy: P) -> Self {
    let elements = (0..len)
      .map(|idx| Node {
        parent: idx,
        metric: P::INITIAL,
      })
      .collect();

    Self {
      unique_sets: len,
      elements,
      policy: PhantomData,
    }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Number of disjoint sets currently present.
  pub fn component_count(&self) -> usize {
    self.unique_sets
  }

  fn check_index(&self, node_id: usize) -> UnionFindResult<usize> {
    if node_id < self.len() {
      Ok(node_id)
    } else {
      Err(UnionFindError::InvalidIndex {
        index: node_id,
        len: self.len(),
      })
    }
  }

  /// Finds the root of `node_id`, then points every node on the way directly
  /// at it. `node_id` must already be in range.
  fn root_of(&mut self, mut node_id: usize) -> usize {
    let mut root_id = node_id;
    while self.elements[root_id].parent != root_id {
      root_id = self.elements[root_id].parent;
    }

    while node_id != root_id {
      node_id = std::mem::replace(&mut self.elements[node_id].parent, root_id);
    }

    root_id
  }

  /// Gives id of the root of tree that node is in.
  pub fn find(&mut self, node_id: usize) -> UnionFindResult<usize> {
    let node_id = self.check_index(node_id)?;
    Ok(self.root_of(node_id))
  }

  /// Unions the two sets that a and b are in. Returns `false` if they were
  /// already in the same set, in which case nothing is merged.
  ///
  /// Both indices are validated before anything is touched, so a failed call
  /// leaves the structure unchanged.
  pub fn union(&mut self, a_id: usize, b_id: usize) -> UnionFindResult<bool> {
    let a_id = self.check_index(a_id)?;
    let b_id = self.check_index(b_id)?;

    let mut winner = self.root_of(a_id);
    let mut loser = self.root_of(b_id);
    if winner == loser {
      return Ok(false);
    }

    // Attach the lower tree under the higher one. Ties keep `a`'s root.
    if self.elements[winner].metric < self.elements[loser].metric {
      std::mem::swap(&mut winner, &mut loser);
    }
    let metric = P::merged(self.elements[winner].metric, self.elements[loser].metric);
    self.elements[loser].parent = winner;
    self.elements[winner].metric = metric;

    // Two sets have joined, reducing the number of unique sets by one.
    self.unique_sets -= 1;
    trace!(winner, loser, metric, "merged sets");

    Ok(true)
  }

  pub fn connected(&mut self, a_id: usize, b_id: usize) -> UnionFindResult<bool> {
    let a_id = self.check_index(a_id)?;
    let b_id = self.check_index(b_id)?;
    Ok(self.root_of(a_id) == self.root_of(b_id))
  }

  /// Number of elements in the set containing `node_id`.
  ///
  /// Constant time under `BySize`. Other policies don't track sizes, so this
  /// scans (and compresses) every element.
  pub fn set_size(&mut self, node_id: usize) -> UnionFindResult<usize> {
    let root_id = self.find(node_id)?;
    if P::TRACKS_SIZE {
      return Ok(self.elements[root_id].metric);
    }
    Ok(
      (0..self.len())
        .filter(|&idx| self.root_of(idx) == root_id)
        .count(),
    )
  }

  /// Maps each root to the sorted members of its set. Compresses every path
  /// as a side effect.
  pub fn components_snapshot(&mut self) -> BTreeMap<usize, Vec<usize>> {
    let mut components = BTreeMap::<usize, Vec<usize>>::new();
    for idx in 0..self.len() {
      let root_id = self.root_of(idx);
      components.entry(root_id).or_default().push(idx);
    }
    components
  }
}
