use std::fmt::Debug;

/// Decides which root survives a merge, and what metric it carries after.
///
/// Every root stores a single `usize` metric. When two roots meet, the one
/// with the strictly smaller metric is attached under the other; on a tie the
/// second root is attached under the first. The survivor's metric is then
/// replaced with `merged(winner, loser)`.
pub trait MergePolicy: Copy + Debug + Default + Eq {
  /// Metric of a freshly constructed singleton set.
  const INITIAL: usize;

  /// Whether a root's metric is the number of elements in its set.
  const TRACKS_SIZE: bool = false;

  fn merged(winner: usize, loser: usize) -> usize;
}

/// Union by rank: the metric is an upper bound on tree height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByRank;

impl MergePolicy for ByRank {
  const INITIAL: usize = 0;

  fn merged(winner: usize, loser: usize) -> usize {
    if winner == loser {
      winner + 1
    } else {
      winner
    }
  }
}

/// Union by size: the metric is the number of elements in the set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BySize;

impl MergePolicy for BySize {
  const INITIAL: usize = 1;
  const TRACKS_SIZE: bool = true;

  fn merged(winner: usize, loser: usize) -> usize {
    winner + loser
  }
}

/// No balancing at all. Every merge is a tie, so the second root always ends
/// up under the first. Only path compression keeps lookups cheap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl MergePolicy for Unbalanced {
  const INITIAL: usize = 0;

  fn merged(_winner: usize, _loser: usize) -> usize {
    0
  }
}
