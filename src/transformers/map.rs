use crate::node::{Node, StageInfo, StageKind};
use std::fmt;

/// Applies `transform` to each parent element and yields the result.
///
/// Every result is an owned value handed to the caller, so it stays valid
/// across later pulls.
pub struct MapTransformer<N, F> {
  parent: N,
  transform: F,
}

impl<N, F> MapTransformer<N, F> {
  /// Wraps `parent`, transforming its elements with `transform`.
  pub fn new(parent: N, transform: F) -> Self {
    Self { parent, transform }
  }
}

impl<N: fmt::Debug, F> fmt::Debug for MapTransformer<N, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MapTransformer")
      .field("parent", &self.parent)
      .finish_non_exhaustive()
  }
}

impl<N, F, U> Node for MapTransformer<N, F>
where
  N: Node,
  F: FnMut(N::Item) -> U,
{
  type Item = U;

  fn try_pull(&mut self) -> Option<U> {
    self.parent.try_pull().map(&mut self.transform)
  }

  fn stages(&self) -> Vec<StageInfo> {
    let mut stages = self.parent.stages();
    stages.push(StageInfo::new::<U>(StageKind::Map));
    stages
  }
}
