use crate::node::{Node, StageInfo, StageKind};
use std::fmt;

/// Calls `observe` on each element on its way through, then yields it
/// unchanged. Never called on a pull that comes back empty.
pub struct PeekTransformer<N, F> {
  parent: N,
  observe: F,
}

impl<N, F> PeekTransformer<N, F> {
  /// Wraps `parent`, observing its elements with `observe`.
  pub fn new(parent: N, observe: F) -> Self {
    Self { parent, observe }
  }
}

impl<N: fmt::Debug, F> fmt::Debug for PeekTransformer<N, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PeekTransformer")
      .field("parent", &self.parent)
      .finish_non_exhaustive()
  }
}

impl<N, F> Node for PeekTransformer<N, F>
where
  N: Node,
  F: FnMut(&N::Item),
{
  type Item = N::Item;

  fn try_pull(&mut self) -> Option<N::Item> {
    let item = self.parent.try_pull()?;
    (self.observe)(&item);
    Some(item)
  }

  fn stages(&self) -> Vec<StageInfo> {
    let mut stages = self.parent.stages();
    stages.push(StageInfo::new::<N::Item>(StageKind::Peek));
    stages
  }
}
