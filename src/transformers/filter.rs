use crate::node::{Node, StageInfo, StageKind};
use std::fmt;

/// Yields the parent's elements that `predicate` accepts.
///
/// The predicate sees each parent element exactly once, in parent order, and
/// nothing is pulled ahead of the current call.
pub struct FilterTransformer<N, P> {
  parent: N,
  predicate: P,
}

impl<N, P> FilterTransformer<N, P> {
  /// Wraps `parent`, keeping the elements accepted by `predicate`.
  pub fn new(parent: N, predicate: P) -> Self {
    Self { parent, predicate }
  }
}

impl<N: fmt::Debug, P> fmt::Debug for FilterTransformer<N, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FilterTransformer")
      .field("parent", &self.parent)
      .finish_non_exhaustive()
  }
}

impl<N, P> Node for FilterTransformer<N, P>
where
  N: Node,
  P: FnMut(&N::Item) -> bool,
{
  type Item = N::Item;

  fn try_pull(&mut self) -> Option<N::Item> {
    while let Some(item) = self.parent.try_pull() {
      if (self.predicate)(&item) {
        return Some(item);
      }
    }
    None
  }

  fn stages(&self) -> Vec<StageInfo> {
    let mut stages = self.parent.stages();
    stages.push(StageInfo::new::<N::Item>(StageKind::Filter));
    stages
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::producers::{ArrayProducer, RangeProducer};

  #[test]
  fn test_filter_even_numbers() {
    let data = [1, 2, 3, 4, 5, 6];
    let result: Vec<&i32> = ArrayProducer::new(&data)
      .filter(|x| *x % 2 == 0)
      .into_pulls()
      .collect();
    assert_eq!(result, vec![&2, &4, &6]);
  }

  #[test]
  fn test_filter_empty_input() {
    let data: [i32; 0] = [];
    assert_eq!(ArrayProducer::new(&data).filter(|_| true).count(), 0);
  }

  #[test]
  fn test_filter_none_match() {
    let mut node = RangeProducer::new(1..=5).filter(|x| *x > 10);
    assert_eq!(node.try_pull(), None);
    assert_eq!(node.try_pull(), None);
  }

  #[test]
  fn test_filter_with_strings() {
    let words = vec!["apple".to_string(), "banana".to_string(), "avocado".to_string()];
    let result: Vec<&String> = ArrayProducer::new(&words)
      .filter(|s| s.starts_with('a'))
      .into_pulls()
      .collect();
    assert_eq!(result, vec!["apple", "avocado"]);
  }

  #[test]
  fn test_filter_evaluates_predicate_once_per_element() {
    let mut calls = Vec::new();
    let mut node = RangeProducer::new(0..5).filter(|x| {
      calls.push(*x);
      *x == 2
    });
    assert_eq!(node.try_pull(), Some(2));
    drop(node);
    assert_eq!(calls, vec![0, 1, 2]);
  }
}
