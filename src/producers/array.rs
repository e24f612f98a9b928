use crate::error::{PipelineError, Result};
use crate::node::{Node, StageInfo, StageKind};

/// Yields references to the elements of a slice or array, front to back.
#[derive(Debug, Clone)]
pub struct ArrayProducer<'a, T> {
  items: &'a [T],
}

impl<'a, T> ArrayProducer<'a, T> {
  /// Creates a producer over every element of `items`.
  pub fn new(items: &'a [T]) -> Self {
    Self { items }
  }

  /// Creates a producer over a fixed-size array.
  pub fn from_array<const N: usize>(array: &'a [T; N]) -> Self {
    Self::new(array.as_slice())
  }

  /// Creates a producer over the positions `begin..end` of `items`.
  ///
  /// Fails with [`PipelineError::InvalidRange`] if `begin > end` or `end`
  /// lies past the end of `items`.
  pub fn between(items: &'a [T], begin: usize, end: usize) -> Result<Self> {
    items
      .get(begin..end)
      .map(Self::new)
      .ok_or(PipelineError::InvalidRange {
        begin,
        end,
        len: items.len(),
      })
  }

  /// Number of elements not yet pulled.
  pub fn remaining(&self) -> usize {
    self.items.len()
  }
}

impl<'a, T> Node for ArrayProducer<'a, T> {
  type Item = &'a T;

  fn try_pull(&mut self) -> Option<&'a T> {
    let (first, rest) = self.items.split_first()?;
    self.items = rest;
    Some(first)
  }

  fn stages(&self) -> Vec<StageInfo> {
    vec![StageInfo::new::<&'a T>(StageKind::Source)]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_array_producer_yields_in_order() {
    let data = [1, 2, 3];
    let mut producer = ArrayProducer::from_array(&data);
    assert_eq!(producer.try_pull(), Some(&1));
    assert_eq!(producer.try_pull(), Some(&2));
    assert_eq!(producer.try_pull(), Some(&3));
    assert_eq!(producer.try_pull(), None);
  }

  #[test]
  fn test_array_producer_references_backing_storage() {
    let data = vec![10, 20, 30];
    let mut producer = ArrayProducer::new(&data);
    let first = producer.try_pull().unwrap();
    assert!(std::ptr::eq(first, &data[0]));
  }

  #[test]
  fn test_array_producer_exhaustion_is_idempotent() {
    let data: [u8; 0] = [];
    let mut producer = ArrayProducer::from_array(&data);
    for _ in 0..3 {
      assert_eq!(producer.try_pull(), None);
    }
  }

  #[test]
  fn test_array_producer_remaining() {
    let data = [1, 2, 3, 4];
    let mut producer = ArrayProducer::new(&data);
    producer.try_pull();
    assert_eq!(producer.remaining(), 3);
  }

  #[test]
  fn test_between_selects_window() {
    let data = [0, 1, 2, 3, 4, 5];
    let mut producer = ArrayProducer::between(&data, 2, 4).unwrap();
    assert_eq!(producer.try_pull(), Some(&2));
    assert_eq!(producer.try_pull(), Some(&3));
    assert_eq!(producer.try_pull(), None);
  }

  #[test]
  fn test_between_equal_bounds_is_empty() {
    let data = [0, 1, 2];
    let mut producer = ArrayProducer::between(&data, 3, 3).unwrap();
    assert_eq!(producer.try_pull(), None);
  }

  #[test]
  fn test_between_rejects_bad_bounds() {
    let data = [0, 1, 2];
    assert!(matches!(
      ArrayProducer::between(&data, 2, 1),
      Err(PipelineError::InvalidRange {
        begin: 2,
        end: 1,
        len: 3
      })
    ));
    assert!(ArrayProducer::between(&data, 0, 4).is_err());
  }
}
