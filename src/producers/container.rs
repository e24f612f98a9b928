use crate::node::{Node, StageInfo, StageKind};
use crate::producers::RangeProducer;

/// Yields borrowed elements of any collection that can be iterated by
/// reference: `Vec`, `VecDeque`, `BTreeSet`, `HashMap`, and so on.
#[derive(Debug, Clone)]
pub struct ContainerProducer<I> {
  inner: RangeProducer<I>,
}

impl<I: Iterator> ContainerProducer<I> {
  /// Creates a producer over every element of `container`, in its iteration
  /// order.
  pub fn new<'a, C>(container: &'a C) -> Self
  where
    C: ?Sized + 'a,
    &'a C: IntoIterator<IntoIter = I>,
  {
    Self {
      inner: RangeProducer::new(container),
    }
  }
}

impl<I: Iterator> Node for ContainerProducer<I> {
  type Item = I::Item;

  fn try_pull(&mut self) -> Option<I::Item> {
    self.inner.try_pull()
  }

  fn stages(&self) -> Vec<StageInfo> {
    vec![StageInfo::new::<I::Item>(StageKind::Source)]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::{BTreeSet, VecDeque};

  #[test]
  fn test_container_producer_vec() {
    let data = vec![3, 1, 2];
    let mut producer = ContainerProducer::new(&data);
    assert_eq!(producer.try_pull(), Some(&3));
    assert_eq!(producer.try_pull(), Some(&1));
    assert_eq!(producer.try_pull(), Some(&2));
    assert_eq!(producer.try_pull(), None);
  }

  #[test]
  fn test_container_producer_follows_container_order() {
    let set: BTreeSet<i32> = [5, 1, 3].into_iter().collect();
    let producer = ContainerProducer::new(&set);
    let items: Vec<i32> = producer.map(|x| *x).into_pulls().collect();
    assert_eq!(items, vec![1, 3, 5]);
  }

  #[test]
  fn test_container_producer_deque() {
    let mut deque = VecDeque::new();
    deque.push_back(2);
    deque.push_front(1);
    assert_eq!(ContainerProducer::new(&deque).count(), 2);
  }

  #[test]
  fn test_container_producer_borrows_elements() {
    let data = vec![String::from("x")];
    let mut producer = ContainerProducer::new(&data);
    let first = producer.try_pull().unwrap();
    assert!(std::ptr::eq(first, &data[0]));
  }
}
