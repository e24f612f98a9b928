//! Range producer.
//!
//! [`RangeProducer`] turns any iterator into a [`Node`]. It is the Rust form
//! of a begin/end position pair: the iterator is the begin cursor and its
//! first `None` is the end marker.
//!
//! The producer fuses itself. After the iterator first reports `None` it is
//! dropped, so iterators that would resume afterwards are never asked again.

use crate::node::{Node, StageInfo, StageKind};

/// Yields the items of a wrapped iterator.
#[derive(Debug, Clone)]
pub struct RangeProducer<I> {
  iter: Option<I>,
}

impl<I: Iterator> RangeProducer<I> {
  /// Creates a producer from anything that can be iterated.
  pub fn new<R>(range: R) -> Self
  where
    R: IntoIterator<IntoIter = I>,
  {
    Self {
      iter: Some(range.into_iter()),
    }
  }

  /// Returns `true` once the producer has reported exhaustion.
  pub fn is_exhausted(&self) -> bool {
    self.iter.is_none()
  }
}

impl<I: Iterator> Node for RangeProducer<I> {
  type Item = I::Item;

  fn try_pull(&mut self) -> Option<I::Item> {
    let item = self.iter.as_mut()?.next();
    if item.is_none() {
      self.iter = None;
    }
    item
  }

  fn stages(&self) -> Vec<StageInfo> {
    vec![StageInfo::new::<I::Item>(StageKind::Source)]
  }
}
