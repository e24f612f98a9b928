use crate::node::{Node, StageInfo, StageKind};
use std::fmt;
use std::marker::PhantomData;

/// A node that is exhausted from the start.
pub struct EmptyProducer<T> {
  _phantom: PhantomData<fn() -> T>,
}

/// Creates an [`EmptyProducer`].
pub fn empty<T>() -> EmptyProducer<T> {
  EmptyProducer {
    _phantom: PhantomData,
  }
}

impl<T> Default for EmptyProducer<T> {
  fn default() -> Self {
    empty()
  }
}

impl<T> Clone for EmptyProducer<T> {
  fn clone(&self) -> Self {
    empty()
  }
}

impl<T> fmt::Debug for EmptyProducer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("EmptyProducer")
  }
}

impl<T> Node for EmptyProducer<T> {
  type Item = T;

  fn try_pull(&mut self) -> Option<T> {
    None
  }

  fn stages(&self) -> Vec<StageInfo> {
    vec![StageInfo::new::<T>(StageKind::Source)]
  }
}
