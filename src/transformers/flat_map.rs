//! Flat-map transformer.
//!
//! [`FlatMapTransformer`] expands each parent element into a child node and
//! yields the children's elements back to back: a depth-first concatenation
//! in parent order.
//!
//! # Behavior
//!
//! - At most one child is alive at a time. It is built when the parent
//!   yields, drained element by element, and dropped as soon as it reports
//!   exhaustion. A child is never reused.
//! - Empty children are skipped inside a loop, so any run of them costs
//!   constant stack depth.
//! - Once the parent reports exhaustion the node is done for good and the
//!   parent is not pulled again.
//!
//! # Ownership of children
//!
//! A child may borrow from the source storage (for example a row of a
//! nested array), or own what it iterates (for example a `Vec` produced by an
//! upstream `map`, moved into a [`RangeProducer`](crate::producers::RangeProducer)).
//!
//! ```rust
//! use pullweave::Node;
//! use pullweave::producers::{ArrayProducer, RangeProducer};
//!
//! let grid = [[1, 2], [3, 4]];
//! let sum: i32 = ArrayProducer::new(&grid)
//!   .flat_map(|row| ArrayProducer::new(row))
//!   .sum();
//! assert_eq!(sum, 10);
//!
//! let repeated: Vec<u8> = RangeProducer::new(1..=3u8)
//!   .map(|n| vec![n; n as usize])
//!   .flat_map(|bytes| RangeProducer::new(bytes))
//!   .into_pulls()
//!   .collect();
//! assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
//! ```

use crate::node::{Node, StageInfo, StageKind};
use std::fmt;
use tracing::trace;

/// Concatenates the child nodes produced by `expand` for each parent element.
pub struct FlatMapTransformer<N, F, C> {
  parent: N,
  expand: F,
  current: Option<C>,
  parent_exhausted: bool,
}

impl<N, F, C> FlatMapTransformer<N, F, C> {
  /// Wraps `parent`, expanding each of its elements with `expand`.
  pub fn new(parent: N, expand: F) -> Self {
    Self {
      parent,
      expand,
      current: None,
      parent_exhausted: false,
    }
  }
}

impl<N: fmt::Debug, F, C: fmt::Debug> fmt::Debug for FlatMapTransformer<N, F, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FlatMapTransformer")
      .field("parent", &self.parent)
      .field("current", &self.current)
      .field("parent_exhausted", &self.parent_exhausted)
      .finish_non_exhaustive()
  }
}

impl<N, F, C> Node for FlatMapTransformer<N, F, C>
where
  N: Node,
  C: Node,
  F: FnMut(N::Item) -> C,
{
  type Item = C::Item;

  fn try_pull(&mut self) -> Option<C::Item> {
    loop {
      if let Some(child) = self.current.as_mut() {
        match child.try_pull() {
          Some(item) => return Some(item),
          None => {
            trace!("child node exhausted");
            self.current = None;
          }
        }
      }

      if self.parent_exhausted {
        return None;
      }
      match self.parent.try_pull() {
        Some(element) => self.current = Some((self.expand)(element)),
        None => {
          self.parent_exhausted = true;
          return None;
        }
      }
    }
  }

  fn stages(&self) -> Vec<StageInfo> {
    let mut stages = self.parent.stages();
    stages.push(StageInfo::new::<C::Item>(StageKind::FlatMap));
    stages
  }
}
