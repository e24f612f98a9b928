//! Limit transformer.
//!
//! [`LimitTransformer`] truncates a pipeline after a fixed number of
//! elements. It is the structural way to stop early: once the budget is
//! spent it reports exhaustion without touching its parent again, so a
//! limited pipeline never pulls more than `n` elements from upstream.
//!
//! # Example
//!
//! ```rust
//! use pullweave::Node;
//! use pullweave::producers::RangeProducer;
//!
//! // Only the first three elements are ever produced by the range.
//! let first: Vec<u32> = RangeProducer::new(0..1_000_000).limit(3).into_pulls().collect();
//! assert_eq!(first, vec![0, 1, 2]);
//! ```
//!
//! # Behavior
//!
//! - `limit(0)` is exhausted immediately and never pulls its parent.
//! - If the parent runs out first, the remaining budget drops to zero and
//!   the parent is not pulled again.
//! - The counter only ever decreases.

use crate::node::{Node, StageInfo, StageKind};

/// Yields at most a fixed number of elements from its parent.
#[derive(Debug, Clone)]
pub struct LimitTransformer<N> {
  parent: N,
  remaining: usize,
}

impl<N> LimitTransformer<N> {
  /// Wraps `parent`, letting at most `limit` elements through.
  ///
  /// # Arguments
  ///
  /// * `parent` - The node to pull from.
  /// * `limit` - The maximum number of elements to pull and yield.
  pub fn new(parent: N, limit: usize) -> Self {
    Self {
      parent,
      remaining: limit,
    }
  }

  /// Number of elements this node may still pull.
  pub fn remaining(&self) -> usize {
    self.remaining
  }
}

impl<N: Node> Node for LimitTransformer<N> {
  type Item = N::Item;

  fn try_pull(&mut self) -> Option<N::Item> {
    if self.remaining == 0 {
      return None;
    }
    self.remaining -= 1;
    let item = self.parent.try_pull();
    if item.is_none() {
      self.remaining = 0;
    }
    item
  }

  fn stages(&self) -> Vec<StageInfo> {
    let mut stages = self.parent.stages();
    stages.push(StageInfo::new::<N::Item>(StageKind::Limit));
    stages
  }
}
