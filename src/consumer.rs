//! # Consumer
//!
//! Terminal operations for pullweave pipelines. A [`Consumer`] owns the
//! outermost node of a chain and drives it by calling
//! [`Node::try_pull`](crate::node::Node::try_pull) until it has its answer.
//! It holds no element-type specific logic of its own.
//!
//! ## Overview
//!
//! - **for_each / try_for_each**: run an action on every element
//! - **count**: number of successful pulls until exhaustion
//! - **sum**: fold with `num_traits::Zero::zero()` as the seed
//! - **any_match**: stops at the first accepted element
//! - **all_match / none_match**: drain the whole pipeline by default; see
//!   [`MatchPolicy`]
//!
//! ## Configuration
//!
//! [`ConsumerConfig`] names the consumer for logs and picks the
//! [`MatchPolicy`]. It can be built fluently or loaded from JSON:
//!
//! ```rust
//! use pullweave::{ConsumerConfig, MatchPolicy, Node};
//! use pullweave::producers::ArrayProducer;
//!
//! let config = ConsumerConfig::from_json(r#"{"name":"evens","match_policy":"short_circuit"}"#)?;
//! assert_eq!(config.match_policy(), MatchPolicy::ShortCircuit);
//!
//! let data = [2, 4, 5, 6];
//! let all_even = ArrayProducer::new(&data).consumer(config).all_match(|x| x % 2 == 0);
//! assert!(!all_even);
//! # Ok::<(), pullweave::PipelineError>(())
//! ```
//!
//! ## Logging
//!
//! Each run enters a `consumer` span at debug level, tagged with the
//! operation and the configured name, and reports the number of elements it
//! pulled once it stops.

use crate::error::Result;
use crate::node::Node;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::{debug, debug_span};

/// How [`Consumer::all_match`] and [`Consumer::none_match`] treat a
/// deciding element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
  /// Evaluate the predicate on every element and drain the pipeline before
  /// answering.
  #[default]
  Exhaustive,
  /// Stop pulling as soon as the answer is known.
  ShortCircuit,
}

/// Configuration for a [`Consumer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerConfig {
  /// Optional name used to identify this consumer in logs.
  pub name: Option<String>,
  /// Draining behaviour of `all_match` and `none_match`.
  pub match_policy: MatchPolicy,
}

impl ConsumerConfig {
  /// Parses a configuration from JSON. Missing fields take their defaults.
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  /// Sets the name for this consumer configuration.
  ///
  /// # Arguments
  ///
  /// * `name` - The name to assign to this consumer.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Sets the match policy for this consumer configuration.
  pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
    self.match_policy = policy;
    self
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns the current match policy.
  pub fn match_policy(&self) -> MatchPolicy {
    self.match_policy
  }
}

/// Drives a node to completion.
///
/// Every operation consumes the `Consumer`. To keep access to a node after
/// draining it, build the consumer over [`Node::by_ref`].
#[derive(Debug)]
pub struct Consumer<N> {
  node: N,
  config: ConsumerConfig,
}

impl<N: Node> Consumer<N> {
  /// Creates a consumer with the default configuration.
  pub fn new(node: N) -> Self {
    Self::with_config(node, ConsumerConfig::default())
  }

  /// Creates a consumer with the given configuration.
  pub fn with_config(node: N, config: ConsumerConfig) -> Self {
    Self { node, config }
  }

  /// Returns the configuration of this consumer.
  pub fn config(&self) -> &ConsumerConfig {
    &self.config
  }

  fn span(&self, op: &'static str) -> tracing::Span {
    debug_span!(
      "consumer",
      op,
      name = self.config.name().unwrap_or("consumer")
    )
  }

  /// Applies `action` to every element, in order.
  pub fn for_each<F>(mut self, mut action: F)
  where
    F: FnMut(N::Item),
  {
    let _span = self.span("for_each").entered();
    let mut pulled = 0usize;
    while let Some(item) = self.node.try_pull() {
      pulled += 1;
      action(item);
    }
    debug!(pulled, "pipeline drained");
  }

  /// Applies `action` to every element and returns the first error it reports.
  ///
  /// Pulling stops at that error. Elements already pulled upstream stay
  /// consumed.
  pub fn try_for_each<E, F>(mut self, mut action: F) -> std::result::Result<(), E>
  where
    F: FnMut(N::Item) -> std::result::Result<(), E>,
  {
    let _span = self.span("try_for_each").entered();
    let mut pulled = 0usize;
    while let Some(item) = self.node.try_pull() {
      pulled += 1;
      if let Err(e) = action(item) {
        debug!(pulled, "action failed, stopping");
        return Err(e);
      }
    }
    debug!(pulled, "pipeline drained");
    Ok(())
  }

  /// Counts the elements until exhaustion.
  pub fn count(mut self) -> usize {
    let _span = self.span("count").entered();
    let mut count = 0usize;
    while self.node.try_pull().is_some() {
      count += 1;
    }
    debug!(pulled = count, "pipeline drained");
    count
  }

  /// Adds every element onto `S::zero()`.
  pub fn sum<S>(mut self) -> S
  where
    S: Zero + Add<N::Item, Output = S>,
  {
    let _span = self.span("sum").entered();
    let mut pulled = 0usize;
    let mut sum = S::zero();
    while let Some(item) = self.node.try_pull() {
      pulled += 1;
      sum = sum + item;
    }
    debug!(pulled, "pipeline drained");
    sum
  }

  /// Returns `true` at the first element accepted by `predicate`, without
  /// pulling any further. Returns `false` only after exhaustion.
  pub fn any_match<P>(mut self, mut predicate: P) -> bool
  where
    P: FnMut(N::Item) -> bool,
  {
    let _span = self.span("any_match").entered();
    let mut pulled = 0usize;
    while let Some(item) = self.node.try_pull() {
      pulled += 1;
      if predicate(item) {
        debug!(pulled, "match found");
        return true;
      }
    }
    debug!(pulled, "pipeline drained");
    false
  }

  /// Returns whether `predicate` accepts every element.
  ///
  /// Under [`MatchPolicy::Exhaustive`] the predicate runs on every element
  /// even after one has been rejected.
  pub fn all_match<P>(self, predicate: P) -> bool
  where
    P: FnMut(N::Item) -> bool,
  {
    self.accumulate("all_match", predicate)
  }

  /// Returns whether `predicate` rejects every element.
  ///
  /// Under [`MatchPolicy::Exhaustive`] the predicate runs on every element
  /// even after one has been accepted.
  pub fn none_match<P>(self, mut predicate: P) -> bool
  where
    P: FnMut(N::Item) -> bool,
  {
    self.accumulate("none_match", move |item| !predicate(item))
  }

  // Folds `holds` over the elements with logical AND.
  fn accumulate<P>(mut self, op: &'static str, mut holds: P) -> bool
  where
    P: FnMut(N::Item) -> bool,
  {
    let _span = self.span(op).entered();
    let short_circuit = self.config.match_policy == MatchPolicy::ShortCircuit;
    let mut pulled = 0usize;
    let mut result = true;
    while let Some(item) = self.node.try_pull() {
      pulled += 1;
      result &= holds(item);
      if !result && short_circuit {
        debug!(pulled, "result decided");
        return false;
      }
    }
    debug!(pulled, result, "pipeline drained");
    result
  }
}
