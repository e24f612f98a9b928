//! # Error Handling
//!
//! Errors raised by pullweave itself. Exhaustion of a node is never an error:
//! it is the normal `None` signal of [`Node::try_pull`](crate::node::Node::try_pull).
//!
//! Failures inside caller-supplied closures are not wrapped here. Panics
//! unwind through the pipeline untouched, and fallible callbacks passed to
//! [`try_for_each`](crate::node::Node::try_for_each) get their own error type
//! handed back unmodified.

use thiserror::Error;

/// Errors produced while building a pipeline or loading its configuration.
#[derive(Debug, Error)]
pub enum PipelineError {
  /// A position pair did not describe a valid window of the backing slice.
  #[error("invalid range {begin}..{end} over a sequence of length {len}")]
  InvalidRange {
    /// Requested start position.
    begin: usize,
    /// Requested end position (exclusive).
    end: usize,
    /// Length of the backing sequence.
    len: usize,
  },
  /// A consumer configuration could not be parsed.
  #[error("invalid consumer configuration: {0}")]
  Config(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
