//! # pullweave
//!
//! Lazy, composable, pull-based sequence pipelines in pure Rust.
//!
//! A pipeline is a chain of [`Node`]s: a source adapter over data you already
//! have, wrapped by combinators (`filter`, `map`, `flat_map`, `peek`,
//! `limit`). Nothing runs and no intermediate collection is built until a
//! terminal operation (`for_each`, `count`, `sum`, `any_match`, `all_match`,
//! `none_match`) pulls elements through the chain one at a time.
//!
//! ## Key Features
//!
//! - **Pull-Based**: each stage produces exactly one element per pull
//! - **Zero-Copy Sources**: sources borrow the caller's storage and yield references into it
//! - **Static Dispatch**: every stage is a generic struct, so chains monomorphize and inline
//! - **Stack-Safe Flattening**: runs of empty children are skipped in a loop
//! - **Single-Pass**: a drained pipeline stays drained
//!
//! ## Quick Start
//!
//! ```rust
//! use pullweave::Node;
//! use pullweave::producers::ArrayProducer;
//!
//! let grid = [[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]];
//! let total: i32 = ArrayProducer::new(&grid)
//!   .flat_map(|row| ArrayProducer::new(row))
//!   .sum();
//! assert_eq!(total, 90);
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber.
//! Terminal operations emit debug-level spans and events; the flat-map loop
//! emits trace-level events.

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Terminal operations and their configuration.
pub mod consumer;
/// Error types.
pub mod error;
/// The node protocol and composition surface.
pub mod node;
/// Source adapters over existing sequences.
pub mod producers;
/// Combinator nodes.
pub mod transformers;

pub use consumer::{Consumer, ConsumerConfig, MatchPolicy};
pub use error::{PipelineError, Result};
pub use node::{BoxNode, Node, Pulls, StageInfo, StageKind};

#[cfg(test)]
mod consumer_test;
