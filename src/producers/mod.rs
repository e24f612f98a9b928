//! Source adapters: nodes that hand out the elements of an existing, bounded
//! sequence one pull at a time.
//!
//! None of them copy or own the backing storage. The caller keeps it alive
//! and length-stable for as long as the pipeline exists, which the borrow
//! checker enforces through the `'a` lifetimes below.

/// Slice and array sources.
pub mod array;
/// Sources over collections iterated by reference.
pub mod container;
/// The always-exhausted source.
pub mod empty;
pub mod range;

pub use array::ArrayProducer;
pub use container::ContainerProducer;
pub use empty::{EmptyProducer, empty};
pub use range::RangeProducer;
