//! Combinator nodes. Each one wraps exactly one parent node plus a closure
//! or a count, and is itself a [`Node`](crate::node::Node).
//!
//! They are normally built through the composition methods on `Node`
//! (`filter`, `map`, `flat_map`, `peek`, `limit`) rather than by name.

/// Predicate filtering.
pub mod filter;
pub mod flat_map;
pub mod limit;
/// Element transformation.
pub mod map;
/// Side-effect observation.
pub mod peek;

pub use filter::FilterTransformer;
pub use flat_map::FlatMapTransformer;
pub use limit::LimitTransformer;
pub use map::MapTransformer;
pub use peek::PeekTransformer;
