//! # Node Protocol
//!
//! Every stage of a pullweave pipeline, source or combinator, implements
//! [`Node`]. The protocol is a single operation, [`Node::try_pull`], which
//! produces the next element or `None` once the node is exhausted.
//!
//! ## Overview
//!
//! - **Pull-based**: nothing happens until a terminal operation pulls the
//!   outermost node, which pulls its parent, and so on down to the source.
//! - **Static dispatch**: every combinator is a generic struct over its parent
//!   and its closure, so a whole chain monomorphizes into one inlined loop.
//! - **Idempotent exhaustion**: once `try_pull` returns `None` it keeps
//!   returning `None`. A node never revives.
//! - **Single-pass**: a drained pipeline cannot be rewound. Build a new one
//!   over the same source to iterate again.
//!
//! ## Element Ownership
//!
//! Pass-through stages (sources, filter, peek, limit) yield exactly what
//! their parent yields, so a pipeline over borrowed storage hands out
//! `&'a T` references into that storage. Value-producing stages (map, the
//! children of a flat-map) yield owned values. Each pulled element belongs to
//! the caller, so there is no single-slot buffer to outlive.
//!
//! ## Example
//!
//! ```rust
//! use pullweave::Node;
//! use pullweave::producers::ArrayProducer;
//!
//! let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let total: i32 = ArrayProducer::new(&data)
//!   .filter(|x| *x % 2 == 0)
//!   .map(|x| x * 10)
//!   .sum();
//! assert_eq!(total, 200);
//! ```

use crate::consumer::{Consumer, ConsumerConfig};
use crate::transformers::{
  FilterTransformer, FlatMapTransformer, LimitTransformer, MapTransformer, PeekTransformer,
};
use num_traits::Zero;
use serde::Serialize;
use std::fmt;
use std::ops::Add;

/// A type-erased node, for chains whose stage types must be unified.
pub type BoxNode<'a, T> = Box<dyn Node<Item = T> + 'a>;

/// The kind of a pipeline stage, as reported by [`Node::stages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StageKind {
  /// A source adapter over existing data.
  Source,
  /// A [`FilterTransformer`].
  Filter,
  /// A [`MapTransformer`].
  Map,
  /// A [`FlatMapTransformer`].
  FlatMap,
  /// A [`PeekTransformer`].
  Peek,
  /// A [`LimitTransformer`].
  Limit,
  /// A user-defined node that does not describe itself.
  Custom,
}

/// Type-level description of one stage in a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StageInfo {
  /// What the stage does.
  pub kind: StageKind,
  /// Fully qualified name of the element type the stage yields.
  pub item_type: &'static str,
}

impl StageInfo {
  /// Describes a stage of `kind` yielding elements of type `T`.
  pub fn new<T: ?Sized>(kind: StageKind) -> Self {
    Self {
      kind,
      item_type: std::any::type_name::<T>(),
    }
  }
}

impl fmt::Display for StageInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:?}<{}>", self.kind, self.item_type)
  }
}

/// A single stage of a pull pipeline.
///
/// Implementors only provide [`try_pull`](Node::try_pull). Composition
/// methods wrap the receiver in a combinator and terminal methods drain it
/// through a [`Consumer`].
///
/// `try_pull` must advance the node by exactly as much as it takes to
/// produce one element, or to learn that none is left, and must keep
/// returning `None` once it has returned `None`.
pub trait Node {
  /// The element type this node yields.
  type Item;

  /// Pulls the next element, or returns `None` if the node is exhausted.
  fn try_pull(&mut self) -> Option<Self::Item>;

  /// Lists the stages of this pipeline, from the source to this node.
  ///
  /// Only type information is inspected; nothing is pulled.
  fn stages(&self) -> Vec<StageInfo> {
    vec![StageInfo::new::<Self::Item>(StageKind::Custom)]
  }

  /// Keeps only the elements accepted by `predicate`.
  fn filter<P>(self, predicate: P) -> FilterTransformer<Self, P>
  where
    Self: Sized,
    P: FnMut(&Self::Item) -> bool,
  {
    FilterTransformer::new(self, predicate)
  }

  /// Transforms every element with `transform`.
  fn map<U, F>(self, transform: F) -> MapTransformer<Self, F>
  where
    Self: Sized,
    F: FnMut(Self::Item) -> U,
  {
    MapTransformer::new(self, transform)
  }

  /// Expands every element into a child node and concatenates the children.
  fn flat_map<C, F>(self, expand: F) -> FlatMapTransformer<Self, F, C>
  where
    Self: Sized,
    C: Node,
    F: FnMut(Self::Item) -> C,
  {
    FlatMapTransformer::new(self, expand)
  }

  /// Observes every element that passes through, without changing it.
  fn peek<F>(self, observe: F) -> PeekTransformer<Self, F>
  where
    Self: Sized,
    F: FnMut(&Self::Item),
  {
    PeekTransformer::new(self, observe)
  }

  /// Yields at most `n` elements and never pulls more than `n` from upstream.
  fn limit(self, n: usize) -> LimitTransformer<Self>
  where
    Self: Sized,
  {
    LimitTransformer::new(self, n)
  }

  /// Borrows this node so it can be composed or drained without being moved.
  ///
  /// ```rust
  /// use pullweave::Node;
  /// use pullweave::producers::ArrayProducer;
  ///
  /// let data = [1, 2, 3, 4];
  /// let mut source = ArrayProducer::new(&data);
  /// assert_eq!(source.by_ref().limit(3).count(), 3);
  /// assert_eq!(source.remaining(), 1);
  /// ```
  fn by_ref(&mut self) -> &mut Self
  where
    Self: Sized,
  {
    self
  }

  /// Erases the concrete stage type behind a [`BoxNode`].
  fn boxed<'a>(self) -> BoxNode<'a, Self::Item>
  where
    Self: Sized + 'a,
  {
    Box::new(self)
  }

  /// Adapts this node into a standard [`Iterator`].
  fn into_pulls(self) -> Pulls<Self>
  where
    Self: Sized,
  {
    Pulls { node: self }
  }

  /// Wraps this node in a [`Consumer`] carrying `config`.
  fn consumer(self, config: ConsumerConfig) -> Consumer<Self>
  where
    Self: Sized,
  {
    Consumer::with_config(self, config)
  }

  /// Applies `action` to every element, in order.
  fn for_each<F>(self, action: F)
  where
    Self: Sized,
    F: FnMut(Self::Item),
  {
    Consumer::new(self).for_each(action)
  }

  /// Applies a fallible `action` to every element, stopping at the first error.
  fn try_for_each<E, F>(self, action: F) -> Result<(), E>
  where
    Self: Sized,
    F: FnMut(Self::Item) -> Result<(), E>,
  {
    Consumer::new(self).try_for_each(action)
  }

  /// Counts the elements until exhaustion.
  fn count(self) -> usize
  where
    Self: Sized,
  {
    Consumer::new(self).count()
  }

  /// Adds every element onto `S::zero()`.
  fn sum<S>(self) -> S
  where
    Self: Sized,
    S: Zero + Add<Self::Item, Output = S>,
  {
    Consumer::new(self).sum()
  }

  /// Returns `true` at the first element accepted by `predicate`.
  fn any_match<P>(self, predicate: P) -> bool
  where
    Self: Sized,
    P: FnMut(Self::Item) -> bool,
  {
    Consumer::new(self).any_match(predicate)
  }

  /// Returns whether `predicate` accepts every element. Drains the node.
  fn all_match<P>(self, predicate: P) -> bool
  where
    Self: Sized,
    P: FnMut(Self::Item) -> bool,
  {
    Consumer::new(self).all_match(predicate)
  }

  /// Returns whether `predicate` rejects every element. Drains the node.
  fn none_match<P>(self, predicate: P) -> bool
  where
    Self: Sized,
    P: FnMut(Self::Item) -> bool,
  {
    Consumer::new(self).none_match(predicate)
  }
}

impl<N: Node + ?Sized> Node for &mut N {
  type Item = N::Item;

  fn try_pull(&mut self) -> Option<Self::Item> {
    (**self).try_pull()
  }

  fn stages(&self) -> Vec<StageInfo> {
    (**self).stages()
  }
}

impl<N: Node + ?Sized> Node for Box<N> {
  type Item = N::Item;

  fn try_pull(&mut self) -> Option<Self::Item> {
    (**self).try_pull()
  }

  fn stages(&self) -> Vec<StageInfo> {
    (**self).stages()
  }
}

/// Iterator over the elements of a node, created by [`Node::into_pulls`].
#[derive(Debug, Clone)]
pub struct Pulls<N> {
  node: N,
}

impl<N> Pulls<N> {
  /// Returns the wrapped node.
  pub fn into_inner(self) -> N {
    self.node
  }
}

impl<N: Node> Iterator for Pulls<N> {
  type Item = N::Item;

  fn next(&mut self) -> Option<Self::Item> {
    self.node.try_pull()
  }
}

impl<N: Node> std::iter::FusedIterator for Pulls<N> {}
