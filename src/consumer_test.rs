//! # Consumer Test Suite
//!
//! Tests for the terminal operations driven by [`Consumer`], covering
//! configuration, draining behaviour, short-circuiting and error propagation.
//!
//! Pull counts are observed through [`PullCounter`], a node that counts every
//! `try_pull` it receives, including the ones that report exhaustion.

use crate::consumer::{Consumer, ConsumerConfig, MatchPolicy};
use crate::error::PipelineError;
use crate::node::Node;
use crate::producers::{ArrayProducer, RangeProducer, empty};

struct PullCounter<N> {
  inner: N,
  pulls: usize,
}

impl<N> PullCounter<N> {
  fn new(inner: N) -> Self {
    Self { inner, pulls: 0 }
  }
}

impl<N: Node> Node for PullCounter<N> {
  type Item = N::Item;

  fn try_pull(&mut self) -> Option<N::Item> {
    self.pulls += 1;
    self.inner.try_pull()
  }
}

#[test]
fn test_consumer_config_default() {
  let config = ConsumerConfig::default();
  assert_eq!(config.name(), None);
  assert_eq!(config.match_policy(), MatchPolicy::Exhaustive);
}

#[test]
fn test_consumer_config_builder() {
  let config = ConsumerConfig::default()
    .with_name("totals")
    .with_match_policy(MatchPolicy::ShortCircuit);
  assert_eq!(config.name(), Some("totals"));
  assert_eq!(config.match_policy(), MatchPolicy::ShortCircuit);

  let consumer = Consumer::with_config(empty::<i32>(), config.clone());
  assert_eq!(consumer.config(), &config);
}

#[test]
fn test_consumer_config_from_json_defaults_missing_fields() {
  let config = ConsumerConfig::from_json(r#"{"name":"audit"}"#).unwrap();
  assert_eq!(config.name(), Some("audit"));
  assert_eq!(config.match_policy(), MatchPolicy::Exhaustive);

  let config = ConsumerConfig::from_json("{}").unwrap();
  assert_eq!(config, ConsumerConfig::default());
}

#[test]
fn test_consumer_config_from_json_rejects_unknown_policy() {
  let err = ConsumerConfig::from_json(r#"{"match_policy":"sometimes"}"#).unwrap_err();
  assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn test_for_each_visits_in_order() {
  let data = [3, 1, 4, 1, 5];
  let mut seen = Vec::new();
  ArrayProducer::new(&data).for_each(|x| seen.push(*x));
  assert_eq!(seen, vec![3, 1, 4, 1, 5]);
}

#[test]
fn test_count() {
  assert_eq!(RangeProducer::new(0..17).count(), 17);
  assert_eq!(empty::<()>().count(), 0);
}

#[test]
fn test_count_stops_after_first_exhaustion() {
  let mut counter = PullCounter::new(RangeProducer::new(0..4));
  assert_eq!(counter.by_ref().count(), 4);
  assert_eq!(counter.pulls, 5);
}

#[test]
fn test_sum_of_references() {
  let data = [1, 2, 3, 4];
  let total: i32 = ArrayProducer::new(&data).sum();
  assert_eq!(total, 10);
}

#[test]
fn test_sum_of_floats() {
  let data = [0.5f64, 0.25, 0.25];
  let total: f64 = ArrayProducer::new(&data).sum();
  assert!((total - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_sum_of_empty_is_zero() {
  let total: u64 = empty::<u64>().sum();
  assert_eq!(total, 0);
}

#[test]
fn test_any_match_short_circuits() {
  let data = [1, 3, 4, 5, 7];
  let mut counter = PullCounter::new(ArrayProducer::new(&data));
  assert!(counter.by_ref().any_match(|x| x % 2 == 0));
  assert_eq!(counter.pulls, 3);
}

#[test]
fn test_any_match_false_drains() {
  let data = [1, 3, 5];
  let mut counter = PullCounter::new(ArrayProducer::new(&data));
  assert!(!counter.by_ref().any_match(|x| x % 2 == 0));
  assert_eq!(counter.pulls, 4);
}

#[test]
fn test_all_match_drains_by_default() {
  let data = [2, 4, 6, 7, 8];
  let mut counter = PullCounter::new(ArrayProducer::new(&data));
  let mut evaluated = 0;
  let all_even = counter.by_ref().all_match(|x| {
    evaluated += 1;
    x % 2 == 0
  });
  assert!(!all_even);
  assert_eq!(evaluated, 5);
  assert_eq!(counter.pulls, 6);
}

#[test]
fn test_all_match_true() {
  let data = [2, 4, 6];
  assert!(ArrayProducer::new(&data).all_match(|x| x % 2 == 0));
  assert!(empty::<i32>().all_match(|_| false));
}

#[test]
fn test_none_match_drains_by_default() {
  let data = [1, 2, 3];
  let mut counter = PullCounter::new(ArrayProducer::new(&data));
  assert!(!counter.by_ref().none_match(|x| *x == 1));
  assert_eq!(counter.pulls, 4);
}

#[test]
fn test_none_match_true() {
  let data = [1, 3, 5];
  assert!(ArrayProducer::new(&data).none_match(|x| x % 2 == 0));
  assert!(empty::<i32>().none_match(|_| true));
}

#[test]
fn test_short_circuit_policy_stops_all_match() {
  let data = [2, 4, 6, 7, 8];
  let mut counter = PullCounter::new(ArrayProducer::new(&data));
  let config = ConsumerConfig::default().with_match_policy(MatchPolicy::ShortCircuit);
  assert!(!counter.by_ref().consumer(config).all_match(|x| x % 2 == 0));
  assert_eq!(counter.pulls, 4);
}

#[test]
fn test_short_circuit_policy_stops_none_match() {
  let data = [1, 2, 3];
  let mut counter = PullCounter::new(ArrayProducer::new(&data));
  let config = ConsumerConfig::default().with_match_policy(MatchPolicy::ShortCircuit);
  assert!(!counter.by_ref().consumer(config).none_match(|x| *x == 1));
  assert_eq!(counter.pulls, 1);
}

#[test]
fn test_try_for_each_returns_first_error_unmodified() {
  #[derive(Debug, PartialEq)]
  struct TooBig(i32);

  let mut counter = PullCounter::new(RangeProducer::new(0..10));
  let mut seen = Vec::new();
  let result = counter.by_ref().try_for_each(|x| {
    if x > 2 {
      return Err(TooBig(x));
    }
    seen.push(x);
    Ok(())
  });
  assert_eq!(result, Err(TooBig(3)));
  assert_eq!(seen, vec![0, 1, 2]);
  assert_eq!(counter.pulls, 4);

  let rest: Vec<i32> = counter.into_pulls().collect();
  assert_eq!(rest, vec![4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_try_for_each_ok() {
  let result: Result<(), String> = RangeProducer::new(0..3).try_for_each(|_| Ok(()));
  assert_eq!(result, Ok(()));
}

#[test]
fn test_callback_panic_propagates() {
  let outcome = std::panic::catch_unwind(|| {
    RangeProducer::new(0..3).map(|x| 10 / (x - 1)).count()
  });
  assert!(outcome.is_err());
}
