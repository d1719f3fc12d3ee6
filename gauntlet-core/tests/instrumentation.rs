//! Tests for the spans and events emitted by coarse operations.

mod common;

use common::Collector;
use gauntlet_core::{
    GraphErrorCode, LabeledGraph, RandomSource, SeededRandom, Weight,
    generate::{RandomGraphBuilder, random_tree},
    strings::{HashBase, StringRandom},
};
use rstest::rstest;
use tracing_subscriber::{layer::SubscriberExt, registry};

fn collect(run: impl FnOnce()) -> Collector {
    let collector = Collector::default();
    let subscriber = registry().with(collector.clone());
    tracing::subscriber::with_default(subscriber, run);
    collector
}

#[rstest]
fn shuffle_records_graph_size_and_nested_permutation() {
    let collector = collect(|| {
        let mut graph = random_tree(5, &mut SeededRandom::new(1)).expect("tree builds");
        graph
            .shuffle(&mut SeededRandom::new(2))
            .expect("shuffle succeeds");
    });

    let shuffle = collector.span("shuffle").expect("shuffle span recorded");
    assert_eq!(shuffle.fields.get("vertices").map(String::as_str), Some("5"));
    assert_eq!(shuffle.fields.get("edges").map(String::as_str), Some("4"));
    assert!(collector.span("permute_edges").is_some());
    assert!(collector.messages().iter().any(|message| message == "graph shuffled"));
}

/// Replays reversed permutations, so every shuffle relabels.
struct Reversing;

impl RandomSource for Reversing {
    fn uniform(&mut self, _bound: usize) -> usize {
        0
    }

    fn range_inclusive(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn permutation(&mut self, n: usize) -> Vec<usize> {
        (0..n).rev().collect()
    }
}

fn path() -> LabeledGraph {
    let mut graph = LabeledGraph::undirected();
    graph.add_edge(1, 2, Weight::Empty).expect("edge");
    graph.add_edge(1, 0, Weight::Empty).expect("edge");
    graph
}

#[rstest]
fn accepted_normalisation_records_its_span() {
    let collector = collect(|| {
        path().normalize_edges().expect("identity labels");
    });
    let span = collector.span("normalize_edges").expect("normalize span recorded");
    assert_eq!(span.fields.get("edges").map(String::as_str), Some("2"));
    assert!(collector.span("permute_edges").is_some());
    assert!(collector.errors().is_empty());
}

#[rstest]
fn rejected_normalisation_records_the_error() {
    let mut result = Ok(());
    let collector = collect(|| {
        let mut graph = path();
        graph.shuffle(&mut Reversing).expect("shuffle");
        result = graph.normalize_edges();
    });
    let err = result.expect_err("relabelled graph cannot be normalised");
    assert_eq!(err.code(), GraphErrorCode::PreconditionViolation);
    assert!(collector.span("normalize_edges").is_some());
    let errors = collector.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], err.to_string());
}

#[rstest]
fn generators_and_anti_hash_are_instrumented() {
    let collector = collect(|| {
        RandomGraphBuilder::new()
            .with_vertices(6)
            .with_edges(7)
            .build()
            .expect("shape fits")
            .generate(&mut SeededRandom::new(3))
            .expect("graph generates");
        let base = HashBase::new(10_007, 3).expect("valid base");
        StringRandom::new()
            .anti_hash(&mut SeededRandom::new(4), &[base], "a-d", None)
            .expect("collision found");
    });

    let generate = collector.span("generate").expect("generate span recorded");
    assert_eq!(generate.fields.get("edges").map(String::as_str), Some("7"));
    let anti_hash = collector.span("anti_hash").expect("anti_hash span recorded");
    assert_eq!(anti_hash.fields.get("bases").map(String::as_str), Some("1"));
    assert!(collector.messages().iter().any(|message| message == "collision found"));
}
