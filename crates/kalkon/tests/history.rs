//! Tests for the history store: ordering, retention, and serialization.

use kalkon::{History, RetentionPolicy, Value};

fn push(history: &mut History, expression: &str, n: i64) -> u64 {
    history.append(expression, Value::Int(n), n.to_string())
}

#[test]
fn new_history_is_empty() {
    let history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert!(history.latest().is_none());
}

#[test]
fn entries_are_listed_in_insertion_order() {
    let mut history = History::new();
    push(&mut history, "1+1", 2);
    push(&mut history, "2+2", 4);
    push(&mut history, "3+3", 6);

    let expressions: Vec<&str> = history
        .list()
        .map(|entry| entry.expression.as_str())
        .collect();
    assert_eq!(expressions, vec!["1+1", "2+2", "3+3"]);
}

#[test]
fn indices_are_monotonic() {
    let mut history = History::new();
    assert_eq!(push(&mut history, "a", 1), 0);
    assert_eq!(push(&mut history, "b", 2), 1);
    assert_eq!(push(&mut history, "c", 3), 2);
}

#[test]
fn bounded_policy_evicts_oldest() {
    let mut history = History::with_policy(RetentionPolicy::Bounded(2));
    push(&mut history, "a", 1);
    push(&mut history, "b", 2);
    push(&mut history, "c", 3);

    assert_eq!(history.len(), 2);
    let indices: Vec<u64> = history.list().map(|entry| entry.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn unbounded_policy_keeps_everything() {
    let mut history = History::with_policy(RetentionPolicy::Unbounded);
    for i in 0..500 {
        push(&mut history, "x", i);
    }
    assert_eq!(history.len(), 500);
}

#[test]
fn clear_keeps_the_insertion_counter_running() {
    let mut history = History::new();
    push(&mut history, "a", 1);
    history.clear();
    assert!(history.is_empty());
    assert_eq!(push(&mut history, "b", 2), 1);
}

#[test]
fn latest_returns_the_newest_entry() {
    let mut history = History::new();
    push(&mut history, "a", 1);
    push(&mut history, "b", 2);
    assert_eq!(history.latest().unwrap().expression, "b");
}

#[test]
fn entries_serialize() {
    let mut history = History::new();
    push(&mut history, "6*7", 42);
    let entry = history.latest().unwrap();

    let json = serde_json::to_string(entry).unwrap();
    assert!(json.contains("\"6*7\""));
    assert!(json.contains("42"));
}
