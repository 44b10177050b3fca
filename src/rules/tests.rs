use crate::rules::combinators::{fallback, halt, when};
use crate::rules::fizzbuzz::{buzz, fizz, fizzbuzz, pass};
use crate::{Engine, Handler, Rule};
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<String>>>;

fn push(log: &Log, label: &'static str) -> Handler<i64> {
    let log = Arc::clone(log);
    Arc::new(move |_n: &i64| log.lock().unwrap().push(label.to_string()))
}

fn push_value(log: &Log) -> Handler<i64> {
    let log = Arc::clone(log);
    Arc::new(move |n: &i64| log.lock().unwrap().push(n.to_string()))
}

#[test]
fn divisibility_presets_match_expected_inputs() {
    // (rule, matching inputs, missing inputs)
    let cases: Vec<(Rule<i64>, Vec<i64>, Vec<i64>)> = vec![
        (fizzbuzz(), vec![15, 30, 45, 0], vec![3, 5, 7]),
        (fizz(), vec![3, 6, 9, 15], vec![4, 5]),
        (buzz(), vec![5, 10, 15], vec![3, 7]),
        (pass(), vec![1, 2, 7, 15, -8], vec![]),
    ];

    for (rule, hits, misses) in cases {
        for n in hits {
            let verdict = rule.evaluate(&n);
            assert!(verdict.matched(), "rule '{}' should hit on {n}", rule.name);
            assert!(verdict.into_handler().is_some(), "rule '{}' should carry a handler", rule.name);
        }
        for n in misses {
            let verdict = rule.evaluate(&n);
            assert!(!verdict.matched(), "rule '{}' should miss on {n}", rule.name);
            assert!(verdict.into_handler().is_none());
        }
    }
}

#[test]
fn when_returns_the_handler_only_on_a_hit() {
    let log: Log = Arc::default();
    let rule = when("even", |n: &i64| n % 2 == 0, push(&log, "even"));

    let verdict = rule.evaluate(&2);
    assert!(verdict.matched());
    let handler = verdict.into_handler().expect("hit must carry the handler");
    handler(&2);
    assert_eq!(*log.lock().unwrap(), vec!["even".to_string()]);

    let verdict = rule.evaluate(&3);
    assert!(!verdict.matched());
    assert!(verdict.into_handler().is_none());
}

#[test]
fn fallback_always_hits_with_the_supplied_handler() {
    let log: Log = Arc::default();
    let rule = fallback("anything", push(&log, "anything"));

    for n in [-3, 0, 99] {
        assert!(rule.evaluate(&n).matched());
    }
}

#[test]
fn halt_hits_without_a_handler() {
    let rule = halt::<i64>("swallow negatives", |n| *n < 0);

    let verdict = rule.evaluate(&-4);
    assert!(verdict.matched());
    assert!(verdict.into_handler().is_none());

    assert!(!rule.evaluate(&4).matched());
}

#[test]
fn classic_sequence_over_one_to_fifteen() {
    let log: Log = Arc::default();

    // Same shape as the printing presets, with handlers that collect into
    // caller-owned storage instead of writing to stdout.
    let engine = Engine::new([
        when("divisible by 15", |n: &i64| n % 15 == 0, push(&log, "FizzBuzz")),
        when("divisible by 3", |n: &i64| n % 3 == 0, push(&log, "Fizz")),
        when("divisible by 5", |n: &i64| n % 5 == 0, push(&log, "Buzz")),
        fallback("any integer", push_value(&log)),
    ]);

    for n in 1..=15 {
        engine.dispatch(&n);
    }

    let expected = [
        "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13", "14",
        "FizzBuzz",
    ];
    assert_eq!(*log.lock().unwrap(), expected);
}

#[test]
fn rule_macro_builds_plain_and_silent_rules() {
    let log: Log = Arc::default();

    let noisy = rule! {
        name: "positive",
        matches: |n: &i64| *n > 0,
        handler: push(&log, "positive"),
    };
    assert!(noisy.evaluate(&1).matched());
    assert!(!noisy.evaluate(&-1).matched());

    let silent = rule! {
        name: "zero",
        matches: |n: &i64| *n == 0,
    };
    let verdict = silent.evaluate(&0);
    assert!(verdict.matched());
    assert!(verdict.into_handler().is_none());
}
