//! Generic rule building blocks, usable for any value type.

use crate::{Handler, Rule, Verdict};

/// A rule that always hits and returns the supplied handler unchanged.
///
/// Place it last: anything after a fallback is unreachable.
pub fn fallback<T: 'static>(name: &'static str, handler: Handler<T>) -> Rule<T> {
    Rule::new(name, move |_value: &T| Verdict::Hit(Some(handler.clone())))
}

/// A rule that hits iff `predicate(value)`, returning the supplied handler.
///
/// ```
/// use triage::rules::when;
/// use triage::handlers::print_line;
///
/// let rule = when("negative", |n: &i64| *n < 0, print_line("below zero"));
/// assert!(rule.evaluate(&-1).matched());
/// assert!(!rule.evaluate(&1).matched());
/// ```
pub fn when<T: 'static>(
    name: &'static str,
    predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    handler: Handler<T>,
) -> Rule<T> {
    Rule::new(name, move |value: &T| {
        if predicate(value) { Verdict::Hit(Some(handler.clone())) } else { Verdict::Miss }
    })
}

/// A rule that hits iff `predicate(value)` but supplies no handler: dispatch
/// stops and nothing runs.
pub fn halt<T: 'static>(
    name: &'static str,
    predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(
        name,
        move |value: &T| if predicate(value) { Verdict::Hit(None) } else { Verdict::Miss },
    )
}
