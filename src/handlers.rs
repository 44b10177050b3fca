//! Preset handlers.
//!
//! Trivial side-effecting procedures with no internal state and no error
//! conditions. Anything beyond printing (accumulating results, writing to a
//! sink) belongs in caller-supplied closures wrapped via [`handler!`] or
//! `Arc::new`.

use crate::Handler;
use std::fmt::Display;
use std::sync::Arc;

/// A handler that prints a fixed literal line to stdout.
pub fn print_line<T: 'static>(text: &'static str) -> Handler<T> {
    Arc::new(move |_value: &T| println!("{text}"))
}

/// A handler that prints the value itself.
pub fn print_value<T: Display + 'static>() -> Handler<T> {
    Arc::new(|value: &T| println!("{value}"))
}

/// A handler that performs no effect at all.
///
/// Distinct from an *absent* handler only in that the rule still "runs"
/// something; both shapes leave dispatch observably silent.
pub fn noop<T: 'static>() -> Handler<T> {
    Arc::new(|_value: &T| {})
}
