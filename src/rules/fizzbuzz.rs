//! The classic integer divisibility rules.
//!
//! Ordering matters when these feed an engine: `fizzbuzz()` must come before
//! `fizz()` and `buzz()`, since dispatch takes the first hit and 15 divides
//! by all three. [`crate::classic`] wires them in the right order.

use crate::Rule;
use crate::handlers::{print_line, print_value};

/// Hits on multiples of 15; prints "FizzBuzz".
pub fn fizzbuzz() -> Rule<i64> {
    rule! {
        name: "divisible by 15",
        matches: |n: &i64| n % 15 == 0,
        handler: print_line("FizzBuzz"),
    }
}

/// Hits on multiples of 3; prints "Fizz".
pub fn fizz() -> Rule<i64> {
    rule! {
        name: "divisible by 3",
        matches: |n: &i64| n % 3 == 0,
        handler: print_line("Fizz"),
    }
}

/// Hits on multiples of 5; prints "Buzz".
pub fn buzz() -> Rule<i64> {
    rule! {
        name: "divisible by 5",
        matches: |n: &i64| n % 5 == 0,
        handler: print_line("Buzz"),
    }
}

/// Hits unconditionally; prints the number itself. The classic fallback.
pub fn pass() -> Rule<i64> {
    rule! {
        name: "any integer",
        matches: |_n: &i64| true,
        handler: print_value(),
    }
}
