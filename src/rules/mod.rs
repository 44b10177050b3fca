//! Preset rules.
//!
//! `fizzbuzz` holds the classic integer divisibility rules; `combinators`
//! holds the generic building blocks ([`when`], [`fallback`], [`halt`]) that
//! work for any value type.

pub mod combinators;
pub mod fizzbuzz;

#[cfg(test)]
mod tests;

pub use combinators::{fallback, halt, when};
