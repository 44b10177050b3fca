use crate::engine::Engine;
use crate::rules::fizzbuzz::{buzz, fizz, fizzbuzz, pass};
use once_cell::sync::Lazy;

static CLASSIC: Lazy<Engine<i64>> = Lazy::new(|| Engine::new([fizzbuzz(), fizz(), buzz(), pass()]));

/// The classic FizzBuzz engine: [divisible-by-15, divisible-by-3,
/// divisible-by-5, any-integer], built once and shared.
///
/// # Example
/// ```no_run
/// for n in 1..=15 {
///     triage::classic().dispatch(&n);
/// }
/// ```
pub fn classic() -> &'static Engine<i64> {
    &CLASSIC
}
