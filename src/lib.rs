//! Generic first-match rule dispatch.
//!
//! An [`Engine`] owns an ordered sequence of [`Rule`]s for a single value
//! type. [`Engine::dispatch`] evaluates the rules in declaration order and
//! runs the handler supplied by the first rule that matches. Every absence
//! combination — an empty engine, an absent slot, a matched rule without a
//! handler, an absent engine — degrades to a silent no-op.

use std::fmt;
use std::sync::Arc;

#[macro_use]
mod macros;
mod api;
mod engine;
pub mod handlers;
pub mod rules;

pub use api::classic;
pub use engine::{Dispatch, DispatchMetrics, DispatchOutcome, DispatchReport, Engine, RuleTrace};

// --- Core types -------------------------------------------------------------

/// A side-effecting action over a value.
///
/// Handlers are opaque to the engine: they are invoked with the dispatched
/// value and their return is not tracked. `Arc` lets a rule hand out the same
/// handler on every hit without rebuilding it.
pub type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Outcome of evaluating a single rule against a value.
///
/// `Hit(None)` is legal and means "stop dispatch, do nothing": the rule
/// claims the value but supplies no action.
pub enum Verdict<T> {
    /// The rule did not match; dispatch moves on to the next slot.
    Miss,
    /// The rule matched; dispatch stops and invokes the handler if present.
    Hit(Option<Handler<T>>),
}

impl<T> Verdict<T> {
    /// Returns true when this verdict halts dispatch (handler or not).
    pub fn matched(&self) -> bool {
        matches!(self, Verdict::Hit(_))
    }

    /// Extract the handler, if the verdict is a hit carrying one.
    pub fn into_handler(self) -> Option<Handler<T>> {
        match self {
            Verdict::Hit(handler) => handler,
            Verdict::Miss => None,
        }
    }
}

impl<T> fmt::Debug for Verdict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Miss => write!(f, "Miss"),
            Verdict::Hit(Some(_)) => write!(f, "Hit(<handler>)"),
            Verdict::Hit(None) => write!(f, "Hit(None)"),
        }
    }
}

type Check<T> = Box<dyn Fn(&T) -> Verdict<T> + Send + Sync>;

/// A predicate-and-handler-selector evaluated against a value.
///
/// The check function is caller-supplied and opaque; the engine never
/// inspects it beyond invoking it. The `name` feeds traces and debug output.
pub struct Rule<T> {
    pub name: &'static str,
    check: Check<T>,
}

impl<T> Rule<T> {
    /// Build a rule from a name and a check function.
    pub fn new(name: &'static str, check: impl Fn(&T) -> Verdict<T> + Send + Sync + 'static) -> Self {
        Self { name, check: Box::new(check) }
    }

    /// Evaluate this rule against `value`.
    pub fn evaluate(&self, value: &T) -> Verdict<T> {
        (self.check)(value)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).field("check", &"<function>").finish()
    }
}

/// An entry in an engine's rule sequence.
///
/// Absent entries are permitted and skipped during dispatch: they are never
/// evaluated and never match.
pub type RuleSlot<T> = Option<Rule<T>>;
