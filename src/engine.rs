//! The dispatch core.
//!
//! An [`Engine`] is nothing more than an ordered sequence of rule slots plus
//! one operation, dispatch:
//!
//! ```text
//! dispatch(value)
//!   │
//!   ├─ slot absent?        -> skip to next slot
//!   ├─ rule says Miss      -> continue to next slot
//!   ├─ rule says Hit(h)    -> stop; run h if present; return
//!   └─ sequence exhausted  -> return, having done nothing
//! ```
//!
//! Priority is declaration order, not predicate specificity: callers must
//! order rules from most to least specific (divisible-by-15 before
//! divisible-by-3) since the engine performs no conflict resolution. At most
//! one handler runs per call, and rules after the first hit are never
//! evaluated.
//!
//! The engine holds no mutable state across calls; any accumulation (logging
//! matches, collecting output) belongs to caller-owned storage captured by
//! handler closures.
//!
//! ## Observability
//!
//! - [`Engine::dispatch_traced`] is the opt-in path: it bundles the outcome
//!   with per-rule traces and timing (see `engine/metrics.rs`). The plain
//!   [`Engine::dispatch`] path allocates none of this.
//! - Setting `TRIAGE_DEBUG_RULES=1` prints rule-evaluation traces to stderr.

#[path = "engine/metrics.rs"]
mod metrics;

pub use metrics::{DispatchMetrics, DispatchOutcome, DispatchReport, RuleTrace};

use crate::{Rule, RuleSlot, Verdict};
use std::time::Instant;

/// An ordered rule sequence for one value type, immutable after construction.
#[derive(Debug)]
pub struct Engine<T> {
    slots: Vec<RuleSlot<T>>,
}

impl<T> Engine<T> {
    /// Build an engine from rules, every slot present.
    ///
    /// The sequence is kept exactly as supplied: no validation, no
    /// deduplication, no reordering.
    pub fn new(rules: impl IntoIterator<Item = Rule<T>>) -> Self {
        Self { slots: rules.into_iter().map(Some).collect() }
    }

    /// Build an engine from slots, absent entries permitted.
    ///
    /// Absent slots are tolerated and skipped during dispatch.
    pub fn from_slots(slots: impl IntoIterator<Item = RuleSlot<T>>) -> Self {
        Self { slots: slots.into_iter().collect() }
    }

    /// Names of the present rules, in sequence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.slots.iter().flatten().map(|rule| rule.name).collect()
    }

    /// Number of slots (absent entries included).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when the engine holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Evaluate the rules in order and run the first hit's handler.
    ///
    /// Observable effects happen only through the handler. No rule matching,
    /// a hit without a handler, or an empty sequence all return silently.
    pub fn dispatch(&self, value: &T) {
        let debug = std::env::var_os("TRIAGE_DEBUG_RULES").is_some();

        for (index, slot) in self.slots.iter().enumerate() {
            let Some(rule) = slot else { continue };

            match rule.evaluate(value) {
                Verdict::Miss => {
                    if debug {
                        eprintln!("[dispatch] miss '{}' (index {index})", rule.name);
                    }
                }
                Verdict::Hit(handler) => {
                    if debug {
                        let presence = if handler.is_some() { "present" } else { "absent" };
                        eprintln!("[dispatch] hit '{}' (index {index}), handler {presence}", rule.name);
                    }
                    if let Some(handler) = handler {
                        handler(value);
                    }
                    return;
                }
            }
        }

        if debug {
            eprintln!("[dispatch] no rule matched");
        }
    }

    /// Like [`Engine::dispatch`], but records what happened.
    ///
    /// Handlers still run; the report additionally carries the outcome, a
    /// per-rule evaluation trace, and elapsed wall time. Useful for
    /// debugging rule ordering without instrumenting handlers.
    pub fn dispatch_traced(&self, value: &T) -> DispatchReport {
        let started = Instant::now();
        let mut trace: Vec<RuleTrace> = Vec::new();
        let mut slots_skipped = 0usize;

        for (index, slot) in self.slots.iter().enumerate() {
            let Some(rule) = slot else {
                slots_skipped += 1;
                continue;
            };

            match rule.evaluate(value) {
                Verdict::Miss => {
                    trace.push(RuleTrace { index, name: rule.name, matched: false });
                }
                Verdict::Hit(handler) => {
                    trace.push(RuleTrace { index, name: rule.name, matched: true });

                    let outcome = match handler {
                        Some(handler) => {
                            handler(value);
                            DispatchOutcome::Handled { index, rule: rule.name }
                        }
                        None => DispatchOutcome::MatchedWithoutHandler { index, rule: rule.name },
                    };

                    let metrics = DispatchMetrics {
                        total: started.elapsed(),
                        rules_evaluated: trace.len(),
                        slots_skipped,
                    };
                    return DispatchReport { outcome, trace, metrics };
                }
            }
        }

        let metrics =
            DispatchMetrics { total: started.elapsed(), rules_evaluated: trace.len(), slots_skipped };
        DispatchReport { outcome: DispatchOutcome::NoMatch, trace, metrics }
    }
}

/// Dispatch through a possibly absent engine.
///
/// The original contract tolerates a null receiver; in Rust that reads as an
/// explicit option with an early-return guard. Dispatching through `None` is
/// a no-op for any value.
pub trait Dispatch<T> {
    fn dispatch(&self, value: &T);
}

impl<T> Dispatch<T> for Engine<T> {
    fn dispatch(&self, value: &T) {
        Engine::dispatch(self, value);
    }
}

impl<T> Dispatch<T> for Option<Engine<T>> {
    fn dispatch(&self, value: &T) {
        if let Some(engine) = self {
            engine.dispatch(value);
        }
    }
}

impl<T> Dispatch<T> for Option<&Engine<T>> {
    fn dispatch(&self, value: &T) {
        if let Some(engine) = self {
            engine.dispatch(value);
        }
    }
}
