//! Dispatch observability.
//!
//! These structs exist for the opt-in [`Engine::dispatch_traced`] path:
//!
//! - `Engine::dispatch` for normal operation (allocates nothing extra).
//! - `Engine::dispatch_traced` for debugging rule ordering and inspecting
//!   which rule claimed a value.
//!
//! [`Engine::dispatch_traced`]: crate::Engine::dispatch_traced

use std::time::Duration;

/// What a dispatch call did, and which rule governed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A rule hit and its handler ran.
    Handled { index: usize, rule: &'static str },
    /// A rule hit with an absent handler: dispatch halted, nothing ran.
    MatchedWithoutHandler { index: usize, rule: &'static str },
    /// The sequence was exhausted without a hit.
    NoMatch,
}

/// One evaluated rule, in evaluation order.
///
/// Skipped (absent) slots never appear here; at most the last entry has
/// `matched == true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTrace {
    /// Position of the rule in the engine's slot sequence.
    pub index: usize,
    pub name: &'static str,
    pub matched: bool,
}

/// Counters and timing for a single dispatch call.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchMetrics {
    /// Total elapsed wall time, handler included.
    pub total: Duration,
    /// Rules actually evaluated (absent slots excluded).
    pub rules_evaluated: usize,
    /// Absent slots passed over before dispatch returned.
    pub slots_skipped: usize,
}

/// Outcome bundled with trace and timing.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub outcome: DispatchOutcome,
    pub trace: Vec<RuleTrace>,
    pub metrics: DispatchMetrics,
}
