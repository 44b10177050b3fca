//! Property tests for the dispatch invariants: at most one handler runs per
//! call, the first matching present rule governs, and absent slots never
//! affect which rule wins.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use triage::{Dispatch, Engine, Rule, RuleSlot, Verdict};

/// Build an engine from match/miss flags. `None` is an absent slot;
/// `Some(true)` is a rule that hits with a handler recording its index into
/// `hits`; `Some(false)` is a rule that always misses.
fn probe_engine(flags: &[Option<bool>], hits: &Arc<Mutex<Vec<usize>>>) -> Engine<i64> {
    let slots: Vec<RuleSlot<i64>> = flags
        .iter()
        .enumerate()
        .map(|(index, flag)| {
            flag.map(|matches| {
                let hits = Arc::clone(hits);
                Rule::new("probe", move |_n: &i64| {
                    if matches {
                        let hits = Arc::clone(&hits);
                        Verdict::Hit(Some(Arc::new(move |_n: &i64| hits.lock().unwrap().push(index))))
                    } else {
                        Verdict::Miss
                    }
                })
            })
        })
        .collect();
    Engine::from_slots(slots)
}

fn flag_sequences() -> impl Strategy<Value = Vec<Option<bool>>> {
    proptest::collection::vec(proptest::option::of(any::<bool>()), 0..12)
}

proptest! {
    #[test]
    fn exactly_the_first_matching_rule_handles(flags in flag_sequences(), value in any::<i64>()) {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let engine = probe_engine(&flags, &hits);

        engine.dispatch(&value);

        let expected: Vec<usize> =
            flags.iter().position(|flag| *flag == Some(true)).into_iter().collect();
        prop_assert_eq!(hits.lock().unwrap().clone(), expected);
    }

    #[test]
    fn traced_dispatch_agrees_with_dispatch(flags in flag_sequences(), value in any::<i64>()) {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let engine = probe_engine(&flags, &hits);

        let report = engine.dispatch_traced(&value);

        let first_hit = flags.iter().position(|flag| *flag == Some(true));
        match first_hit {
            Some(winner) => {
                prop_assert_eq!(hits.lock().unwrap().clone(), vec![winner]);
                // Every present slot up to and including the winner is
                // evaluated; nothing past the winner is.
                let evaluated = flags[..=winner].iter().filter(|flag| flag.is_some()).count();
                prop_assert_eq!(report.metrics.rules_evaluated, evaluated);
                let skipped = flags[..=winner].iter().filter(|flag| flag.is_none()).count();
                prop_assert_eq!(report.metrics.slots_skipped, skipped);
            }
            None => {
                prop_assert!(hits.lock().unwrap().is_empty());
                let present = flags.iter().filter(|flag| flag.is_some()).count();
                prop_assert_eq!(report.metrics.rules_evaluated, present);
            }
        }
    }

    #[test]
    fn absent_engines_and_empty_sequences_do_nothing(value in any::<i64>()) {
        let engine: Option<Engine<i64>> = None;
        engine.dispatch(&value);

        let empty = Engine::<i64>::new([]);
        empty.dispatch(&value);
    }
}
