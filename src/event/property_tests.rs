//! Property tests for event module
//!
//! Property 1: Eligibility matches the inclusive age range
//! Property 2: Selection is positional within the eligible list
//! Property 3: Effects never duplicate labels

use proptest::prelude::*;

use crate::config::EventRecord;
use crate::event::{apply_event, select_event, Catalog, FixedPick};
use crate::property::SimulationState;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn optional_label() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("  ".to_string())),
        Just(Some("Car".to_string())),
        Just(Some(" Car ".to_string())),
        Just(Some("Dog".to_string())),
    ]
}

/// Generate a single well-formed event record
fn event_strategy() -> impl Strategy<Value = EventRecord> {
    (
        0..=29i32,
        0..=10i32,
        -100_000..=100_000i64,
        optional_label(),
        optional_label(),
        optional_label(),
        any::<bool>(),
        optional_label(),
        optional_label(),
    )
        .prop_map(
            |(from, span, money, get, lost, job, unemployment, join, leave)| EventRecord {
                title: format!("Event {}-{}", from, from + span),
                age_from: from,
                age_to: from + span,
                money_delta: money,
                granted_item: get,
                removed_item: lost,
                new_employment: job,
                clears_employment: unemployment,
                joined_companion: join,
                departed_companion: leave,
            },
        )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<EventRecord>> {
    prop::collection::vec(event_strategy(), 0..=20)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1: every eligible record contains the age, and none is missed
    #[test]
    fn prop_eligibility_matches_range(events in catalog_strategy(), age in -2..=42i32) {
        let catalog = Catalog::new(events.clone()).unwrap();
        let eligible = catalog.eligible(age);

        let expected: Vec<&EventRecord> = events
            .iter()
            .filter(|e| e.age_from <= age && age <= e.age_to)
            .collect();

        prop_assert_eq!(eligible.len(), expected.len());
        for (got, want) in eligible.iter().zip(expected.iter()) {
            prop_assert_eq!(*got, *want);
        }
    }

    /// Property 2: an in-range index selects that position, out of range fails
    #[test]
    fn prop_fixed_pick_is_positional(
        events in catalog_strategy(),
        age in 0..=39i32,
        index in 0usize..25
    ) {
        let catalog = Catalog::new(events).unwrap();
        let eligible = catalog.eligible(age);
        let result = select_event(&catalog, age, &mut FixedPick(index));

        if eligible.is_empty() {
            prop_assert!(matches!(result, Ok(None)));
        } else if index < eligible.len() {
            prop_assert_eq!(result.unwrap(), Some(eligible[index]));
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// Property 3: applying any sequence of events keeps labels unique
    #[test]
    fn prop_apply_keeps_labels_unique(events in prop::collection::vec(event_strategy(), 0..=30)) {
        let mut state = SimulationState::new();
        let mut expected_money = 0i64;

        for event in &events {
            apply_event(&mut state, event);
            expected_money += event.money_delta;

            let mut items = state.items.clone();
            items.sort();
            items.dedup();
            prop_assert_eq!(items.len(), state.items.len());

            let mut companions = state.companions.clone();
            companions.sort();
            companions.dedup();
            prop_assert_eq!(companions.len(), state.companions.len());

            prop_assert!(state.items.iter().all(|i| !i.trim().is_empty() && i.trim() == i));
            if event.clears_employment {
                prop_assert!(state.employment.is_none());
            }
        }

        prop_assert_eq!(state.money, expected_money);
    }
}
