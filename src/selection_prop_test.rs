//! Property test for the batch-selection reducer: after any sequence of
//! checkbox toggles, the projected selection equals a straightforward fold
//! of the same events, and the toolbar is visible exactly when the set is
//! non-empty.

#![cfg(test)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::update::update;

/// A toggle event: (thread id drawn from a small pool, checked state).
fn toggle_strategy() -> impl Strategy<Value = (String, bool)> {
    ("[a-f]", any::<bool>()).prop_map(|(id, checked)| (id, checked))
}

proptest! {
    #[test]
    fn projection_matches_event_fold(events in prop::collection::vec(toggle_strategy(), 0..40)) {
        let mut state = AppState::new();
        let mut expected: BTreeSet<String> = BTreeSet::new();
        let mut last_projection: Option<BTreeSet<String>> = None;

        for (thread_id, selected) in events {
            if selected {
                expected.insert(thread_id.clone());
            } else {
                expected.remove(&thread_id);
            }

            let commands = update(
                &mut state,
                Message::ThreadSelectionToggled { thread_id, selected },
            );
            prop_assert_eq!(commands.len(), 1);
            match commands.into_iter().next().unwrap() {
                Command::RenderBatchSelection { selected } => last_projection = Some(selected),
                other => prop_assert!(false, "unexpected command: {:?}", other),
            }
        }

        if let Some(projection) = last_projection {
            // Toolbar visibility invariant: shown iff the set is non-empty.
            prop_assert_eq!(projection.is_empty(), expected.is_empty());
            prop_assert_eq!(projection, expected);
        } else {
            prop_assert!(expected.is_empty());
        }
    }

    #[test]
    fn batch_dispatch_consumes_exactly_the_selection(ids in prop::collection::btree_set("[a-z]{1,6}", 1..10)) {
        let mut state = AppState::new();
        for id in &ids {
            update(
                &mut state,
                Message::ThreadSelectionToggled { thread_id: id.clone(), selected: true },
            );
        }

        let commands = update(&mut state, Message::BatchDeleteConfirmed);
        prop_assert_eq!(commands.len(), 1);
        match &commands[0] {
            Command::DeleteSelectedApi { thread_ids } => {
                let dispatched: BTreeSet<String> = thread_ids.iter().cloned().collect();
                // One request per selected id, no duplicates, none missing.
                prop_assert_eq!(thread_ids.len(), ids.len());
                prop_assert_eq!(&dispatched, &ids);
            }
            other => prop_assert!(false, "unexpected command: {:?}", other),
        }
        prop_assert!(state.selected_threads.is_empty());
    }
}
