//! Controller state and the global dispatch entry point.
//!
//! The only state the controller owns outright is the batch selection; the
//! rendered list itself belongs to the server-rendered page and is treated
//! as a projection target, never as a source of truth for selection.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::messages::{Command, Message};
use crate::update::update;

pub struct AppState {
    /// Thread ids currently ticked in batch mode. Checkbox state in the DOM
    /// is re-projected from this set after every selection change.
    pub selected_threads: BTreeSet<String>,
    /// Whether batch UI (checkboxes + toolbar) has been injected.
    pub batch_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_threads: BTreeSet::new(),
            batch_mode: false,
        }
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run a message through the reducer and execute the resulting commands.
///
/// The mutable borrow is released before any command runs: executors are
/// free to dispatch follow-up messages (and the async ones will) without
/// tripping over a live `RefCell` borrow.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.dispatch(msg)
    });

    for cmd in commands {
        crate::command_executors::execute_command(cmd);
    }
}

/// Read-only peek at the current selection size, used by the event layer to
/// build the batch confirmation prompt without holding a borrow across the
/// confirm dialog.
pub fn selected_count() -> usize {
    APP_STATE.with(|state| state.borrow().selected_threads.len())
}
