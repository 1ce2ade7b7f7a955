// src/messages.rs
//
// The events that can occur in the chat list, and the side effects they
// produce. `Message` is what event handlers and completed requests dispatch;
// `Command` is what the reducer hands back for the executors to run. Both
// are plain data so the reducer stays testable off-browser.
//
use std::collections::BTreeSet;

use crate::models::DeleteOutcome;
use crate::toast::ToastKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // User intents. Confirmation dialogs happen in the event layer, so every
    // `*Confirmed` message means the user already accepted the prompt.
    DeleteThreadConfirmed {
        thread_id: String,
        is_current_chat: bool,
    },
    /// Clear-all was requested; `chat_count` is the number of rendered items
    /// at click time (zero short-circuits into an info toast, no prompt).
    ClearAllRequested { chat_count: usize },
    ThreadSelectionToggled {
        thread_id: String,
        selected: bool,
    },
    BatchDeleteConfirmed,
    BatchModeCancelled,

    // Async outcomes dispatched by the executors.
    ThreadDeleteCompleted {
        thread_id: String,
        is_current_chat: bool,
        outcome: DeleteOutcome,
    },
    ClearAllCompleted { outcome: DeleteOutcome },
    /// Every request of a batch has settled (success or failure).
    BatchDeleteSettled { total: usize, failed: usize },
}

/// Trigger controls that can be put into the busy (spinner) state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusyTarget {
    /// Every `.delete-thread-btn` / `.delete-current-chat` for one thread.
    ThreadButtons { thread_id: String },
    ClearAllButton,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// POST /chat/delete-thread/{id}/, then dispatch ThreadDeleteCompleted.
    DeleteThreadApi {
        thread_id: String,
        is_current_chat: bool,
    },
    /// POST /chat/clear-chats/, then dispatch ClearAllCompleted.
    ClearChatsApi,
    /// One POST per id, concurrently; dispatch BatchDeleteSettled once all
    /// have settled.
    DeleteSelectedApi { thread_ids: Vec<String> },

    ShowToast {
        message: String,
        kind: ToastKind,
    },
    SetBusy(BusyTarget),
    ClearBusy(BusyTarget),

    /// Fade out and remove one rendered item; renders the empty-state
    /// placeholder when the list ends up empty.
    RemoveChatItem { thread_id: String },
    NavigateTo { href: String },
    /// Full page reload after `delay_ms`.
    ScheduleReload { delay_ms: u32 },

    /// Project the in-memory selection onto checkboxes + toolbar visibility.
    RenderBatchSelection { selected: BTreeSet<String> },
    /// Remove injected checkboxes and the batch toolbar.
    TearDownBatchUi,
}
