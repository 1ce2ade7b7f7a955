// Shared constants: DOM contract selectors, endpoint paths, timings and
// user-facing copy. The markup around us is server-rendered; these selectors
// are the agreed contract with the templates.

// ---------------------------------------------------------------------------
// DOM contract
// ---------------------------------------------------------------------------

pub const CHAT_ITEM_SELECTOR: &str = ".chat-item";
pub const ACTIVE_CHAT_ITEM_SELECTOR: &str = ".chat-item.active";
pub const DELETE_TRIGGER_SELECTOR: &str = ".delete-thread-btn, .delete-current-chat";
pub const CURRENT_CHAT_TRIGGER_CLASS: &str = "delete-current-chat";
pub const THREAD_ID_ATTR: &str = "data-thread-id";
pub const THREAD_ID_HOST_SELECTOR: &str = "[data-thread-id]";

pub const CLEAR_ALL_BTN_ID: &str = "clear-all-btn";
pub const CLEAR_ALL_BTN_SELECTOR: &str = "#clear-all-btn";
pub const LIST_SCROLL_CONTAINER_SELECTOR: &str = ".overflow-auto";
pub const BATCH_MOUNT_SELECTOR: &str = ".chat-list-container";

pub const CHAT_CHECKBOX_CLASS: &str = "chat-checkbox";
pub const CHAT_CHECKBOX_SELECTOR: &str = ".chat-checkbox";
pub const BATCH_ACTIONS_ID: &str = "batch-actions";
pub const DELETE_SELECTED_BTN_ID: &str = "delete-selected";
pub const CANCEL_BATCH_BTN_ID: &str = "cancel-batch";

pub const CSRF_INPUT_SELECTOR: &str = "input[name=csrfmiddlewaretoken]";

// Body attribute guarding against double event registration.
pub const EVENTS_BOUND_ATTR: &str = "data-chat-events-bound";

// ---------------------------------------------------------------------------
// Endpoints & navigation
// ---------------------------------------------------------------------------

pub const DELETE_THREAD_PATH_PREFIX: &str = "/chat/delete-thread/";
pub const CLEAR_CHATS_PATH: &str = "/chat/clear-chats/";
pub const DASHBOARD_PATH: &str = "/chat/dashboard/";

// ---------------------------------------------------------------------------
// Timings
// ---------------------------------------------------------------------------

pub const TOAST_DISMISS_MS: i32 = 4000;
pub const RELOAD_DELAY_MS: u32 = 1000;
pub const FADE_OUT_MS: u32 = 300;

// ---------------------------------------------------------------------------
// User-facing copy
// ---------------------------------------------------------------------------

pub const CONFIRM_DELETE_ONE: &str = "Delete this conversation? This cannot be undone.";
pub const DEFAULT_DELETE_SUCCESS: &str = "Chat deleted successfully";
pub const DEFAULT_CLEAR_SUCCESS: &str = "All conversations deleted";
pub const NO_CHATS_TO_DELETE: &str = "No chats to delete";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

pub fn confirm_clear_all(chat_count: usize) -> String {
    format!(
        "Delete all {} conversations? This cannot be undone.",
        chat_count
    )
}

pub fn confirm_delete_selected(selected_count: usize) -> String {
    format!("Delete {} selected conversations?", selected_count)
}

pub fn delete_error_message(error: &str) -> String {
    format!("Error deleting chat: {}", error)
}

pub fn partial_batch_failure_message(failed: usize, total: usize) -> String {
    format!("{} of {} conversations could not be deleted", failed, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_messages_include_counts() {
        assert_eq!(
            confirm_clear_all(7),
            "Delete all 7 conversations? This cannot be undone."
        );
        assert_eq!(
            confirm_delete_selected(3),
            "Delete 3 selected conversations?"
        );
    }

    #[test]
    fn error_message_carries_server_text() {
        assert_eq!(
            delete_error_message("Chat not found"),
            "Error deleting chat: Chat not found"
        );
    }
}
