use wasm_bindgen::prelude::*;

mod command_executors;
mod components;
mod constants;
mod dom_utils;
mod messages;
mod models;
mod network;
mod state;
mod toast;
mod ui;
mod update; // reducer: (state, message) -> commands

#[cfg(test)]
mod selection_prop_test;

// Main entry point for the WASM module: install the panic hook and wire the
// chat-list event handlers. The list itself is server-rendered; everything
// else reacts to events from here on.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    ui::events::setup_chat_event_handlers(&document)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Page-script API. Templates can call these off the module object, e.g. to
// offer a "select multiple" affordance or trigger a deletion with custom
// confirmation copy.
// ---------------------------------------------------------------------------

/// Confirm and delete one thread. `confirm_text` overrides the default
/// prompt; declining is a silent no-op.
#[wasm_bindgen]
pub fn delete_thread(thread_id: String, is_current_chat: bool, confirm_text: Option<String>) {
    ui::events::request_thread_deletion(thread_id, is_current_chat, confirm_text);
}

/// Confirm and delete every conversation, then reload the page.
#[wasm_bindgen]
pub fn clear_all() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        ui::events::request_clear_all(&document);
    }
}

/// Enter batch-selection mode: checkboxes on every item plus the
/// Delete Selected / Cancel toolbar.
#[wasm_bindgen]
pub fn enable_batch_mode() -> Result<(), JsValue> {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        components::batch_toolbar::enable(&document)?;
        state::APP_STATE.with(|s| s.borrow_mut().batch_mode = true);
    }
    Ok(())
}

/// Show a toast. `severity` is one of "success", "error", "info"; anything
/// else falls back to info.
#[wasm_bindgen]
pub fn notify(message: &str, severity: &str) {
    let kind = match severity {
        "success" => toast::ToastKind::Success,
        "error" => toast::ToastKind::Error,
        _ => toast::ToastKind::Info,
    };
    toast::show(message, kind);
}
