//! Event wiring for the chat list.
//!
//! One delegated click listener on `<body>` routed through
//! `Element::closest` against the trigger selectors, plus one keydown
//! listener for the delete shortcut. Registration is guarded by a body
//! attribute so calling `setup_chat_event_handlers` again (e.g. after a
//! partial re-init) never stacks duplicate listeners.

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::components::chat_list;
use crate::constants::{
    confirm_clear_all, ACTIVE_CHAT_ITEM_SELECTOR, CLEAR_ALL_BTN_SELECTOR, CONFIRM_DELETE_ONE,
    CURRENT_CHAT_TRIGGER_CLASS, DELETE_TRIGGER_SELECTOR, EVENTS_BOUND_ATTR,
};
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Entry point – call once after page load. Attaches the delegated click
/// handler and the keyboard shortcut.
pub fn setup_chat_event_handlers(document: &Document) -> Result<(), JsValue> {
    let body = match document.body() {
        Some(b) => b,
        None => return Ok(()),
    };
    if body.has_attribute(EVENTS_BOUND_ATTR) {
        return Ok(());
    }
    body.set_attribute(EVENTS_BOUND_ATTR, "true")?;

    setup_click_delegation(&body)?;
    setup_delete_shortcut(document)?;
    Ok(())
}

/// Confirm and dispatch a single-thread deletion. Shared by the click
/// handler, the keyboard shortcut and the `delete_thread` export.
pub fn request_thread_deletion(thread_id: String, is_current_chat: bool, confirm_text: Option<String>) {
    let prompt = confirm_text.unwrap_or_else(|| CONFIRM_DELETE_ONE.to_string());
    if !confirm(&prompt) {
        return;
    }
    dispatch_global_message(Message::DeleteThreadConfirmed {
        thread_id,
        is_current_chat,
    });
}

/// Count items, short-circuit the empty list, otherwise confirm with the
/// literal count and dispatch.
pub fn request_clear_all(document: &Document) {
    let chat_count = chat_list::chat_item_count(document);
    if chat_count > 0 && !confirm(&confirm_clear_all(chat_count)) {
        return;
    }
    dispatch_global_message(Message::ClearAllRequested { chat_count });
}

fn setup_click_delegation(body: &Element) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
        let target = match e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => return,
        };

        // Per-thread delete triggers.
        if let Ok(Some(btn)) = target.closest(DELETE_TRIGGER_SELECTOR) {
            e.prevent_default();
            e.stop_propagation();
            if let Some(thread_id) = chat_list::thread_id_of(&btn) {
                let is_current_chat = btn.class_list().contains(CURRENT_CHAT_TRIGGER_CLASS);
                request_thread_deletion(thread_id, is_current_chat, None);
            }
            return;
        }

        // Bulk delete trigger.
        if let Ok(Some(_)) = target.closest(CLEAR_ALL_BTN_SELECTOR) {
            e.prevent_default();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                request_clear_all(&document);
            }
        }
    }));
    body.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Ctrl/Cmd + D deletes the active chat item, when one exists. Never treated
/// as the "current chat" flavour – the item is removed in place.
fn setup_delete_shortcut(document: &Document) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        if !(e.ctrl_key() || e.meta_key()) || e.key() != "d" {
            return;
        }
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(d) => d,
            None => return,
        };
        let active = match document
            .query_selector(ACTIVE_CHAT_ITEM_SELECTOR)
            .ok()
            .flatten()
        {
            Some(el) => el,
            None => return,
        };
        e.prevent_default();
        if let Some(thread_id) = chat_list::thread_id_of(&active) {
            request_thread_deletion(thread_id, false, None);
        }
    }));
    document.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
