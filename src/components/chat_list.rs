//! Read/write helpers for the rendered chat-history list.
//!
//! Thread ids are opaque strings, so items and trigger buttons are located
//! by iterating the rendered nodes and comparing `data-thread-id` values —
//! ids are never interpolated into CSS selectors.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element};

use crate::constants::{
    CHAT_ITEM_SELECTOR, CLEAR_ALL_BTN_ID, DELETE_TRIGGER_SELECTOR, FADE_OUT_MS,
    LIST_SCROLL_CONTAINER_SELECTOR, THREAD_ID_ATTR, THREAD_ID_HOST_SELECTOR,
};
use crate::dom_utils;

const EMPTY_STATE_HTML: &str = "
<div class=\"text-center text-muted py-4\">
    <i class=\"fas fa-comment-dots fa-2x mb-2\"></i>
    <p class=\"small\">No conversations yet</p>
</div>
";

pub fn chat_item_count(document: &Document) -> usize {
    document
        .query_selector_all(CHAT_ITEM_SELECTOR)
        .map(|list| list.length() as usize)
        .unwrap_or(0)
}

/// All rendered `.chat-item` elements.
pub fn chat_items(document: &Document) -> Vec<Element> {
    collect_elements(document, CHAT_ITEM_SELECTOR)
}

/// The `.chat-item` carrying the given thread id, if rendered.
pub fn find_chat_item(document: &Document, thread_id: &str) -> Option<Element> {
    chat_items(document)
        .into_iter()
        .find(|item| item.get_attribute(THREAD_ID_ATTR).as_deref() == Some(thread_id))
}

/// Thread id of an element, read from itself or its nearest
/// `[data-thread-id]` ancestor.
pub fn thread_id_of(el: &Element) -> Option<String> {
    if let Some(id) = el.get_attribute(THREAD_ID_ATTR) {
        return Some(id);
    }
    el.closest(THREAD_ID_HOST_SELECTOR)
        .ok()
        .flatten()
        .and_then(|host| host.get_attribute(THREAD_ID_ATTR))
}

/// Every delete trigger (sidebar button or current-chat button) bound to the
/// given thread.
pub fn trigger_buttons(document: &Document, thread_id: &str) -> Vec<Element> {
    collect_elements(document, DELETE_TRIGGER_SELECTOR)
        .into_iter()
        .filter(|btn| thread_id_of(btn).as_deref() == Some(thread_id))
        .collect()
}

/// Fade the item out, drop it from the DOM, and when the list ends up empty
/// swap in the placeholder and hide the clear-all control.
pub fn remove_item_with_fade(document: &Document, thread_id: &str) {
    let item = match find_chat_item(document, thread_id) {
        Some(el) => el,
        None => return, // already gone; nothing to reconcile
    };

    ensure_styles(document);
    let _ = item.class_list().add_1("chat-item-leaving");

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = document.clone();
    let cb = Closure::once_into_js(move || {
        item.remove();
        if chat_item_count(&document) == 0 {
            render_empty_state(&document);
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        FADE_OUT_MS as i32,
    );
}

fn render_empty_state(document: &Document) {
    if let Ok(Some(container)) = document.query_selector(LIST_SCROLL_CONTAINER_SELECTOR) {
        container.set_inner_html(EMPTY_STATE_HTML);
    }
    if let Some(btn) = document.get_element_by_id(CLEAR_ALL_BTN_ID) {
        dom_utils::hide(&btn);
    }
}

fn collect_elements(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("chat-list-styles").is_some() {
        return;
    }

    let css = "
.chat-item-leaving{opacity:0;transition:opacity .3s ease-out}
";

    if let Ok(style) = document.create_element("style") {
        style.set_id("chat-list-styles");
        style.set_text_content(Some(css));
        if let Ok(Some(head)) = document.query_selector("head") {
            let _ = head.append_child(&style);
        }
    }
}
