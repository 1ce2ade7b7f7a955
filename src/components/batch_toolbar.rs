//! Batch selection mode: injected checkboxes, the Delete Selected / Cancel
//! toolbar, and the projection of the in-memory selection set onto both.
//!
//! The DOM here is write-only: membership lives in
//! `AppState::selected_threads` and `render_selection` re-projects it after
//! every change, so checkboxes can never drift from the logical model.

use std::collections::BTreeSet;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, HtmlInputElement, MouseEvent};

use crate::components::chat_list;
use crate::constants::{
    confirm_delete_selected, BATCH_ACTIONS_ID, BATCH_MOUNT_SELECTOR, CANCEL_BATCH_BTN_ID,
    CHAT_CHECKBOX_CLASS, CHAT_CHECKBOX_SELECTOR, DELETE_SELECTED_BTN_ID, THREAD_ID_ATTR,
};
use crate::dom_utils;
use crate::messages::Message;
use crate::state::{dispatch_global_message, selected_count};

/// Enter batch mode: give every rendered item a checkbox and make sure the
/// toolbar exists (hidden until something is selected). Idempotent — items
/// that already carry a checkbox and an existing toolbar are left alone.
pub fn enable(document: &Document) -> Result<(), JsValue> {
    for item in chat_list::chat_items(document) {
        if item.query_selector(CHAT_CHECKBOX_SELECTOR)?.is_some() {
            continue;
        }
        let thread_id = match item.get_attribute(THREAD_ID_ATTR) {
            Some(id) => id,
            None => continue,
        };
        let checkbox = build_checkbox(document, &thread_id)?;
        item.prepend_with_node_1(&checkbox)?;
    }

    ensure_toolbar(document)?;
    Ok(())
}

/// Project the selection set: checkboxes mirror membership, toolbar is
/// visible exactly while the set is non-empty.
pub fn render_selection(document: &Document, selected: &BTreeSet<String>) {
    for checkbox in checkboxes(document) {
        let member = checkbox
            .get_attribute(THREAD_ID_ATTR)
            .map(|id| selected.contains(&id))
            .unwrap_or(false);
        if let Some(input) = checkbox.dyn_ref::<HtmlInputElement>() {
            input.set_checked(member);
        }
    }

    if let Some(toolbar) = document.get_element_by_id(BATCH_ACTIONS_ID) {
        if selected.is_empty() {
            dom_utils::hide(&toolbar);
        } else {
            dom_utils::show(&toolbar);
        }
    }
}

/// Leave batch mode: drop every injected checkbox and the toolbar.
pub fn tear_down(document: &Document) {
    for checkbox in checkboxes(document) {
        checkbox.remove();
    }
    if let Some(toolbar) = document.get_element_by_id(BATCH_ACTIONS_ID) {
        toolbar.remove();
    }
}

fn build_checkbox(document: &Document, thread_id: &str) -> Result<Element, JsValue> {
    let checkbox = document.create_element("input")?;
    checkbox.set_attribute("type", "checkbox")?;
    checkbox.set_class_name(&format!("{} form-check-input me-2", CHAT_CHECKBOX_CLASS));
    checkbox.set_attribute(THREAD_ID_ATTR, thread_id)?;

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let input = match e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            Some(i) => i,
            None => return,
        };
        let thread_id = match input.get_attribute(THREAD_ID_ATTR) {
            Some(id) => id,
            None => return,
        };
        dispatch_global_message(Message::ThreadSelectionToggled {
            thread_id,
            selected: input.checked(),
        });
    }));
    checkbox.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(checkbox)
}

fn ensure_toolbar(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(BATCH_ACTIONS_ID).is_some() {
        return Ok(());
    }
    let mount = match document.query_selector(BATCH_MOUNT_SELECTOR)? {
        Some(el) => el,
        None => return Ok(()), // page has no batch mount; nothing to build
    };

    let toolbar = document.create_element("div")?;
    toolbar.set_id(BATCH_ACTIONS_ID);
    toolbar.set_class_name("batch-actions mb-3 p-2 bg-light rounded");
    dom_utils::hide(&toolbar);

    let delete_btn = document.create_element("button")?;
    delete_btn.set_id(DELETE_SELECTED_BTN_ID);
    delete_btn.set_class_name("btn btn-sm btn-danger");
    delete_btn.set_inner_html("<i class=\"fas fa-trash me-1\"></i>Delete Selected");
    let delete_cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        let count = selected_count();
        if count == 0 {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&confirm_delete_selected(count)).ok())
            .unwrap_or(false);
        if confirmed {
            dispatch_global_message(Message::BatchDeleteConfirmed);
        }
    }));
    delete_btn.add_event_listener_with_callback("click", delete_cb.as_ref().unchecked_ref())?;
    delete_cb.forget();
    toolbar.append_child(&delete_btn)?;

    let cancel_btn = document.create_element("button")?;
    cancel_btn.set_id(CANCEL_BATCH_BTN_ID);
    cancel_btn.set_class_name("btn btn-sm btn-secondary ms-2");
    cancel_btn.set_text_content(Some("Cancel"));
    let cancel_cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        dispatch_global_message(Message::BatchModeCancelled);
    }));
    cancel_btn.add_event_listener_with_callback("click", cancel_cb.as_ref().unchecked_ref())?;
    cancel_cb.forget();
    toolbar.append_child(&cancel_btn)?;

    mount.prepend_with_node_1(&toolbar)?;
    Ok(())
}

fn checkboxes(document: &Document) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(CHAT_CHECKBOX_SELECTOR) {
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
