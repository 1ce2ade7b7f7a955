//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs
//! that auto-remove after a few seconds. Each toast carries its own dismiss
//! control and its own timer, so stacked toasts never interfere.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement};

use crate::constants::TOAST_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

pub fn success(msg: &str) {
    show(msg, ToastKind::Success);
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

pub fn info(msg: &str) {
    show(msg, ToastKind::Info);
}

pub fn show(message: &str, kind: ToastKind) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    let root = match ensure_root(&document) {
        Some(el) => el,
        None => return,
    };

    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    toast.set_class_name("toast");
    let modifier = match kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
        ToastKind::Info => "toast-info",
    };
    let _ = toast.class_list().add_1(modifier);

    if let Ok(body) = document.create_element("span") {
        body.set_class_name("toast-body");
        body.set_text_content(Some(message));
        let _ = toast.append_child(&body);
    }

    // Explicit dismiss control.
    if let Ok(close) = document.create_element("button") {
        close.set_class_name("toast-close");
        close.set_text_content(Some("\u{00d7}"));
        let toast_for_close: HtmlElement = toast.clone().unchecked_into();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: web_sys::MouseEvent| {
            toast_for_close.remove();
        }));
        let _ = close.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
        let _ = toast.append_child(&close);
    }

    // Prepend so newest appears on top.
    let _ = root.prepend_with_node_1(&toast);

    // Auto-remove. Dismissing early is fine, the timer then finds no parent.
    let toast_clone: HtmlElement = toast.unchecked_into();
    let cb = Closure::once_into_js(move || {
        let _ = toast_clone
            .parent_node()
            .map(|p| p.remove_child(&toast_clone));
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        TOAST_DISMISS_MS,
    );

    ensure_styles(&document);
}

fn ensure_root(document: &Document) -> Option<Element> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Some(el);
    }
    let root = document.create_element("div").ok()?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("toast-styles").is_some() {
        return;
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:1060;font-family:inherit}
.toast{display:flex;align-items:center;gap:10px;padding:10px 14px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.15);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#198754}
.toast-error{background:#dc3545}
.toast-info{background:#0d6efd}
.toast-close{background:none;border:none;color:inherit;font-size:16px;line-height:1;cursor:pointer;padding:0}
/* spinner for busy buttons */
.spinner{display:inline-block;width:14px;height:14px;border:2px solid currentColor;border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle}
@keyframes spin{to{transform:rotate(360deg)}}
@keyframes toast-in{to{opacity:1}}
";

    if let Ok(style) = document.create_element("style") {
        style.set_id("toast-styles");
        style.set_text_content(Some(css));
        if let Ok(Some(head)) = document.query_selector("head") {
            let _ = head.append_child(&style);
        } else if let Some(body) = document.body() {
            let _ = body.append_child(&style);
        }
    }
}
