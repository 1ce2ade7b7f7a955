//! Network layer: endpoint URL helpers, CSRF lookup and the fetch client.

pub mod api_client;

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::constants::{CLEAR_CHATS_PATH, CSRF_INPUT_SELECTOR, DELETE_THREAD_PATH_PREFIX};

pub fn delete_thread_url(thread_id: &str) -> String {
    // Thread ids are opaque; encode so they survive the path position.
    let encoded: String = js_sys::encode_uri_component(thread_id).into();
    format!("{}{}/", DELETE_THREAD_PATH_PREFIX, encoded)
}

pub fn clear_chats_url() -> String {
    CLEAR_CHATS_PATH.to_string()
}

/// Read the CSRF token from the hidden form field the page template renders.
/// Provisioning of the field is the server's job; a missing field yields an
/// empty token and the server will reject the request.
pub fn csrf_token() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(CSRF_INPUT_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
